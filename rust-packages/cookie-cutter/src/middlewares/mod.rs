mod traits;
pub use traits::Middleware;

mod cookie_parser;
pub use cookie_parser::CookieParser;
