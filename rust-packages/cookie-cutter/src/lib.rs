//! Lenient parser for HTTP `Cookie` request headers.
//!
//! Real clients send cookie headers with stray quotes and tspecials that break
//! RFC2109/RFC6265 grammar. Every pair that can be made sense of is kept and the
//! rest is silently dropped.
//!
//! ```
//! use bunner_cookie_cutter::CookieCutter;
//!
//! let mut cutter = CookieCutter::new();
//! cutter.add_cookie_field("$Version=0; foo=\"bar\"baz\"; query=b=c&d=e; junk");
//!
//! let cookies = cutter.cookies();
//! assert_eq!(cookies.len(), 2);
//! assert_eq!(cookies[0].value, "bar\"baz");
//! assert_eq!(cookies[1].value, "b=c&d=e");
//! ```
#![deny(
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr
)]
pub mod constants;
pub mod cookie_cutter;
pub mod enums;
pub mod errors;
pub mod logger;
pub mod middlewares;
pub mod parser;
pub mod structures;


pub use cookie_cutter::CookieCutter;
pub use enums::{LogLevel, ReservedAttribute};
pub use errors::{CookieError, CookieErrorCode};
pub use logger::init_logger;
pub use parser::{ReservedAttributes, parse_cookie_header, parse_cookies};
pub use structures::{CookieCutterOptions, CookiePair};
