mod codes;
pub use codes::CookieErrorCode;

mod cookie_error;
pub use cookie_error::CookieError;

#[cfg(test)]
mod cookie_error_test;
