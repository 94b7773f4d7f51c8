
use super::Middleware;
use crate::cookie_cutter::CookieCutter;
use crate::errors::CookieError;
use crate::logger::init_logger;
use crate::parser::ReservedAttributes;
use crate::structures::{CookieCutterOptions, HttpRequest};

/// Fills `req.cookies` from every `Cookie` header of the request, in header order.
#[derive(Debug, Clone, Default)]
pub struct CookieParser {
    reserved: ReservedAttributes,
}

impl CookieParser {
    pub fn new(options: &CookieCutterOptions) -> Result<Self, CookieError> {
        init_logger(options.log_level);

        Ok(Self {
            reserved: options.reserved()?,
        })
    }
}

impl Middleware for CookieParser {
    #[tracing::instrument(level = "trace", skip(self, req), fields(request_id = %req.request_id))]
    fn handle(&self, req: &mut HttpRequest) -> bool {
        tracing::event!(tracing::Level::TRACE, operation = "cookie_parser");

        let mut headers = req.cookie_header_values().peekable();
        if headers.peek().is_none() {
            return true;
        }

        let mut cutter = CookieCutter::with_reserved(self.reserved.clone());
        for header in headers {
            cutter.add_cookie_field(header);
        }

        req.cookies = Some(cutter.into_cookies());

        true
    }
}
