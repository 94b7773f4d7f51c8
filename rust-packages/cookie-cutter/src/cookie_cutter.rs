use serde_json::json;

use crate::errors::{CookieError, CookieErrorCode};
use crate::logger::init_logger;
use crate::parser::{ReservedAttributes, parse_cookie_header};
use crate::structures::{CookieCutterOptions, CookiePair};

/// Ordered cookie store fed by one or more `Cookie` header values.
///
/// Cookies accumulate across [`CookieCutter::add_cookie_field`] calls in arrival
/// order, duplicates included. One instance belongs to one request.
#[derive(Debug, Clone, Default)]
pub struct CookieCutter {
    reserved: ReservedAttributes,
    cookies: Vec<CookiePair>,
}

impl CookieCutter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reserved(reserved: ReservedAttributes) -> Self {
        Self {
            reserved,
            cookies: Vec::new(),
        }
    }

    /// Builds a cutter from host options, installing the logger at `options.log_level`.
    pub fn with_options(options: &CookieCutterOptions) -> Result<Self, CookieError> {
        init_logger(options.log_level);

        Ok(Self::with_reserved(options.reserved()?))
    }

    pub fn reserved(&self) -> &ReservedAttributes {
        &self.reserved
    }

    /// Parses one header value and appends its cookies. Returns how many were added.
    #[tracing::instrument(level = "trace", skip(self, raw), fields(stored = self.cookies.len()))]
    pub fn add_cookie_field(&mut self, raw: &str) -> usize {
        let added = parse_cookie_header(raw, &self.reserved, &mut self.cookies);

        tracing::event!(tracing::Level::TRACE, operation = "add_cookie_field", added = added as u64);

        added
    }

    /// Same as [`CookieCutter::add_cookie_field`] for a header value that has not
    /// been decoded yet. Nothing is stored when the bytes are not UTF-8.
    pub fn add_cookie_field_bytes(&mut self, raw: &[u8]) -> Result<usize, CookieError> {
        let text = std::str::from_utf8(raw).map_err(|err| {
            tracing::event!(
                tracing::Level::WARN,
                warning = "invalid_cookie_header_encoding",
                valid_up_to = err.valid_up_to() as u64
            );

            let mut error = CookieError::new(
                CookieErrorCode::InvalidHeaderEncoding,
                "cookie_cutter",
                "add_cookie_field_bytes",
                "decoding",
                "Cookie header value is not valid UTF-8".to_string(),
                Some(json!({ "validUpTo": err.valid_up_to() })),
            );
            if let Some(error_len) = err.error_len() {
                error.merge_extra(json!({ "errorLen": error_len }));
            }
            error.merge_extra(json!({ "len": raw.len() }));

            error
        })?;

        Ok(self.add_cookie_field(text))
    }

    pub fn cookies(&self) -> &[CookiePair] {
        &self.cookies
    }

    /// Independent copy of the current cookies.
    pub fn snapshot(&self) -> Vec<CookiePair> {
        self.cookies.clone()
    }

    pub fn into_cookies(self) -> Vec<CookiePair> {
        self.cookies
    }

    pub fn get(&self, name: &str) -> Option<&CookiePair> {
        self.cookies.iter().find(|cookie| cookie.name == name)
    }

    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a CookiePair> {
        self.cookies.iter().filter(move |cookie| cookie.name == name)
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn reset(&mut self) {
        self.cookies.clear();
    }
}
