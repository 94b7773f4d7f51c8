use cookie::Cookie;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::constants::{COOKIE_HEADER, DEFAULT_RESERVED_ATTRIBUTES};
use crate::enums::LogLevel;
use crate::errors::{CookieError, CookieErrorCode};
use crate::parser::ReservedAttributes;

/// A cookie resolved from one segment of a `Cookie` header.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CookiePair {
    pub name: String,
    pub value: String,
    /// Last `$Version` seen earlier in the same header value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl CookiePair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            version: None,
            path: None,
            domain: None,
        }
    }
}

impl From<&CookiePair> for Cookie<'static> {
    fn from(pair: &CookiePair) -> Self {
        let mut cookie = Cookie::new(pair.name.clone(), pair.value.clone());

        if let Some(path) = &pair.path {
            cookie.set_path(path.clone());
        }
        if let Some(domain) = &pair.domain {
            cookie.set_domain(domain.clone());
        }

        cookie
    }
}

impl From<CookiePair> for Cookie<'static> {
    fn from(pair: CookiePair) -> Self {
        Cookie::from(&pair)
    }
}

fn default_reserved_attributes() -> Vec<String> {
    DEFAULT_RESERVED_ATTRIBUTES
        .iter()
        .map(|name| name.to_string())
        .collect()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CookieCutterOptions {
    #[serde(default = "default_reserved_attributes")]
    pub reserved_attributes: Vec<String>,
    #[serde(default)]
    pub extra_reserved_attributes: Vec<String>,
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for CookieCutterOptions {
    fn default() -> Self {
        Self {
            reserved_attributes: default_reserved_attributes(),
            extra_reserved_attributes: Vec::new(),
            log_level: LogLevel::default(),
        }
    }
}

impl CookieCutterOptions {
    pub fn from_json(json_str: &str) -> Result<Self, CookieError> {
        let options: Self = serde_json::from_str(json_str).map_err(|err| {
            tracing::error!("serde_json deserialization error: {:?}", err);

            CookieError::new(
                CookieErrorCode::InvalidOptions,
                "options",
                "from_json",
                "parsing",
                "Invalid JSON string for cookie cutter options".to_string(),
                Some(json!({ "line": err.line(), "column": err.column() })),
            )
        })?;

        options.reserved()?;

        Ok(options)
    }

    /// Builds the reserved attribute set described by these options.
    pub fn reserved(&self) -> Result<ReservedAttributes, CookieError> {
        ReservedAttributes::new(
            self.reserved_attributes
                .iter()
                .chain(self.extra_reserved_attributes.iter()),
        )
    }
}

/// Request view handed to middlewares by the host server.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct HttpRequest {
    pub request_id: String,
    pub url: String,
    /// Header name/value pairs in arrival order; a name may repeat.
    #[serde(default)]
    pub headers: Vec<(String, String)>,
    // Set by the cookie parser middleware
    #[serde(default)]
    pub cookies: Option<Vec<CookiePair>>,
}

impl HttpRequest {
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.headers
            .iter()
            .filter(move |(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn cookie_header_values(&self) -> impl Iterator<Item = &str> {
        self.header_values(COOKIE_HEADER)
    }

    pub fn cookies_json(&self) -> serde_json::Value {
        json!(self.cookies)
    }
}
