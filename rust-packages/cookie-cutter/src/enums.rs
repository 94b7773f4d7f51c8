use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Kind of a `$`-prefixed name that is consumed instead of becoming a cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedAttribute {
    /// `$Version`, applies to the cookies that follow it.
    Version,
    /// `$Path`, applies to the cookie right before it.
    Path,
    /// `$Domain`, applies to the cookie right before it.
    Domain,
    Port,
    /// A name registered by the host with no metadata meaning.
    Other,
}
