use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::CookieErrorCode;
use crate::constants::PACKAGE_VERSION;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CookieError {
    pub code: u16,
    pub error: String,
    pub subsystem: String,
    pub stage: String,
    pub cause: String,
    pub ts: u64,
    pub thread: String,
    pub version: String,
    pub description: String,
    pub extra: Option<serde_json::Value>,
}

impl CookieError {
    pub fn new(
        code: CookieErrorCode,
        subsystem: &str,
        stage: &str,
        cause: &str,
        description: String,
        extra: Option<serde_json::Value>,
    ) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default();

        CookieError {
            code: code.code(),
            error: code.as_str().to_string(),
            subsystem: subsystem.to_string(),
            stage: stage.to_string(),
            cause: cause.to_string(),
            ts,
            thread: format!("{:?}", std::thread::current().id()),
            version: PACKAGE_VERSION.to_string(),
            description,
            extra,
        }
    }

    pub fn merge_extra(&mut self, new_extra: serde_json::Value) {
        match (self.extra.as_mut(), new_extra) {
            (Some(serde_json::Value::Object(existing)), serde_json::Value::Object(new_map)) => {
                existing.extend(new_map);
            }
            (None, new_extra) => self.extra = Some(new_extra),
            _ => {}
        }
    }
}

impl fmt::Display for CookieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) in {}/{}: {}",
            self.error, self.code, self.subsystem, self.stage, self.description
        )
    }
}

impl std::error::Error for CookieError {}
