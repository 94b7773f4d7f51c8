#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CookieErrorCode {
    InvalidHeaderEncoding = 1,
    InvalidOptions,
    InvalidReservedName,
}

impl CookieErrorCode {
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CookieErrorCode::InvalidHeaderEncoding => "InvalidHeaderEncoding",
            CookieErrorCode::InvalidOptions => "InvalidOptions",
            CookieErrorCode::InvalidReservedName => "InvalidReservedName",
        }
    }
}

impl From<CookieErrorCode> for u16 {
    fn from(error: CookieErrorCode) -> u16 {
        error as u16
    }
}
