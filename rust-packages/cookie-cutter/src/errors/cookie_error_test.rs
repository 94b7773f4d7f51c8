use super::{CookieError, CookieErrorCode};

#[cfg(test)]
mod new {
    use super::*;
    use crate::constants::PACKAGE_VERSION;

    #[test]
    fn fills_code_name_and_version() {
        let err = CookieError::new(
            CookieErrorCode::InvalidHeaderEncoding,
            "cookie_cutter",
            "add_cookie_field_bytes",
            "decoding",
            "Cookie header is not valid UTF-8".to_string(),
            None,
        );

        assert_eq!(err.code, 1);
        assert_eq!(err.error, "InvalidHeaderEncoding");
        assert_eq!(err.subsystem, "cookie_cutter");
        assert_eq!(err.stage, "add_cookie_field_bytes");
        assert_eq!(err.cause, "decoding");
        assert_eq!(err.version, PACKAGE_VERSION);
        assert!(!err.thread.is_empty());
    }

    #[test]
    fn codes_are_sequential_from_one() {
        assert_eq!(CookieErrorCode::InvalidHeaderEncoding.code(), 1);
        assert_eq!(CookieErrorCode::InvalidOptions.code(), 2);
        assert_eq!(u16::from(CookieErrorCode::InvalidReservedName), 3);
    }

    #[test]
    fn display_includes_error_name_and_description() {
        let err = CookieError::new(
            CookieErrorCode::InvalidReservedName,
            "options",
            "validate",
            "validation",
            "Reserved attribute must start with '$'".to_string(),
            None,
        );

        let rendered = err.to_string();

        assert!(rendered.contains("InvalidReservedName"));
        assert!(rendered.contains("must start with '$'"));
    }
}

#[cfg(test)]
mod merge_extra {
    use super::*;
    use serde_json::json;

    fn make_error(extra: Option<serde_json::Value>) -> CookieError {
        CookieError::new(
            CookieErrorCode::InvalidOptions,
            "options",
            "from_json",
            "parsing",
            "bad options".to_string(),
            extra,
        )
    }

    #[test]
    fn sets_extra_when_absent() {
        let mut err = make_error(None);

        err.merge_extra(json!({ "offset": 3 }));

        assert_eq!(err.extra, Some(json!({ "offset": 3 })));
    }

    #[test]
    fn extends_existing_object() {
        let mut err = make_error(Some(json!({ "a": 1 })));

        err.merge_extra(json!({ "b": 2 }));

        assert_eq!(err.extra, Some(json!({ "a": 1, "b": 2 })));
    }

    #[test]
    fn ignores_non_object_when_existing_is_object() {
        let mut err = make_error(Some(json!({ "a": 1 })));

        err.merge_extra(json!("scalar"));

        assert_eq!(err.extra, Some(json!({ "a": 1 })));
    }
}
