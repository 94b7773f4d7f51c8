pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PAIR_DELIMITER: char = ';';
pub const NAME_VALUE_SEPARATOR: char = '=';
pub const QUOTE: char = '"';

pub const VERSION_ATTRIBUTE: &str = "$Version";
pub const PATH_ATTRIBUTE: &str = "$Path";
pub const DOMAIN_ATTRIBUTE: &str = "$Domain";
pub const PORT_ATTRIBUTE: &str = "$Port";

/// RFC2109 attribute names consumed as metadata unless configured otherwise.
pub const DEFAULT_RESERVED_ATTRIBUTES: [&str; 4] = [
    VERSION_ATTRIBUTE,
    PATH_ATTRIBUTE,
    DOMAIN_ATTRIBUTE,
    PORT_ATTRIBUTE,
];

pub const COOKIE_HEADER: &str = "cookie";
