use crate::constants::PAIR_DELIMITER;

fn is_cookie_whitespace(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// Strips SP and HT from both ends.
pub(crate) fn trim_whitespace(text: &str) -> &str {
    text.trim_matches(is_cookie_whitespace)
}

/// Splits a raw `Cookie` header value into trimmed, non-empty pair segments.
///
/// Every `;` ends a segment, including one that sits inside a quoted value.
pub(crate) fn segments(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(PAIR_DELIMITER)
        .map(trim_whitespace)
        .filter(|segment| !segment.is_empty())
}
