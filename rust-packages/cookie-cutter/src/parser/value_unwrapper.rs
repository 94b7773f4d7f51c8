use crate::constants::QUOTE;

/// Resolves the final cookie value from its raw text.
///
/// A value starting with `"` loses exactly its first and last code point. Interior
/// quotes and backslashes are kept as they are, and a lone `"` becomes empty.
/// Anything else is returned verbatim.
pub(crate) fn unwrap_value(raw_value: &str) -> &str {
    let Some(rest) = raw_value.strip_prefix(QUOTE) else {
        return raw_value;
    };

    let mut chars = rest.chars();
    chars.next_back();

    chars.as_str()
}
