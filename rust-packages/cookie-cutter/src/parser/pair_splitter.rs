use super::segmenter::trim_whitespace;
use crate::constants::NAME_VALUE_SEPARATOR;

/// Splits a segment at its first `=` into a trimmed name and the untouched raw value.
///
/// Returns `None` for segments without `=` or with a blank name.
pub(crate) fn split_pair(segment: &str) -> Option<(&str, &str)> {
    let (name, raw_value) = segment.split_once(NAME_VALUE_SEPARATOR)?;
    let name = trim_whitespace(name);

    if name.is_empty() {
        return None;
    }

    Some((name, raw_value))
}
