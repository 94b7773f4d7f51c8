mod pair_splitter;
mod reserved;
mod segmenter;
mod value_unwrapper;

pub use reserved::ReservedAttributes;

use crate::enums::ReservedAttribute;
use crate::structures::CookiePair;
use pair_splitter::split_pair;
use segmenter::segments;
use value_unwrapper::unwrap_value;

/// Parses one `Cookie` header value and appends every cookie it yields to `cookies`.
///
/// Malformed segments are skipped without affecting the rest of the header.
/// `$Version` applies to the cookies after it, `$Path` and `$Domain` to the
/// cookie right before them, and none of them outlive this header value.
/// Returns the number of cookies appended.
#[tracing::instrument(level = "trace", skip(raw, reserved, cookies), fields(len = raw.len()))]
pub fn parse_cookie_header(
    raw: &str,
    reserved: &ReservedAttributes,
    cookies: &mut Vec<CookiePair>,
) -> usize {
    let start = cookies.len();
    let mut version: Option<u32> = None;

    for segment in segments(raw) {
        let Some((name, raw_value)) = split_pair(segment) else {
            tracing::event!(
                tracing::Level::TRACE,
                warning = "malformed_cookie_segment",
                segment = %segment
            );
            continue;
        };

        let value = unwrap_value(raw_value);

        match reserved.classify(name) {
            None => cookies.push(CookiePair {
                name: name.to_string(),
                value: value.to_string(),
                version,
                path: None,
                domain: None,
            }),
            Some(ReservedAttribute::Version) => match parse_version(value) {
                Some(v) => version = Some(v),
                None => {
                    tracing::event!(
                        tracing::Level::TRACE,
                        warning = "invalid_cookie_version",
                        value = %value
                    );
                }
            },
            Some(ReservedAttribute::Path) => {
                if let Some(cookie) = last_in_header(cookies, start) {
                    cookie.path = Some(value.to_string());
                }
            }
            Some(ReservedAttribute::Domain) => {
                if let Some(cookie) = last_in_header(cookies, start) {
                    cookie.domain = Some(value.to_string());
                }
            }
            Some(ReservedAttribute::Port) | Some(ReservedAttribute::Other) => {
                tracing::event!(
                    tracing::Level::TRACE,
                    operation = "reserved_attribute_dropped",
                    name = %name
                );
            }
        }
    }

    cookies.len() - start
}

/// Parses a single header value with the default reserved attributes.
pub fn parse_cookies(raw: &str) -> Vec<CookiePair> {
    let mut cookies = Vec::new();
    parse_cookie_header(raw, &ReservedAttributes::default(), &mut cookies);

    cookies
}

/// Digits only; signs and overflowing numbers are rejected.
fn parse_version(value: &str) -> Option<u32> {
    let digits = value.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse().ok()
}

fn last_in_header(cookies: &mut [CookiePair], start: usize) -> Option<&mut CookiePair> {
    if cookies.len() > start {
        cookies.last_mut()
    } else {
        None
    }
}
