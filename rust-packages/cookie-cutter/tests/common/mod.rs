#![allow(dead_code)]

use bunner_cookie_cutter::{CookieCutter, CookiePair};

/// Parses each header value into one fresh cutter and returns the stored cookies.
pub fn cut(headers: &[&str]) -> Vec<CookiePair> {
    let mut cutter = CookieCutter::new();
    for header in headers {
        cutter.add_cookie_field(header);
    }
    cutter.into_cookies()
}

pub fn names_and_values(cookies: &[CookiePair]) -> Vec<(String, String)> {
    cookies
        .iter()
        .map(|c| (c.name.clone(), c.value.clone()))
        .collect()
}
