//! CSRF token lookup in `document.cookie`.

/// Name of the cookie carrying the CSRF token.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Find a cookie's raw (still URI-encoded) value in a cookie header string.
///
/// Mirrors the regex `(^|;)\s*NAME\s*=\s*([^;]+)`: the first match wins and
/// an empty value doesn't count.
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let rest = pair.trim_start().strip_prefix(name)?;
        let value = rest.trim_start().strip_prefix('=')?;
        let trimmed = value.trim_start();
        if !trimmed.is_empty() {
            Some(trimmed)
        } else {
            // `\s*` backtracks so `[^;]+` still gets one character.
            value.char_indices().last().map(|(i, _)| &value[i..])
        }
    })
}

/// Raw CSRF token from a cookie string.
pub fn csrf_token(cookies: &str) -> Option<&str> {
    cookie_value(cookies, CSRF_COOKIE)
}
