//! Theme toggle notification.

/// Class on the document root marking the dark theme.
pub const THEME_DARK_CLASS: &str = "theme-dark";

/// Header carrying the CSRF token.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Header marking the request as programmatic.
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

/// Announcement text for a theme state.
pub fn theme_announcement(dark: bool) -> &'static str {
    if dark { "Dark theme on" } else { "Light theme on" }
}

/// Description of the theme notification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRequest {
    pub url: String,
    pub csrf_token: String,
}

impl ThemeRequest {
    pub const METHOD: &'static str = "POST";

    /// A missing token is sent as an empty header value.
    pub fn new(url: impl Into<String>, csrf_token: Option<String>) -> Self {
        Self {
            url: url.into(),
            csrf_token: csrf_token.unwrap_or_default(),
        }
    }

    /// Request headers, in send order.
    pub fn headers(&self) -> [(&'static str, &str); 2] {
        [
            (REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE),
            (CSRF_HEADER, self.csrf_token.as_str()),
        ]
    }
}

/// Best-effort notifier for theme changes.
///
/// `notify` must return immediately. Implementations spawn the request and
/// discard its outcome: the local toggle is never rolled back.
pub trait ThemeNotifier {
    fn notify(&self, endpoint: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_with_token() {
        let request = ThemeRequest::new("/api/user/toggle-theme/", Some("abc".to_string()));
        assert_eq!(
            request.headers(),
            [("X-Requested-With", "XMLHttpRequest"), ("X-CSRFToken", "abc")]
        );
    }

    #[test]
    fn test_missing_token_sends_empty_header() {
        let request = ThemeRequest::new("/theme", None);
        assert_eq!(request.headers()[1], ("X-CSRFToken", ""));
    }

    #[test]
    fn test_announcement_names_state() {
        assert_eq!(theme_announcement(true), "Dark theme on");
        assert_eq!(theme_announcement(false), "Light theme on");
    }
}
