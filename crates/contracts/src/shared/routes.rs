//! Backend routes consumed by the browser controllers
//!
//! The views live at `/encode/<image>` and `/decode/<image>`; both post back
//! to their own path. Cleanup goes to `/remove/<image>`.

pub const ENCODE_PREFIX: &str = "encode";
pub const DECODE_PREFIX: &str = "decode";

/// Which controller a page path belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView {
    Encode,
    Decode,
    Other,
}

impl PageView {
    pub fn from_pathname(pathname: &str) -> Self {
        let mut segments = pathname.split('/').filter(|s| !s.is_empty());
        match (segments.next(), segments.next()) {
            (Some(ENCODE_PREFIX), Some(_)) => PageView::Encode,
            (Some(DECODE_PREFIX), Some(_)) => PageView::Decode,
            _ => PageView::Other,
        }
    }
}

/// Last `/`-separated segment of a path, empty when the path ends with `/`.
pub fn last_path_segment(pathname: &str) -> &str {
    pathname.rsplit('/').next().unwrap_or("")
}

/// Deletion endpoint for the artifact named by the current page path.
///
/// The key is the page's own image name, not the generated `save_path`.
pub fn remove_url(remove_prefix: &str, pathname: &str) -> String {
    format!(
        "{}/{}",
        remove_prefix.trim_end_matches('/'),
        last_path_segment(pathname)
    )
}

/// Cleanup request sent while the page unloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalRequest {
    pub url: String,
    pub method: &'static str,
    /// Lets the request outlive the page; delivery is still not guaranteed.
    pub keepalive: bool,
}

impl RemovalRequest {
    pub fn for_page(remove_prefix: &str, pathname: &str) -> Self {
        Self {
            url: remove_url(remove_prefix, pathname),
            method: "POST",
            keepalive: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_view() {
        assert_eq!(PageView::from_pathname("/encode/abc.png"), PageView::Encode);
        assert_eq!(PageView::from_pathname("/decode/abc.png"), PageView::Decode);
        assert_eq!(PageView::from_pathname("/decode/"), PageView::Other);
        assert_eq!(PageView::from_pathname("/"), PageView::Other);
        assert_eq!(PageView::from_pathname("/static/x"), PageView::Other);
    }

    #[test]
    fn test_last_path_segment() {
        assert_eq!(last_path_segment("/decode/abc.png"), "abc.png");
        assert_eq!(last_path_segment("/encode/a/b"), "b");
        assert_eq!(last_path_segment("/decode/"), "");
        assert_eq!(last_path_segment(""), "");
    }

    #[test]
    fn test_remove_url() {
        assert_eq!(remove_url("/remove", "/encode/f00d.png"), "/remove/f00d.png");
        assert_eq!(remove_url("/remove/", "/decode/x.png"), "/remove/x.png");
    }

    #[test]
    fn test_removal_request_is_keepalive_post() {
        let request = RemovalRequest::for_page("/remove", "/decode/f00d.png");
        assert_eq!(request.url, "/remove/f00d.png");
        assert_eq!(request.method, "POST");
        assert!(request.keepalive);
    }
}
