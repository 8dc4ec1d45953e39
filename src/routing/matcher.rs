//! Route matching logic.
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - The capture may be empty and may contain slashes

/// Prefix under which every path is relayed upstream.
pub const PROXY_PREFIX: &str = "/proxy/";

/// Matches a path prefix and captures the remainder.
#[derive(Debug, Clone)]
pub struct PrefixCapture {
    prefix: String,
}

impl PrefixCapture {
    /// Create a matcher. A trailing `/` is added if missing so `/proxyfoo`
    /// never matches `/proxy`.
    pub fn new(prefix: impl Into<String>) -> Self {
        let mut prefix = prefix.into();
        if !prefix.ends_with('/') {
            prefix.push('/');
        }
        Self { prefix }
    }

    /// The relay route, `/proxy/{path}`.
    pub fn proxy() -> Self {
        Self::new(PROXY_PREFIX)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the part of `path` after the prefix, or `None` if it doesn't match.
    pub fn capture<'a>(&self, path: &'a str) -> Option<&'a str> {
        path.strip_prefix(self.prefix.as_str())
    }
}

impl Default for PrefixCapture {
    fn default() -> Self {
        Self::proxy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_nested_path() {
        let route = PrefixCapture::proxy();
        assert_eq!(route.capture("/proxy/v1/login"), Some("v1/login"));
        assert_eq!(route.capture("/proxy/a/b/c/"), Some("a/b/c/"));
    }

    #[test]
    fn test_capture_empty_suffix() {
        let route = PrefixCapture::proxy();
        assert_eq!(route.capture("/proxy/"), Some(""));
    }

    #[test]
    fn test_no_match() {
        let route = PrefixCapture::proxy();
        assert_eq!(route.capture("/health"), None);
        assert_eq!(route.capture("/proxyfoo/x"), None);
        assert_eq!(route.capture("/PROXY/x"), None);
    }

    #[test]
    fn test_prefix_normalized() {
        let route = PrefixCapture::new("/relay");
        assert_eq!(route.prefix(), "/relay/");
        assert_eq!(route.capture("/relay/x%20y"), Some("x%20y"));
    }
}
