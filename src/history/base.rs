//! Base href handling.
//!
//! # Responsibilities
//! - Normalize the deployment prefix the application is served under
//! - Render absolute hrefs for route paths
//! - Strip the prefix from address-bar locations
//!
//! # Design Decisions
//! - Relative forms (`/app/`, `app`, empty) are normalized locally
//! - Absolute URLs are parsed with `url`; their origin prefixes hrefs
//! - Prefix comparison is case-sensitive, like route matching

use url::Url;

use crate::error::ConfigurationError;
use crate::routing::normalize_path;

/// The normalized deployment prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base {
    /// Scheme and authority for absolute bases, e.g. `https://example.com`.
    origin: Option<String>,

    /// Path prefix without trailing slash; empty for the root.
    path: String,
}

impl Base {
    /// Base at the root.
    pub fn root() -> Self {
        Self {
            origin: None,
            path: String::new(),
        }
    }

    /// Parse a base href as found in configuration or `BASE_URL`.
    pub fn parse(raw: &str) -> Result<Self, ConfigurationError> {
        let raw = raw.trim();

        if !raw.contains("://") {
            return Ok(Self {
                origin: None,
                path: trim_root(normalize_path(raw)),
            });
        }

        let url = Url::parse(raw).map_err(|e| ConfigurationError::InvalidBase {
            base: raw.to_string(),
            reason: e.to_string(),
        })?;

        let origin = url.origin();
        if !origin.is_tuple() {
            return Err(ConfigurationError::InvalidBase {
                base: raw.to_string(),
                reason: "URL has no origin".to_string(),
            });
        }

        Ok(Self {
            origin: Some(origin.ascii_serialization()),
            path: trim_root(normalize_path(url.path())),
        })
    }

    /// Path prefix, empty for the root.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Address-bar path for a route path, e.g. `/app/about`.
    pub fn location(&self, path: &str) -> String {
        format!("{}{}", self.path, path)
    }

    /// Absolute href for an address-bar location.
    pub fn absolute(&self, location: &str) -> String {
        let origin = self.origin.as_deref().unwrap_or("");
        format!("{}{}", origin, location)
    }

    /// Absolute href for a route path.
    pub fn href(&self, path: &str) -> String {
        self.absolute(&self.location(path))
    }

    /// Route path for an address-bar location, or `None` when the location is
    /// outside the base.
    pub fn strip(&self, location: &str) -> Option<String> {
        let rest = location.strip_prefix(self.path.as_str())?;
        match rest.chars().next() {
            None | Some('/') | Some('?') | Some('#') => Some(normalize_path(rest)),
            Some(_) => None,
        }
    }
}

impl Default for Base {
    fn default() -> Self {
        Self::root()
    }
}

fn trim_root(path: String) -> String {
    if path == "/" {
        String::new()
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_forms() {
        for raw in ["", "/", "  /  ", "//"] {
            let base = Base::parse(raw).unwrap();
            assert!(base.is_root(), "{raw:?} should be the root");
            assert_eq!(base.href("/"), "/");
            assert_eq!(base.href("/about"), "/about");
        }
    }

    #[test]
    fn test_prefixed_base() {
        for raw in ["/app", "/app/", "app", "app/"] {
            let base = Base::parse(raw).unwrap();
            assert_eq!(base.path(), "/app");
        }

        let base = Base::parse("/app/").unwrap();
        assert_eq!(base.location("/about"), "/app/about");
        assert_eq!(base.href("/about"), "/app/about");
        assert_eq!(base.href("/"), "/app/");
    }

    #[test]
    fn test_absolute_base() {
        let base = Base::parse("https://example.com/site/").unwrap();
        assert_eq!(base.origin(), Some("https://example.com"));
        assert_eq!(base.path(), "/site");
        assert_eq!(base.href("/articles"), "https://example.com/site/articles");
        assert_eq!(base.location("/articles"), "/site/articles");
        assert_eq!(base.absolute("/site/"), "https://example.com/site/");

        let bare = Base::parse("https://example.com").unwrap();
        assert!(bare.is_root());
        assert_eq!(bare.href("/"), "https://example.com/");
    }

    #[test]
    fn test_invalid_absolute_base() {
        assert!(matches!(
            Base::parse("http://"),
            Err(ConfigurationError::InvalidBase { .. })
        ));
        assert!(matches!(
            Base::parse("data://text"),
            Err(ConfigurationError::InvalidBase { .. })
        ));
    }

    #[test]
    fn test_strip() {
        let base = Base::parse("/app").unwrap();
        assert_eq!(base.strip("/app/about").as_deref(), Some("/about"));
        assert_eq!(base.strip("/app").as_deref(), Some("/"));
        assert_eq!(base.strip("/app/").as_deref(), Some("/"));
        assert_eq!(base.strip("/app?x=1").as_deref(), Some("/"));
        assert_eq!(base.strip("/application"), None);
        assert_eq!(base.strip("/other/about"), None);

        let root = Base::root();
        assert_eq!(root.strip("/about/").as_deref(), Some("/about"));
    }
}
