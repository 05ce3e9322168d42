//! Path normalization and matching.
//!
//! # Responsibilities
//! - Turn raw locations into the normalized form the table stores
//! - Compare a normalized path against a route pattern
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Query strings and hash fragments never take part in matching
//! - No patterns or parameters: a route matches exactly one path

/// Normalize a raw location into a route path.
///
/// Drops any query string and hash fragment, collapses repeated slashes,
/// guarantees a leading slash and removes a trailing one. The root is `/`.
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let segments: Vec<&str> = raw[..end].split('/').filter(|s| !s.is_empty()).collect();

    if segments.is_empty() {
        return "/".to_string();
    }

    let mut path = String::with_capacity(end + 1);
    for segment in segments {
        path.push('/');
        path.push_str(segment);
    }
    path
}

/// Returns true if the normalized `path` matches `pattern`.
pub fn matches(pattern: &str, path: &str) -> bool {
    pattern == path
}
