//! Error types shared by the routing subsystems.

use thiserror::Error;

/// Errors raised while building a route table.
///
/// Any of these is fatal to application startup: an ambiguous or malformed
/// table cannot be navigated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// No descriptors were supplied.
    #[error("route table is empty")]
    EmptyTable,

    /// Two descriptors share a name.
    #[error("duplicate route name `{name}`")]
    DuplicateName { name: String },

    /// Two descriptors share a path.
    #[error("duplicate route path `{path}` (routes `{first}` and `{second}`)")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    /// A path does not start with `/`.
    #[error("route `{name}` has invalid path `{path}`: paths must start with '/'")]
    InvalidPath { name: String, path: String },

    /// A descriptor has an empty name.
    #[error("route with path `{path}` has an empty name")]
    EmptyName { path: String },

    /// A route references a view identifier nobody registered.
    #[error("route `{route}` references unknown view `{view}`")]
    UnknownView { route: String, view: String },

    /// The base href could not be parsed.
    #[error("invalid base href `{base}`: {reason}")]
    InvalidBase { base: String, reason: String },
}

/// No descriptor matches the requested path.
///
/// This is a normal resolution outcome. The host decides what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route matches `{path}`")]
pub struct NotFound {
    pub path: String,
}

/// Errors returned by navigation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error(transparent)]
    NotFound(#[from] NotFound),

    /// Symbolic navigation to a name that is not in the table.
    #[error("no route named `{name}`")]
    UnknownRoute { name: String },

    /// `go(delta)` would leave the history range.
    #[error("no history entry at offset {delta}")]
    NoHistoryEntry { delta: isize },
}
