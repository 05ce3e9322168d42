//! Route descriptors and resolution results.

use std::sync::Arc;

use serde::Serialize;

use crate::view::View;

/// One navigable location: a (path, name, view) triple.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    /// URL path pattern, e.g. `/articles`.
    pub path: String,

    /// Symbolic name used instead of hard-coded paths.
    pub name: String,

    /// View mounted when the route is active.
    pub view: Arc<dyn View>,
}

impl RouteDescriptor {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: Arc<dyn View>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }
}

/// The outcome of a successful resolution.
///
/// Cheap to clone: it shares the descriptor with the table.
#[derive(Debug, Clone)]
pub struct ResolvedRoute {
    descriptor: Arc<RouteDescriptor>,
}

impl ResolvedRoute {
    pub(crate) fn new(descriptor: Arc<RouteDescriptor>) -> Self {
        Self { descriptor }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn path(&self) -> &str {
        &self.descriptor.path
    }

    pub fn view(&self) -> &Arc<dyn View> {
        &self.descriptor.view
    }

    /// Serializable summary for logs and the CLI.
    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            name: self.name().to_string(),
            path: self.path().to_string(),
            view: self.view().name().to_string(),
        }
    }
}

impl PartialEq for ResolvedRoute {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
            && self.path() == other.path()
            && Arc::ptr_eq(self.view(), other.view())
    }
}

impl Eq for ResolvedRoute {}

/// Plain-data view of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub name: String,
    pub path: String,
    pub view: String,
}
