//! The Navigator: resolution plus history and mount side effects.

use std::sync::Arc;

use tokio::sync::watch;

use crate::error::{NavigationError, NotFound};
use crate::history::{Base, History, MemoryHistory};
use crate::observability::metrics;
use crate::routing::{normalize_path, ResolvedRoute, RouteTable};

use super::MountState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Push,
    Replace,
}

impl Entry {
    fn label(self) -> &'static str {
        match self {
            Entry::Push => "push",
            Entry::Replace => "replace",
        }
    }
}

/// Resolves paths against a frozen route table and keeps history and the
/// mounted view in step.
#[derive(Debug)]
pub struct Navigator {
    table: Arc<RouteTable>,
    base: Base,
    history: Box<dyn History>,
    mounted: MountState,
}

impl Navigator {
    /// A navigator over `table`, with an in-memory history opened at the
    /// base's root.
    pub fn new(base: Base, table: Arc<RouteTable>) -> Self {
        let history = MemoryHistory::starting_at(base.location("/"));
        Self {
            table,
            base,
            history: Box::new(history),
            mounted: MountState::new(),
        }
    }

    /// Replace the history integration, e.g. with one opened on a deep link.
    pub fn with_history(mut self, history: impl History + 'static) -> Self {
        self.history = Box::new(history);
        self
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn base(&self) -> &Base {
        &self.base
    }

    pub fn history(&self) -> &dyn History {
        self.history.as_ref()
    }

    /// The address-bar location under the history cursor, base included.
    pub fn location(&self) -> &str {
        self.history.location()
    }

    /// The mounted route, if any.
    pub fn current(&self) -> Option<&ResolvedRoute> {
        self.mounted.current()
    }

    /// Observe mounted-route changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<ResolvedRoute>> {
        self.mounted.subscribe()
    }

    /// Resolve a normalized path. No side effects.
    pub fn resolve(&self, path: &str) -> Result<ResolvedRoute, NotFound> {
        self.table.resolve(path)
    }

    /// Resolve an address-bar location: strip the base, normalize, resolve.
    pub fn resolve_location(&self, location: &str) -> Result<ResolvedRoute, NotFound> {
        let path = self.base.strip(location).ok_or_else(|| NotFound {
            path: location.to_string(),
        })?;
        self.table.resolve(&path)
    }

    /// Absolute href for a path under the base.
    pub fn href(&self, path: &str) -> String {
        self.base.href(&normalize_path(path))
    }

    /// Absolute href for a named route.
    pub fn href_for(&self, name: &str) -> Result<String, NavigationError> {
        let route = self.route_named(name)?;
        Ok(self.base.href(route.path()))
    }

    /// Mount the view for the location history was opened on.
    pub fn start(&mut self) -> Result<ResolvedRoute, NavigationError> {
        let location = self.history.location().to_string();
        let route = self.resolve_entry("start", &location)?;

        self.mount("start", route.clone());
        Ok(route)
    }

    /// Navigate to `path`, adding a history entry.
    pub fn push(&mut self, path: &str) -> Result<ResolvedRoute, NavigationError> {
        self.navigate(Entry::Push, path)
    }

    /// Navigate to `path`, overwriting the current history entry.
    pub fn replace(&mut self, path: &str) -> Result<ResolvedRoute, NavigationError> {
        self.navigate(Entry::Replace, path)
    }

    /// Navigate to the route called `name`, adding a history entry.
    pub fn push_named(&mut self, name: &str) -> Result<ResolvedRoute, NavigationError> {
        let route = self.route_named(name)?;
        self.navigate(Entry::Push, route.path())
    }

    /// Navigate to the route called `name`, overwriting the current entry.
    pub fn replace_named(&mut self, name: &str) -> Result<ResolvedRoute, NavigationError> {
        let route = self.route_named(name)?;
        self.navigate(Entry::Replace, route.path())
    }

    /// Move through history by `delta` entries.
    ///
    /// The history position moves even when the new location matches no
    /// route; the mounted view only changes on a successful resolution.
    pub fn go(&mut self, delta: isize) -> Result<ResolvedRoute, NavigationError> {
        let location = match self.history.go(delta) {
            Some(location) => location.to_string(),
            None => {
                metrics::record_navigation("go", "no_entry");
                return Err(NavigationError::NoHistoryEntry { delta });
            }
        };

        let route = self.resolve_entry("go", &location)?;
        self.mount("go", route.clone());
        Ok(route)
    }

    pub fn back(&mut self) -> Result<ResolvedRoute, NavigationError> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Result<ResolvedRoute, NavigationError> {
        self.go(1)
    }

    fn navigate(&mut self, entry: Entry, path: &str) -> Result<ResolvedRoute, NavigationError> {
        let path = normalize_path(path);
        let route = self.resolve_or_report(entry.label(), &path)?;

        // Navigating to the entry under the cursor never adds history, but
        // still mounts when nothing is mounted yet.
        let location = self.base.location(route.path());
        if self.history.location() == location {
            tracing::debug!(route = %route.name(), location = %location, "Already at location");
        } else {
            match entry {
                Entry::Push => self.history.push(&location),
                Entry::Replace => self.history.replace(&location),
            }
        }

        self.mount(entry.label(), route.clone());
        Ok(route)
    }

    /// Resolve a history entry, which carries the base prefix.
    fn resolve_entry(&self, kind: &'static str, location: &str) -> Result<ResolvedRoute, NotFound> {
        match self.base.strip(location) {
            Some(path) => self.resolve_or_report(kind, &path),
            None => {
                tracing::warn!(kind, location = %location, "Location outside base");
                metrics::record_not_found();
                metrics::record_navigation(kind, "not_found");
                Err(NotFound {
                    path: location.to_string(),
                })
            }
        }
    }

    fn resolve_or_report(&self, kind: &'static str, path: &str) -> Result<ResolvedRoute, NotFound> {
        self.table.resolve(path).inspect_err(|_| {
            tracing::warn!(kind, path = %path, "No route matched");
            metrics::record_not_found();
            metrics::record_navigation(kind, "not_found");
        })
    }

    fn mount(&mut self, kind: &'static str, route: ResolvedRoute) {
        let href = self.base.href(route.path());
        if self.mounted.mount(route.clone()) {
            tracing::info!(
                kind,
                route = %route.name(),
                view = %route.view().name(),
                href = %href,
                "Navigated"
            );
            metrics::record_navigation(kind, "mounted");
        } else {
            metrics::record_navigation(kind, "unchanged");
        }
    }

    fn route_named(&self, name: &str) -> Result<ResolvedRoute, NavigationError> {
        self.table
            .by_name(name)
            .ok_or_else(|| NavigationError::UnknownRoute {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::build_router;
    use crate::routing::RouteDescriptor;
    use crate::view::{PageView, View};

    fn navigator(base: &str) -> Navigator {
        let routes = [("/", "home"), ("/articles", "articles"), ("/about", "about")]
            .into_iter()
            .map(|(path, name)| {
                let view: Arc<dyn View> = Arc::new(PageView::new(name));
                RouteDescriptor::new(path, name, view)
            })
            .collect();
        build_router(base, routes).unwrap()
    }

    #[test]
    fn test_push_updates_history_and_mount() {
        let mut nav = navigator("");
        nav.start().unwrap();

        let route = nav.push("/articles").unwrap();
        assert_eq!(route.name(), "articles");
        assert_eq!(nav.location(), "/articles");
        assert_eq!(nav.history().len(), 2);
        assert_eq!(nav.current().map(|r| r.name()), Some("articles"));
    }

    #[test]
    fn test_push_normalizes() {
        let mut nav = navigator("");
        let route = nav.push("about/?ref=nav").unwrap();
        assert_eq!(route.path(), "/about");
        assert_eq!(nav.location(), "/about");
    }

    #[test]
    fn test_push_not_found_changes_nothing() {
        let mut nav = navigator("");
        nav.start().unwrap();

        let err = nav.push("/unregistered").unwrap_err();
        assert_eq!(
            err,
            NavigationError::NotFound(NotFound {
                path: "/unregistered".into()
            })
        );
        assert_eq!(nav.location(), "/");
        assert_eq!(nav.history().len(), 1);
        assert_eq!(nav.current().map(|r| r.name()), Some("home"));
    }

    #[test]
    fn test_push_same_location_is_noop() {
        let mut nav = navigator("");
        nav.push("/about").unwrap();
        nav.push("/about").unwrap();
        assert_eq!(nav.history().len(), 2);
    }

    #[test]
    fn test_push_current_location_before_start_mounts_without_entry() {
        let mut nav = navigator("");
        assert!(nav.current().is_none());

        assert_eq!(nav.push("/").unwrap().name(), "home");
        assert_eq!(nav.history().len(), 1);
        assert_eq!(nav.current().map(|r| r.name()), Some("home"));
        assert_eq!(
            nav.back().unwrap_err(),
            NavigationError::NoHistoryEntry { delta: -1 }
        );
    }

    #[test]
    fn test_replace() {
        let mut nav = navigator("");
        nav.start().unwrap();
        nav.replace("/about").unwrap();
        assert_eq!(nav.history().len(), 1);
        assert_eq!(nav.location(), "/about");
        assert!(nav.back().is_err());
    }

    #[test]
    fn test_named_navigation() {
        let mut nav = navigator("/app");
        assert_eq!(nav.location(), "/app/");
        assert_eq!(nav.push_named("articles").unwrap().path(), "/articles");
        assert_eq!(nav.location(), "/app/articles");
        assert_eq!(nav.href_for("about").unwrap(), "/app/about");
        assert_eq!(nav.href("/"), "/app/");

        let err = nav.push_named("missing").unwrap_err();
        assert_eq!(
            err,
            NavigationError::UnknownRoute {
                name: "missing".into()
            }
        );
    }

    #[test]
    fn test_back_and_forward() {
        let mut nav = navigator("");
        nav.start().unwrap();
        nav.push("/articles").unwrap();
        nav.push("/about").unwrap();

        assert_eq!(nav.back().unwrap().name(), "articles");
        assert_eq!(nav.back().unwrap().name(), "home");
        assert_eq!(
            nav.back().unwrap_err(),
            NavigationError::NoHistoryEntry { delta: -1 }
        );
        assert_eq!(nav.current().map(|r| r.name()), Some("home"));
        assert_eq!(nav.go(2).unwrap().name(), "about");
    }

    #[test]
    fn test_back_into_unknown_location_keeps_view() {
        let mut nav = navigator("").with_history(MemoryHistory::starting_at("/gone"));
        assert!(matches!(nav.start(), Err(NavigationError::NotFound(_))));
        assert!(nav.current().is_none());

        nav.push("/about").unwrap();
        assert!(matches!(nav.back(), Err(NavigationError::NotFound(_))));
        assert_eq!(nav.location(), "/gone");
        assert_eq!(nav.current().map(|r| r.name()), Some("about"));
    }

    #[test]
    fn test_history_entries_carry_base() {
        let mut nav = navigator("/app/").with_history(MemoryHistory::starting_at("/app/about"));
        assert_eq!(nav.start().unwrap().name(), "about");

        nav.push("/articles").unwrap();
        assert_eq!(nav.location(), "/app/articles");
        assert_eq!(nav.back().unwrap().name(), "about");
        assert_eq!(nav.location(), "/app/about");
    }

    #[test]
    fn test_start_outside_base_is_not_found() {
        let mut nav = navigator("/app").with_history(MemoryHistory::starting_at("/about"));
        assert_eq!(
            nav.start().unwrap_err(),
            NavigationError::NotFound(NotFound {
                path: "/about".into()
            })
        );
        assert!(nav.current().is_none());
    }

    #[test]
    fn test_resolve_location_strips_base() {
        let nav = navigator("/app");
        assert_eq!(nav.resolve_location("/app/about").unwrap().name(), "about");
        assert_eq!(nav.resolve_location("/app").unwrap().name(), "home");
        assert!(nav.resolve_location("/about").is_err());
    }
}
