//! View identifier lookup.

use std::collections::HashMap;
use std::sync::Arc;

use super::{PageView, View};

/// Identifiers of the six site pages, in table order.
pub const SITE_VIEWS: [&str; 6] = [
    "HomeView",
    "ArticlesView",
    "DataDashboardsView",
    "NorthKoreaIndexView",
    "DeveloperDocumentationView",
    "AboutView",
];

/// Maps view identifiers to view instances.
#[derive(Debug, Default, Clone)]
pub struct ViewRegistry {
    views: HashMap<String, Arc<dyn View>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding a [`PageView`] for every site page.
    pub fn site() -> Self {
        let mut registry = Self::new();
        for name in SITE_VIEWS {
            registry.register(name, Arc::new(PageView::new(name)));
        }
        registry
    }

    /// Register a view under `id`, replacing any previous registration.
    pub fn register(&mut self, id: impl Into<String>, view: Arc<dyn View>) {
        self.views.insert(id.into(), view);
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn View>> {
        self.views.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
