//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Deployment prefix the application is served under.
    ///
    /// Overridden by the `BASE_URL` environment variable.
    pub base_href: String,

    /// Route definitions, in match order.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_href: "/".to_string(),
            routes: site_routes(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// One route as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// URL path, e.g. "/articles".
    pub path: String,

    /// Symbolic route name.
    pub name: String,

    /// Identifier of the view registered in the `ViewRegistry`.
    pub view: String,
}

impl RouteConfig {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view: view.into(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Record navigation metrics.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
        }
    }
}

/// The site's page routes.
pub fn site_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("/", "home", "HomeView"),
        RouteConfig::new("/articles", "articles", "ArticlesView"),
        RouteConfig::new("/dashboards", "dashboards", "DataDashboardsView"),
        RouteConfig::new("/north_korea", "north_korea", "NorthKoreaIndexView"),
        RouteConfig::new(
            "/developer_documentation",
            "developer_documentation",
            "DeveloperDocumentationView",
        ),
        RouteConfig::new("/about", "about", "AboutView"),
    ]
}
