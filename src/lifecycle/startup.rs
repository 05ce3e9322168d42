//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration (file or built-in site table)
//! - Apply the environment base href, then an explicit override
//! - Validate, resolve view identifiers and build the Navigator
//!
//! # Design Decisions
//! - View identifiers are resolved here, before any navigation happens
//! - Explicit overrides win over `BASE_URL`, which wins over the file
//! - Validation runs once, on the configuration with overrides applied

use std::path::Path;

use crate::config::loader::{self, ConfigError};
use crate::config::validation::validate_config;
use crate::config::RouterConfig;
use crate::error::ConfigurationError;
use crate::navigator::{build_router, Navigator};
use crate::observability::metrics;
use crate::routing::RouteDescriptor;
use crate::view::ViewRegistry;

/// Everything a host needs after startup.
#[derive(Debug)]
pub struct Startup {
    pub config: RouterConfig,
    pub navigator: Navigator,
}

/// Load configuration and build a Navigator over `views`.
pub fn startup(
    config_path: Option<&Path>,
    base_override: Option<&str>,
    views: &ViewRegistry,
) -> Result<Startup, ConfigError> {
    let mut config = match config_path {
        Some(path) => loader::read_config(path)?,
        None => RouterConfig::default(),
    };

    loader::apply_env(&mut config);
    loader::apply_base_override(&mut config, base_override.map(str::to_string));
    validate_config(&config).map_err(ConfigError::Validation)?;

    metrics::set_enabled(config.observability.metrics_enabled);

    let navigator = navigator_from_config(&config, views)?;
    Ok(Startup { config, navigator })
}

/// Build a Navigator from an already validated configuration.
pub fn navigator_from_config(
    config: &RouterConfig,
    views: &ViewRegistry,
) -> Result<Navigator, ConfigurationError> {
    let descriptors = config
        .routes
        .iter()
        .map(|route| {
            let view = views
                .get(&route.view)
                .ok_or_else(|| ConfigurationError::UnknownView {
                    route: route.name.clone(),
                    view: route.view.clone(),
                })?;
            Ok(RouteDescriptor::new(&route.path, &route.name, view))
        })
        .collect::<Result<Vec<_>, ConfigurationError>>()?;

    build_router(&config.base_href, descriptors)
}
