//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::error::ConfigurationError;

/// Environment variable holding the deployment base href.
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("Route table rejected: {0}")]
    Build(#[from] ConfigurationError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a configuration from TOML text without validating it.
pub fn parse_config(content: &str) -> Result<RouterConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Read and parse a TOML file without validating it, so that overrides can
/// be applied first.
pub fn read_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;

    tracing::debug!(path = %path.display(), routes = config.routes.len(), "Configuration file loaded");
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply `BASE_URL` from the process environment, if set.
pub fn apply_env(config: &mut RouterConfig) {
    apply_base_override(config, std::env::var(BASE_URL_ENV).ok());
}

/// Replace the base href when an override is present.
pub fn apply_base_override(config: &mut RouterConfig, base_href: Option<String>) {
    if let Some(base_href) = base_href {
        tracing::debug!(base_href = %base_href, "Base href overridden");
        config.base_href = base_href;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("base_href = \"/blog/\"").unwrap();
        assert_eq!(config.base_href, "/blog/");
        assert_eq!(config.routes.len(), 6);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_parse_routes() {
        let config = parse_config(
            r#"
            [[routes]]
            path = "/"
            name = "home"
            view = "HomeView"

            [[routes]]
            path = "/contact"
            name = "contact"
            view = "ContactView"

            [observability]
            log_level = "debug"
            metrics_enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.base_href, "/");
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[1].view, "ContactView");
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("routes = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_config_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [[routes]]
            path = "/a"
            name = "dup"
            view = "A"

            [[routes]]
            path = "/b"
            name = "dup"
            view = "B"
            "#
        )
        .unwrap();

        let err = load_config(file.path()).unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_config_skips_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_href = \"http://\"").unwrap();

        let config = read_config(file.path()).unwrap();
        assert_eq!(config.base_href, "http://");
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("/nonexistent/router.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_base_override() {
        let mut config = RouterConfig::default();
        apply_base_override(&mut config, None);
        assert_eq!(config.base_href, "/");

        apply_base_override(&mut config, Some("/site/".into()));
        assert_eq!(config.base_href, "/site/");
    }
}
