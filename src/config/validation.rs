//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Detect conflicting routes (shared names or paths)
//! - Check path and base href forms
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashMap;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::error::ConfigurationError;
use crate::history::Base;
use crate::routing::normalize_path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no routes configured")]
    NoRoutes,

    #[error("route #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("route `{name}` has path `{path}`, which does not start with '/'")]
    InvalidPath { name: String, path: String },

    #[error("route `{name}` has no view")]
    EmptyView { name: String },

    #[error("route name `{name}` is used more than once")]
    DuplicateName { name: String },

    #[error("route path `{path}` is used by both `{first}` and `{second}`")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("invalid base href `{base}`: {reason}")]
    InvalidBase { base: String, reason: String },

    #[error("unknown log level `{0}`")]
    InvalidLogLevel(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = Base::parse(&config.base_href) {
        let reason = match e {
            ConfigurationError::InvalidBase { reason, .. } => reason,
            other => other.to_string(),
        };
        errors.push(ValidationError::InvalidBase {
            base: config.base_href.clone(),
            reason,
        });
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }

    let mut names: HashMap<&str, usize> = HashMap::new();
    let mut paths: HashMap<String, &str> = HashMap::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.name.is_empty() {
            errors.push(ValidationError::EmptyName { index });
        } else {
            let seen = names.entry(route.name.as_str()).or_insert(0);
            *seen += 1;
            if *seen == 2 {
                errors.push(ValidationError::DuplicateName {
                    name: route.name.clone(),
                });
            }
        }

        if route.view.trim().is_empty() {
            errors.push(ValidationError::EmptyView {
                name: route.name.clone(),
            });
        }

        if !route.path.starts_with('/') {
            errors.push(ValidationError::InvalidPath {
                name: route.name.clone(),
                path: route.path.clone(),
            });
            continue;
        }

        let path = normalize_path(&route.path);
        match paths.get(path.as_str()) {
            Some(first) => errors.push(ValidationError::DuplicatePath {
                path,
                first: first.to_string(),
                second: route.name.clone(),
            }),
            None => {
                paths.insert(path, route.name.as_str());
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
