//! Route storage and lookup.
//!
//! # Responsibilities
//! - Store descriptors in insertion order
//! - Reject ambiguous or malformed tables at construction
//! - Look up the route for a path or a name
//!
//! # Design Decisions
//! - Immutable after construction (shared without locks)
//! - O(1) name lookup via HashMap
//! - O(n) ordered path scan (acceptable for page-level route counts)
//! - Explicit NotFound rather than silent default

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{ConfigurationError, NotFound};
use crate::routing::descriptor::{ResolvedRoute, RouteDescriptor};
use crate::routing::matcher::{matches, normalize_path};

/// Ordered, immutable set of routes.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Arc<RouteDescriptor>>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    /// Build a table from descriptors, keeping their order.
    ///
    /// Paths are stored normalized, so `/about/` and `/about` collide.
    pub fn new(descriptors: Vec<RouteDescriptor>) -> Result<Self, ConfigurationError> {
        if descriptors.is_empty() {
            return Err(ConfigurationError::EmptyTable);
        }

        let mut routes = Vec::with_capacity(descriptors.len());
        let mut by_name = HashMap::with_capacity(descriptors.len());
        let mut by_path: HashMap<String, String> = HashMap::with_capacity(descriptors.len());

        for mut descriptor in descriptors {
            if descriptor.name.is_empty() {
                return Err(ConfigurationError::EmptyName {
                    path: descriptor.path,
                });
            }
            if !descriptor.path.starts_with('/') {
                return Err(ConfigurationError::InvalidPath {
                    name: descriptor.name,
                    path: descriptor.path,
                });
            }
            descriptor.path = normalize_path(&descriptor.path);

            if by_name.contains_key(&descriptor.name) {
                return Err(ConfigurationError::DuplicateName {
                    name: descriptor.name,
                });
            }
            if let Some(first) = by_path.get(&descriptor.path) {
                return Err(ConfigurationError::DuplicatePath {
                    path: descriptor.path,
                    first: first.clone(),
                    second: descriptor.name,
                });
            }

            by_path.insert(descriptor.path.clone(), descriptor.name.clone());
            by_name.insert(descriptor.name.clone(), routes.len());
            routes.push(Arc::new(descriptor));
        }

        Ok(Self { routes, by_name })
    }

    /// Resolve a normalized path. The first route in insertion order wins.
    pub fn resolve(&self, path: &str) -> Result<ResolvedRoute, NotFound> {
        self.routes
            .iter()
            .find(|route| matches(&route.path, path))
            .map(|route| ResolvedRoute::new(Arc::clone(route)))
            .ok_or_else(|| NotFound {
                path: path.to_string(),
            })
    }

    /// Look up a route by its symbolic name.
    pub fn by_name(&self, name: &str) -> Option<ResolvedRoute> {
        self.by_name
            .get(name)
            .map(|&index| ResolvedRoute::new(Arc::clone(&self.routes[index])))
    }

    /// Routes in insertion order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter().map(|route| route.as_ref())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
