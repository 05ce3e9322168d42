//! Route table builder.

use std::sync::Arc;

use crate::error::ConfigurationError;
use crate::history::Base;
use crate::observability::metrics;
use crate::routing::{RouteDescriptor, RouteTable};

use super::Navigator;

/// Build a Navigator for `descriptors` served under `base_href`.
///
/// An empty `base_href` means root-relative. Fails on an empty table,
/// duplicate names or paths, malformed paths, or an unparsable base.
pub fn build_router(
    base_href: &str,
    descriptors: Vec<RouteDescriptor>,
) -> Result<Navigator, ConfigurationError> {
    let base = Base::parse(base_href)?;
    let table = RouteTable::new(descriptors)?;

    tracing::info!(
        base = %base.href("/"),
        routes = table.len(),
        "Route table built"
    );
    metrics::record_route_count(table.len());

    Ok(Navigator::new(base, Arc::new(table)))
}
