//! Navigation metrics.
//!
//! # Metrics
//! - `router_navigations_total` (counter): navigations by kind and outcome
//! - `router_not_found_total` (counter): resolutions that matched nothing
//! - `router_routes` (gauge): number of routes in the active table

use std::sync::atomic::{AtomicBool, Ordering};

static ENABLED: AtomicBool = AtomicBool::new(true);

/// Turn recording on or off for the whole process.
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Record one navigation attempt.
///
/// `kind` is the operation (`push`, `replace`, `go`, `start`) and `outcome`
/// is `mounted`, `unchanged` or an error label.
pub fn record_navigation(kind: &'static str, outcome: &'static str) {
    if !is_enabled() {
        return;
    }
    ::metrics::counter!("router_navigations_total", "kind" => kind, "outcome" => outcome)
        .increment(1);
}

/// Record a resolution that matched no route.
pub fn record_not_found() {
    if !is_enabled() {
        return;
    }
    ::metrics::counter!("router_not_found_total").increment(1);
}

/// Record the size of the active route table.
pub fn record_route_count(count: usize) {
    if !is_enabled() {
        return;
    }
    ::metrics::gauge!("router_routes").set(count as f64);
}
