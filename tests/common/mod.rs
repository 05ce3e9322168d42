//! Shared utilities for integration tests.

use std::sync::{Arc, Mutex};

use view_router::config::RouterConfig;
use view_router::lifecycle::navigator_from_config;
use view_router::view::registry::SITE_VIEWS;
use view_router::{Navigator, View, ViewRegistry};

/// Ordered log of mount/unmount calls across all recording views.
pub type EventLog = Arc<Mutex<Vec<String>>>;

/// A view that records every mount and unmount.
#[derive(Debug)]
pub struct RecordingView {
    name: String,
    log: EventLog,
}

impl RecordingView {
    pub fn new(name: &str, log: EventLog) -> Self {
        Self {
            name: name.to_string(),
            log,
        }
    }
}

impl View for RecordingView {
    fn name(&self) -> &str {
        &self.name
    }

    fn mount(&self) {
        self.log.lock().unwrap().push(format!("mount {}", self.name));
    }

    fn unmount(&self) {
        self.log.lock().unwrap().push(format!("unmount {}", self.name));
    }
}

/// Registry with a recording view for every site page.
pub fn recording_site_views() -> (ViewRegistry, EventLog) {
    let log: EventLog = Arc::new(Mutex::new(Vec::new()));
    let mut registry = ViewRegistry::new();
    for name in SITE_VIEWS {
        registry.register(name, Arc::new(RecordingView::new(name, log.clone())));
    }
    (registry, log)
}

/// Navigator over the site table with recording views.
#[allow(dead_code)]
pub fn site_navigator(base_href: &str) -> (Navigator, EventLog) {
    let (views, log) = recording_site_views();
    let config = RouterConfig {
        base_href: base_href.to_string(),
        ..Default::default()
    };
    let navigator = navigator_from_config(&config, &views).unwrap();
    (navigator, log)
}

/// Drain the event log.
#[allow(dead_code)]
pub fn take_events(log: &EventLog) -> Vec<String> {
    std::mem::take(&mut *log.lock().unwrap())
}
