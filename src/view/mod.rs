//! Renderable view units.
//!
//! # Responsibilities
//! - Define the capability the router needs from a page (`mount` / `unmount`)
//! - Resolve view identifiers from configuration to view instances
//!
//! # Design Decisions
//! - Views are opaque: the router never inspects what a view renders
//! - Identifiers are resolved once, when the route table is built
//! - Views are shared through `Arc` so the mounted route can be cloned cheaply

pub mod registry;

pub use registry::ViewRegistry;

use std::fmt;

/// A page-level unit the rendering layer can mount and unmount.
pub trait View: Send + Sync + fmt::Debug {
    /// Identifier used in logs and configuration.
    fn name(&self) -> &str;

    /// Attach the view to the page.
    fn mount(&self);

    /// Detach the view from the page.
    fn unmount(&self);
}

/// A named view with no rendering of its own.
///
/// Used for headless hosts and the CLI; mount and unmount are only logged.
#[derive(Debug, Clone)]
pub struct PageView {
    name: String,
}

impl PageView {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl View for PageView {
    fn name(&self) -> &str {
        &self.name
    }

    fn mount(&self) {
        tracing::debug!(view = %self.name, "View mounted");
    }

    fn unmount(&self) {
        tracing::debug!(view = %self.name, "View unmounted");
    }
}
