//! History-mode route table for a client-side site.
//!
//! Maps URL paths to page views, resolves navigation requests against the
//! table and keeps history and the mounted view in step.

pub mod config;
pub mod error;
pub mod history;
pub mod lifecycle;
pub mod navigator;
pub mod observability;
pub mod routing;
pub mod view;

pub use config::RouterConfig;
pub use error::{ConfigurationError, NavigationError, NotFound};
pub use navigator::{build_router, Navigator};
pub use routing::{ResolvedRoute, RouteDescriptor, RouteTable};
pub use view::{View, ViewRegistry};
