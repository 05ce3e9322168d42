//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or built-in site table
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (BASE_URL override, read once)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → lifecycle::startup builds the Navigator from it
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the route table never changes at runtime
//! - All fields have defaults; an empty file yields the site table at `/`
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ObservabilityConfig;
pub use schema::RouteConfig;
pub use schema::RouterConfig;
