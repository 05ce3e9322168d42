//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → BASE_URL override → Validate → Resolve views → Build Navigator
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Environment is read once, here, and passed down explicitly
//! - No teardown: the Navigator lives as long as the host application

pub mod startup;

pub use startup::{navigator_from_config, startup, Startup};
