//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Navigator and startup produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (navigation counters, route gauge)
//!
//! Consumers:
//!     → Log output (stderr, filtered by RUST_LOG)
//!     → Whatever metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Structured fields (route, path, outcome) on every navigation event
//! - Metrics go through the `metrics` facade; no exporter is installed here
//! - Metrics recording can be switched off from configuration

pub mod logging;
pub mod metrics;
