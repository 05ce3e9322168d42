//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Apply the configured log level unless `RUST_LOG` overrides it
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Logs go to stderr so CLI output on stdout stays machine-readable

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a log level.
pub fn default_directive(level: &str) -> String {
    format!("view_router={}", level)
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
