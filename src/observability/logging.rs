//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem before any fallible work
//! - Respect RUST_LOG, with a crate-scoped default otherwise
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Log output is the only user-visible surface of a failed bootstrap

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Call once, first thing in main.
pub fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
