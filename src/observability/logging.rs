//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem once, from the binary
//! - Respect RUST_LOG, falling back to the configured level
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Library code only emits events; subscribers are the binary's concern

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber. `fallback_level` applies when RUST_LOG
/// is unset (e.g., the manifest's observability.log_level).
pub fn init_logging(fallback_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("seorion={fallback_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
