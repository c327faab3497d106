//! Structured logging.
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Level configurable via `RUST_LOG`; defaults keep the gateway's own
//!   spans at info and tower-http request traces at debug

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber. Call once at startup.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "store_gateway=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
