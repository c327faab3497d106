//! Observability subsystem.
//!
//! # Responsibilities
//! - Initialize structured logging (tracing)
//! - Expose Prometheus-compatible metrics when configured

pub mod logging;
pub mod metrics;
