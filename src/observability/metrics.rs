//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by method, status, route
//! - `gateway_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Route label is the route's configured name ("none" when nothing
//!   matched), never the raw request path, to keep cardinality bounded
//! - Exporter is only installed when an address is configured

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        tracing::error!(error = %e, address = %addr, "Failed to install metrics exporter");
        return;
    }

    describe_counter!(
        "gateway_requests_total",
        "Total requests handled, by method, status, and route"
    );
    describe_histogram!(
        "gateway_request_duration_seconds",
        "End-to-end request latency in seconds"
    );

    tracing::info!(address = %addr, "Metrics exporter listening");
}

/// Record one handled request.
pub fn record_request(method: &str, status: u16, route: &str, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
        ("route", route.to_string()),
    ];
    counter!("gateway_requests_total", &labels).increment(1);
    histogram!("gateway_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}
