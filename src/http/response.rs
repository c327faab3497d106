//! Outcome-to-response mapping.
//!
//! # Responsibilities
//! - Turn every routing/dispatch outcome into a well-formed HTTP response
//! - Keep the error taxonomy → status code mapping in one place
//!
//! # Design Decisions
//! - Relayed and liveness responses carry `application/json`; error
//!   responses carry a plain diagnostic line (the gateway serves an
//!   internal network, so error text names keys and transport failures
//!   for the operator)
//! - The relayed body is a descriptor of where the call went, not the
//!   upstream's body

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::upstream::{DispatchError, DispatchOutcome};

/// Liveness payload. Field order is part of the observable contract.
#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
    service: &'static str,
}

/// Descriptor returned for every successfully dispatched request.
#[derive(Debug, Serialize)]
struct ProxiedBody<'a> {
    proxied_to: &'a str,
}

fn json(status: StatusCode, body: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// `GET /health` — always succeeds while the process is alive.
pub fn health() -> Response {
    let body = HealthBody {
        status: "ok",
        service: "gateway",
    };
    json(StatusCode::OK, serde_json::to_string(&body).unwrap_or_default())
}

/// Successful dispatch: the upstream's status, a descriptor body.
pub fn proxied(outcome: &DispatchOutcome) -> Response {
    let body = ProxiedBody {
        proxied_to: &outcome.target,
    };
    json(
        outcome.status,
        serde_json::to_string(&body).unwrap_or_default(),
    )
}

/// No route serves the requested path.
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "no matching route").into_response()
}

/// The path is served, but not with the requested method.
pub fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, "method not allowed").into_response()
}

/// Dispatch failures: 503 for an unconfigured upstream, 502 for a
/// transport-level failure.
pub fn dispatch_error(error: &DispatchError) -> Response {
    let status = match error {
        DispatchError::Unconfigured { .. } => StatusCode::SERVICE_UNAVAILABLE,
        DispatchError::Unreachable { .. } => StatusCode::BAD_GATEWAY,
    };
    (status, error.to_string()).into_response()
}
