//! Request identification.
//!
//! # Responsibilities
//! - Stamp every inbound request with a unique ID as early as possible
//!   so log lines across the routing and dispatch path correlate
//!
//! # Design Decisions
//! - UUID v4 in the `x-request-id` header
//! - An ID already supplied by the caller is kept, not overwritten

use axum::http::Request;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Generates a fresh UUID v4 for requests that arrive without an ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}
