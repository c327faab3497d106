//! Single-shot upstream dispatch.
//!
//! # Responsibilities
//! - Resolve the upstream base address for a route's key
//! - Issue exactly one outbound request and capture its status
//! - Classify failures for the HTTP layer (unconfigured vs unreachable)
//!
//! # Design Decisions
//! - Wire contract: every dispatch goes out as a GET with an empty body,
//!   even when the inbound request was a POST. The inbound method only
//!   gates route matching.
//! - The upstream response body is dropped; only the status is relayed.
//!   Dropping the response returns the connection to the client pool on
//!   every exit path.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, Uri};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use thiserror::Error;

use crate::config::ConfigResolver;

/// Dispatch failure classes. Each maps to one terminal HTTP status at the
/// gateway boundary.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The route's upstream key has no configured address. No outbound
    /// call was attempted. Operator-fixable; relayed as 503.
    #[error("{key} not configured")]
    Unconfigured { key: &'static str },

    /// The outbound call failed at the transport layer (refused, DNS,
    /// reset, timeout) or the target did not form a valid URI. Possibly
    /// transient; relayed as 502, never retried here.
    #[error("upstream error: {detail}")]
    Unreachable { target: String, detail: String },
}

/// Result of a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Full address the call was sent to (`<base><upstream path>`).
    pub target: String,

    /// Status code the upstream answered with, relayed verbatim.
    pub status: StatusCode,
}

/// Performs the single outbound call for a matched Forward route.
///
/// Stateless apart from the pooled HTTP client; invocations share nothing
/// and may run concurrently without coordination.
#[derive(Clone)]
pub struct Dispatcher {
    client: Client<HttpConnector, Body>,
    timeout: Duration,
}

impl Dispatcher {
    /// Create a dispatcher with the given upstream timeout.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self { client, timeout }
    }

    /// Resolve the upstream and perform the call.
    pub async fn dispatch(
        &self,
        resolver: &dyn ConfigResolver,
        upstream_key: &'static str,
        upstream_path: &str,
    ) -> Result<DispatchOutcome, DispatchError> {
        let base = resolver
            .resolve(upstream_key)
            .ok_or(DispatchError::Unconfigured { key: upstream_key })?;

        let target = format!("{}{}", base, upstream_path);
        let uri: Uri = target.parse().map_err(|e| DispatchError::Unreachable {
            target: target.clone(),
            detail: format!("invalid upstream address: {}", e),
        })?;

        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .map_err(|e| DispatchError::Unreachable {
                target: target.clone(),
                detail: e.to_string(),
            })?;

        let response = match tokio::time::timeout(self.timeout, self.client.request(request)).await
        {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                return Err(DispatchError::Unreachable {
                    target,
                    detail: e.to_string(),
                })
            }
            Err(_) => {
                return Err(DispatchError::Unreachable {
                    target,
                    detail: format!("timed out after {}s", self.timeout.as_secs()),
                })
            }
        };

        Ok(DispatchOutcome {
            target,
            status: response.status(),
        })
    }
}
