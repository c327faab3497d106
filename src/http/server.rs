//! HTTP server setup and the gateway handler.
//!
//! # Responsibilities
//! - Create the axum Router with the catch-all gateway handler
//! - Wire up middleware (request ID, tracing, inbound timeout)
//! - Bind server to listener and serve until shutdown
//! - Resolve routes and hand Forward matches to the Dispatcher
//!
//! # Design Decisions
//! - One catch-all handler; method/path discrimination belongs to the
//!   route table, not to axum's own routing, so 404 vs 405 stays under
//!   the gateway's control
//! - Every per-request failure terminates in a response; nothing on the
//!   request path panics or escapes the handler

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::SetRequestIdLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::config::{ConfigResolver, GatewayConfig};
use crate::http::request::UuidRequestId;
use crate::http::response;
use crate::observability::metrics;
use crate::routing::{RouteAction, RouteMatch, RouteTable};
use crate::upstream::Dispatcher;

/// Application state injected into the gateway handler.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub resolver: Arc<dyn ConfigResolver>,
    pub dispatcher: Dispatcher,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Assemble the server from its collaborators. The route table is
    /// taken already built so construction-time overlap errors surface
    /// before a listener is ever bound.
    pub fn new(
        config: GatewayConfig,
        table: RouteTable,
        resolver: Arc<dyn ConfigResolver>,
    ) -> Self {
        let state = AppState {
            table: Arc::new(table),
            resolver,
            dispatcher: Dispatcher::new(Duration::from_secs(config.timeouts.upstream_secs)),
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(gateway_handler))
            .route("/", any(gateway_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Catch-all handler: resolve the route, act on it, relay the outcome.
async fn gateway_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let method = request.method().clone();
    let path = request.uri().path().to_string();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Routing request"
    );

    let (route_name, response) = match state.table.resolve(&method, &path) {
        RouteMatch::NoMatch => {
            tracing::warn!(request_id = %request_id, path = %path, "No route matched");
            ("none", response::not_found())
        }
        RouteMatch::MethodNotAllowed => {
            tracing::warn!(
                request_id = %request_id,
                method = %method,
                path = %path,
                "Method not allowed for route"
            );
            ("none", response::method_not_allowed())
        }
        RouteMatch::Matched(route) => {
            let response = match &route.action {
                RouteAction::Health => response::health(),
                RouteAction::Forward {
                    upstream_key,
                    upstream_path,
                } => {
                    match state
                        .dispatcher
                        .dispatch(state.resolver.as_ref(), *upstream_key, upstream_path)
                        .await
                    {
                        Ok(outcome) => {
                            tracing::debug!(
                                request_id = %request_id,
                                target = %outcome.target,
                                status = %outcome.status,
                                "Upstream answered"
                            );
                            response::proxied(&outcome)
                        }
                        Err(e) => {
                            tracing::warn!(
                                request_id = %request_id,
                                route = route.name,
                                error = %e,
                                "Dispatch failed"
                            );
                            response::dispatch_error(&e)
                        }
                    }
                }
            };
            (route.name, response)
        }
    };

    metrics::record_request(method.as_str(), response.status().as_u16(), route_name, start);
    response
}
