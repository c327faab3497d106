//! Store Gateway
//!
//! Single entry point for the store's backend services (catalog, orders,
//! search). Matches inbound requests against a static route table,
//! forwards each to its configured upstream, and relays the upstream's
//! status back to the caller.
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server (axum, middleware)
//!                         │
//!                         ▼
//!                     routing::RouteTable ── NoMatch/MethodNotAllowed ──▶ 404/405
//!                         │
//!                         ▼
//!                     upstream::Dispatcher ── Unconfigured ──▶ 503
//!                         │                └─ Unreachable ──▶ 502
//!                         ▼
//!                     single GET to <upstream><path>
//!                         │
//!     Client Response ◀───┘ upstream status + {"proxied_to": ...}
//! ```

use std::sync::Arc;

use tokio::net::TcpListener;

use store_gateway::config::EnvResolver;
use store_gateway::routing::RouteTable;
use store_gateway::store::Store;
use store_gateway::{observability, GatewayConfig, HttpServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::logging::init();

    tracing::info!("store-gateway v{} starting", env!("CARGO_PKG_VERSION"));

    let config = GatewayConfig::from_env();
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_timeout_secs = config.timeouts.upstream_secs,
        "Configuration loaded"
    );

    // The store is liveness reporting only; no request path touches it.
    let store = Store::connect_lazy(&config.database_url)?;
    match store.ping().await {
        Ok(()) => tracing::info!("Database reachable"),
        Err(e) => tracing::warn!(error = %e, "Database not reachable"),
    }

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => observability::metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                error = %e,
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // Overlapping routes are a configuration bug; refuse to start.
    let table = RouteTable::gateway_defaults()?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    shutdown.listen_for_ctrl_c();

    let server = HttpServer::new(config, table, Arc::new(EnvResolver));
    server.run(listener, shutdown.subscribe()).await?;

    store.close().await;
    tracing::info!("Shutdown complete");
    Ok(())
}
