//! End-to-end tests for routing, dispatch, and failure relay.

mod common;

use std::sync::Arc;

use axum::http::Method;
use reqwest::StatusCode;
use store_gateway::config::StaticResolver;
use store_gateway::routing::{PathPattern, Route, RouteAction, RouteTable, RouteTableError};
use store_gateway::{GatewayConfig, HttpServer, Shutdown};

/// Spawn a gateway on an ephemeral port with the default route table and
/// the given resolver. Returns the base URL and the shutdown handle
/// keeping the server alive.
async fn spawn_gateway(resolver: StaticResolver) -> (String, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let table = RouteTable::gateway_defaults().unwrap();
    let server = HttpServer::new(GatewayConfig::default(), table, Arc::new(resolver));

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (format!("http://{}", addr), shutdown)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[test]
fn overlapping_routes_are_rejected_before_startup() {
    let result = RouteTable::builder()
        .route(Route {
            name: "catalog",
            methods: vec![Method::GET],
            pattern: PathPattern::exact("/api/catalog"),
            action: RouteAction::Forward {
                upstream_key: "CATALOG_URL",
                upstream_path: "/products",
            },
        })
        .unwrap()
        .route(Route {
            name: "catalog-duplicate",
            methods: vec![Method::GET],
            pattern: PathPattern::exact("/api/catalog"),
            action: RouteAction::Forward {
                upstream_key: "CATALOG_URL",
                upstream_path: "/items",
            },
        });

    assert!(matches!(result, Err(RouteTableError::Overlap { .. })));
}

#[tokio::test]
async fn health_answers_regardless_of_configuration() {
    let (base, _shutdown) = spawn_gateway(StaticResolver::new()).await;

    let res = client()
        .get(format!("{}/health", base))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    assert_eq!(res.text().await.unwrap(), r#"{"status":"ok","service":"gateway"}"#);
}

#[tokio::test]
async fn unconfigured_upstream_is_503_with_zero_outbound_calls() {
    let upstream = common::MockUpstream::start(200, "{}").await;
    // Resolver deliberately lacks CATALOG_URL even though a live upstream
    // exists; the gateway must fail fast without dialing it.
    let (base, _shutdown) = spawn_gateway(StaticResolver::new()).await;

    let res = client()
        .get(format!("{}/api/catalog", base))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(res.text().await.unwrap().contains("CATALOG_URL"));
    assert_eq!(upstream.call_count(), 0);
}

#[tokio::test]
async fn upstream_status_is_relayed_with_descriptor_body() {
    let upstream = common::MockUpstream::start(201, r#"{"created":true}"#).await;
    let resolver = StaticResolver::new().with("CATALOG_URL", upstream.base_url());
    let (base, _shutdown) = spawn_gateway(resolver).await;

    let res = client()
        .get(format!("{}/api/catalog", base))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(
        res.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    // The upstream's own body is not relayed, only the descriptor.
    assert_eq!(
        res.text().await.unwrap(),
        format!(r#"{{"proxied_to":"{}/products"}}"#, upstream.base_url())
    );
    assert_eq!(upstream.call_count(), 1);
}

#[tokio::test]
async fn unreachable_upstream_is_502_with_diagnostic() {
    // Nothing listens on port 1.
    let resolver = StaticResolver::new().with("CATALOG_URL", "http://127.0.0.1:1");
    let (base, _shutdown) = spawn_gateway(resolver).await;

    let res = client()
        .get(format!("{}/api/catalog", base))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    assert!(res.text().await.unwrap().contains("upstream error"));
}

#[tokio::test]
async fn unknown_path_is_404_and_wrong_method_is_405() {
    let (base, _shutdown) = spawn_gateway(StaticResolver::new()).await;
    let client = client();

    let res = client
        .get(format!("{}/api/unknown", base))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .delete(format!("{}/api/orders", base))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn repeated_dispatch_is_idempotent() {
    let upstream = common::MockUpstream::start(201, "{}").await;
    let resolver = StaticResolver::new().with("CATALOG_URL", upstream.base_url());
    let (base, _shutdown) = spawn_gateway(resolver).await;
    let client = client();

    let expected_body = format!(r#"{{"proxied_to":"{}/products"}}"#, upstream.base_url());
    for _ in 0..5 {
        let res = client
            .get(format!("{}/api/catalog", base))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        assert_eq!(res.text().await.unwrap(), expected_body);
    }
    assert_eq!(upstream.call_count(), 5);
}

#[tokio::test]
async fn inbound_post_still_dispatches_get_upstream() {
    let upstream = common::MockUpstream::start(200, "{}").await;
    let resolver = StaticResolver::new().with("ORDERS_URL", upstream.base_url());
    let (base, _shutdown) = spawn_gateway(resolver).await;

    let res = client()
        .post(format!("{}/api/orders", base))
        .body(r#"{"sku":"x"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    // Current wire contract: the outbound call is a GET regardless of the
    // inbound method.
    let lines = upstream.request_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("GET /orders"), "got {:?}", lines);
}
