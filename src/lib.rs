//! Store Gateway Library
//!
//! A single HTTP entry point for the store's backend services. Inbound
//! requests are matched against a static route table and forwarded to the
//! configured upstream (catalog, orders, search); the upstream's status is
//! relayed back to the caller along with a descriptor of where the call
//! went.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod store;
pub mod upstream;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
