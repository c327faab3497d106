//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound connection
//!     → server.rs (axum catch-all handler, middleware stack)
//!     → routing::RouteTable (resolve route)
//!     → upstream::Dispatcher (Forward routes only)
//!     → response.rs (outcome → status + body + headers)
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use server::HttpServer;
