//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! Process environment
//!     → schema.rs (GatewayConfig::from_env, defaults applied)
//!     → Frozen for the life of the process
//!
//! Upstream addresses are NOT part of the startup snapshot:
//!     resolver.rs (ConfigResolver)
//!     → looked up per dispatch, so an operator can configure an
//!       upstream without restarting the other routes
//! ```
//!
//! # Design Decisions
//! - Environment-driven, no config file (deployment contract of the
//!   gateway's container image)
//! - Upstream resolution is an injectable capability so tests can
//!   substitute deterministic maps for the process environment

pub mod resolver;
pub mod schema;

pub use resolver::{ConfigResolver, EnvResolver, StaticResolver};
pub use schema::GatewayConfig;
