//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → table.rs (route lookup)
//!     → matcher.rs (evaluate path pattern)
//!     → Return: Matched route, MethodNotAllowed, or NoMatch
//!
//! Table Construction (at startup):
//!     Route definitions
//!     → Overlap check per method (duplicate = construction error)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Table built once at startup, immutable at runtime
//! - Overlaps rejected at construction; no runtime tie-break exists
//! - "Path known, method wrong" is distinguished from "path unknown" so
//!   the HTTP layer can answer 405 vs 404 correctly

pub mod matcher;
pub mod table;

pub use matcher::PathPattern;
pub use table::{Route, RouteAction, RouteMatch, RouteTable, RouteTableError};
