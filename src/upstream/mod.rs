//! Upstream dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! Matched Forward route (upstream key, upstream path)
//!     → dispatch.rs (resolve base address via ConfigResolver)
//!     → Single outbound GET to <base><path>
//!     → Return: upstream status + target descriptor, or typed failure
//! ```
//!
//! # Design Decisions
//! - One outbound call per inbound request; no retries, no fallback
//! - Unconfigured upstream fails before any I/O is attempted
//! - Outbound call is bounded by a timeout; expiry is reported the same
//!   way as any other transport failure

pub mod dispatch;

pub use dispatch::{DispatchError, DispatchOutcome, Dispatcher};
