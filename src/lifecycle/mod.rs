//! Process lifecycle.
//!
//! # Responsibilities
//! - Coordinate graceful shutdown across the server and any background
//!   tasks

pub mod shutdown;

pub use shutdown::Shutdown;
