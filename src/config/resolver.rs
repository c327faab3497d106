//! Upstream address resolution.
//!
//! # Responsibilities
//! - Map an upstream key (`CATALOG_URL`, `ORDERS_URL`, `SEARCH_URL`) to a
//!   base address, or report that none is configured
//! - Isolate the process environment behind a trait so handlers and tests
//!   never touch `std::env` directly
//!
//! # Design Decisions
//! - Resolution happens per dispatch, not at startup: an upstream left
//!   unconfigured disables only its own route
//! - Empty values count as unconfigured

use std::collections::HashMap;

/// Pure lookup from upstream key to base address.
pub trait ConfigResolver: Send + Sync {
    /// Returns the configured base address for `key`, if any.
    fn resolve(&self, key: &str) -> Option<String>;
}

/// Resolver backed by the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvResolver;

impl ConfigResolver for EnvResolver {
    fn resolve(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }
}

/// Resolver backed by a fixed map. Used by tests to keep resolution
/// deterministic regardless of the environment the suite runs under.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    entries: HashMap<String, String>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key/address pair, builder style.
    pub fn with(mut self, key: impl Into<String>, address: impl Into<String>) -> Self {
        self.entries.insert(key.into(), address.into());
        self
    }
}

impl ConfigResolver for StaticResolver {
    fn resolve(&self, key: &str) -> Option<String> {
        self.entries.get(key).filter(|v| !v.is_empty()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_resolver_returns_configured_address() {
        let resolver = StaticResolver::new().with("CATALOG_URL", "http://catalog:3001");
        assert_eq!(
            resolver.resolve("CATALOG_URL").as_deref(),
            Some("http://catalog:3001")
        );
        assert_eq!(resolver.resolve("ORDERS_URL"), None);
    }

    #[test]
    fn empty_value_counts_as_unconfigured() {
        let resolver = StaticResolver::new().with("SEARCH_URL", "");
        assert_eq!(resolver.resolve("SEARCH_URL"), None);
    }
}
