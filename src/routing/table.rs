//! Route table construction and lookup.
//!
//! # Responsibilities
//! - Store the frozen route table
//! - Reject overlapping registrations at construction time
//! - Look up the route for a (method, path) pair

use axum::http::Method;
use thiserror::Error;

use crate::routing::matcher::PathPattern;

/// What the gateway does once a route has matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    /// Answer the fixed liveness payload. No upstream involved.
    Health,

    /// Forward to the upstream whose base address is configured under
    /// `upstream_key`, appending `upstream_path` to it.
    Forward {
        upstream_key: &'static str,
        upstream_path: &'static str,
    },
}

/// A single immutable route.
#[derive(Debug, Clone)]
pub struct Route {
    /// Route identifier for logging/metrics.
    pub name: &'static str,

    /// HTTP verbs this route accepts.
    pub methods: Vec<Method>,

    /// Pattern matched against the request path.
    pub pattern: PathPattern,

    /// Action taken on match.
    pub action: RouteAction,
}

/// Error raised while building a route table.
#[derive(Debug, Error)]
pub enum RouteTableError {
    /// Two routes could both match some (method, path) pair. The table
    /// refuses ambiguity up front rather than tie-breaking at runtime.
    #[error("route {new} overlaps route {existing} on {method} {pattern}")]
    Overlap {
        new: &'static str,
        existing: &'static str,
        method: Method,
        pattern: PathPattern,
    },
}

/// Outcome of a route lookup.
#[derive(Debug)]
pub enum RouteMatch<'a> {
    /// Exactly one route accepts this (method, path) pair.
    Matched(&'a Route),

    /// The path is served, but not with this method.
    MethodNotAllowed,

    /// No route serves this path.
    NoMatch,
}

/// The frozen set of routes. Built once at startup, never mutated.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Start building a table.
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder { routes: Vec::new() }
    }

    /// The gateway's static table: liveness plus one route per backend
    /// service.
    pub fn gateway_defaults() -> Result<Self, RouteTableError> {
        Self::builder()
            .route(Route {
                name: "health",
                methods: vec![Method::GET],
                pattern: PathPattern::exact("/health"),
                action: RouteAction::Health,
            })?
            .route(Route {
                name: "catalog",
                methods: vec![Method::GET],
                pattern: PathPattern::exact("/api/catalog"),
                action: RouteAction::Forward {
                    upstream_key: "CATALOG_URL",
                    upstream_path: "/products",
                },
            })?
            .route(Route {
                name: "orders",
                methods: vec![Method::GET, Method::POST],
                pattern: PathPattern::exact("/api/orders"),
                action: RouteAction::Forward {
                    upstream_key: "ORDERS_URL",
                    upstream_path: "/orders",
                },
            })?
            .route(Route {
                name: "search",
                methods: vec![Method::GET],
                pattern: PathPattern::exact("/api/search"),
                action: RouteAction::Forward {
                    upstream_key: "SEARCH_URL",
                    upstream_path: "/search",
                },
            })?
            .build()
    }

    /// Resolve the route for a (method, path) pair.
    pub fn resolve(&self, method: &Method, path: &str) -> RouteMatch<'_> {
        let mut path_known = false;

        for route in &self.routes {
            if !route.pattern.matches(path) {
                continue;
            }
            if route.methods.contains(method) {
                return RouteMatch::Matched(route);
            }
            path_known = true;
        }

        if path_known {
            RouteMatch::MethodNotAllowed
        } else {
            RouteMatch::NoMatch
        }
    }

    /// Routes in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

/// Builder enforcing the uniqueness invariant.
pub struct RouteTableBuilder {
    routes: Vec<Route>,
}

impl RouteTableBuilder {
    /// Register a route, rejecting any overlap with an already-registered
    /// one on a shared method.
    pub fn route(mut self, route: Route) -> Result<Self, RouteTableError> {
        for existing in &self.routes {
            if !existing.pattern.overlaps(&route.pattern) {
                continue;
            }
            if let Some(method) = route
                .methods
                .iter()
                .find(|m| existing.methods.contains(m))
            {
                return Err(RouteTableError::Overlap {
                    new: route.name,
                    existing: existing.name,
                    method: method.clone(),
                    pattern: route.pattern.clone(),
                });
            }
        }
        self.routes.push(route);
        Ok(self)
    }

    /// Freeze the table.
    pub fn build(self) -> Result<RouteTable, RouteTableError> {
        Ok(RouteTable {
            routes: self.routes,
        })
    }
}
