//! Route matching logic.
//!
//! # Responsibilities
//! - Match the request path against a route's pattern
//! - Keep the match shape open for richer patterns later
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Only exact patterns exist today; prefix or parameterized segments
//!   would be added as new variants without changing the resolve contract
//! - No regex to guarantee O(n) matching

/// Pattern a route's path is matched against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathPattern {
    /// Matches the request path byte-for-byte.
    Exact(String),
}

impl PathPattern {
    /// Create an exact-match pattern.
    pub fn exact(path: impl Into<String>) -> Self {
        Self::Exact(path.into())
    }

    /// Returns true if the request path matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(expected) => path == expected,
        }
    }

    /// Returns true if two patterns could both match some path. Used by
    /// the table builder to reject ambiguous registrations.
    pub fn overlaps(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Exact(a), Self::Exact(b)) => a == b,
        }
    }
}

impl std::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(path) => write!(f, "{}", path),
        }
    }
}
