//! DNS resolution.
//!
//! This module provides the resolver seam of the checker: the [`Resolve`]
//! trait and its implementation for `trust-dns-resolver`'s
//! `TokioAsyncResolver` (A/AAAA lookups honoring the system configuration).

mod resolution;

// Re-export public API
pub use resolution::Resolve;
