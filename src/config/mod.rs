//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, default thresholds, etc.)
//! - CLI option types and parsing
//! - The library `Config`

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, Opt, Thresholds};
