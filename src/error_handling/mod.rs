//! Error handling.
//!
//! Errors are split into:
//! - **Per-domain errors** (`CheckError`): absorbed into a domain's severity
//! - **Fatal errors** (`RunError`, `ConfigError`, `InitializationError`): abort the run

mod types;

// Re-export public API
pub use types::{CheckError, ConfigError, InitializationError, RunError};
