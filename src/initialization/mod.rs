//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - Logger
//! - DNS resolver
//! - TLS client configuration

mod logger;
mod resolver;
mod tls;

// Re-export public API
pub use logger::{init_logger_with, level_for};
pub use resolver::init_resolver;
pub use tls::init_tls_config;
