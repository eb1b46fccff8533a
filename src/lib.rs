//! cert_status library: concurrent TLS certificate expiry checks
//!
//! For every domain the checker resolves its addresses, completes a verified
//! TLS handshake with each of them on port 443 and classifies the remaining
//! validity of every leaf certificate presented. Each domain ends up with
//! one [`Severity`]; a run ends up with a [`RunSummary`] whose worst status
//! maps onto a monitoring-plugin exit code.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use cert_status::{run_check, Config, LogSink, Thresholds};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     thresholds: Thresholds::from_days(30, 7),
//!     workers: 20,
//!     ..Default::default()
//! };
//! let domains = vec!["example.com".to_string(), "example.org".to_string()];
//!
//! let summary = run_check(&config, domains, Arc::new(LogSink)).await?;
//! println!("critical: {:?}", summary.critical);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod models;
mod run;
pub mod severity;
pub mod tls;

// Re-export public API
pub use config::{Config, LogFormat, Opt, Thresholds};
pub use diagnostics::{DiagnosticEvent, DiagnosticSink, LogSink, NoopSink};
pub use error_handling::{CheckError, ConfigError, InitializationError, RunError};
pub use models::{CertificateChain, CertificateId, CertificateRecord, CheckResult};
pub use run::{
    collect_results, run_check, run_with, spawn_workers, DomainChecker, RunSummary, WorkerPool,
};
pub use severity::Severity;
