//! Run orchestration: fan domains out to the worker pool and fan the results
//! back in.

mod finalize;
mod pool;
mod task;

use std::sync::Arc;

use futures::future::join_all;
use log::info;

use crate::config::Config;
use crate::diagnostics::DiagnosticSink;
use crate::dns::Resolve;
use crate::error_handling::{ConfigError, RunError};
use crate::initialization::{init_resolver, init_tls_config};
use crate::tls::{Connect, TlsProbe};

pub use finalize::{collect_results, RunSummary};
pub use pool::{spawn_workers, WorkerPool};
pub use task::DomainChecker;

/// Checks the certificates of every domain and summarizes the outcome.
///
/// This is the main entry point for the library. It builds the system DNS
/// resolver and a TLS client trusting the `webpki-roots` anchors, then
/// checks the domains with `config.workers` concurrent workers.
///
/// # Arguments
///
/// * `config` - Thresholds, worker count and connection timeouts
/// * `domains` - Domains to check, one result is produced for each
/// * `sink` - Receives per-step diagnostic events
///
/// # Errors
///
/// This function will return an error if:
/// - The configuration is invalid (no workers, zero timeout)
/// - The TLS client cannot be initialized
/// - A worker dies before reporting all of its domains
///
/// Failures of individual domains are never errors; they make the domain
/// `Critical`.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use cert_status::{run_check, Config, NoopSink};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let domains = vec!["example.com".to_string()];
/// let summary = run_check(&Config::default(), domains, Arc::new(NoopSink)).await?;
/// std::process::exit(summary.exit_code());
/// # }
/// ```
pub async fn run_check(
    config: &Config,
    domains: Vec<String>,
    sink: Arc<dyn DiagnosticSink>,
) -> Result<RunSummary, RunError> {
    config.validate()?;

    let tls_config = init_tls_config()?;
    let checker = DomainChecker::new(
        init_resolver(),
        TlsProbe::new(tls_config, config),
        config.thresholds,
        Arc::clone(&sink),
    );

    run_with(Arc::new(checker), domains, config.workers, sink).await
}

/// Runs a check with the given domain checker.
///
/// Lets callers supply their own resolver and connector.
///
/// # Errors
///
/// Returns `RunError::Config` for a worker count of zero,
/// `RunError::WorkerPanicked` if a worker task panicked and
/// `RunError::MissingResults` if results went missing otherwise.
pub async fn run_with<R: Resolve, C: Connect>(
    checker: Arc<DomainChecker<R, C>>,
    domains: Vec<String>,
    workers: usize,
    sink: Arc<dyn DiagnosticSink>,
) -> Result<RunSummary, RunError> {
    if workers == 0 {
        return Err(ConfigError::NoWorkers.into());
    }

    let start_time = std::time::Instant::now();
    let WorkerPool {
        expected,
        mut results,
        handles,
    } = spawn_workers(domains, workers, checker, sink);

    let summary = collect_results(&mut results, expected).await;

    // A panicked worker explains missing results better than the count does
    for joined in join_all(handles).await {
        joined?;
    }
    let summary = summary?;

    info!(
        "Checked {} domain{} with {} worker{} in {:.1}s",
        expected,
        if expected == 1 { "" } else { "s" },
        workers,
        if workers == 1 { "" } else { "s" },
        start_time.elapsed().as_secs_f64()
    );
    Ok(summary)
}
