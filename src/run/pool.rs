//! Fixed-size worker pool.
//!
//! Every domain is queued before the workers start and the queue is closed
//! right after, so each worker drains it and exits. Workers publish exactly
//! one result per domain they take.

use std::sync::Arc;

use log::debug;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::diagnostics::{DiagnosticEvent, DiagnosticSink};
use crate::dns::Resolve;
use crate::models::CheckResult;
use crate::tls::Connect;

use super::task::DomainChecker;

type JobQueue = Arc<Mutex<UnboundedReceiver<String>>>;

/// Running workers and the queue their results arrive on.
pub struct WorkerPool {
    /// Number of domains queued; one result is due for each.
    pub expected: usize,
    /// Result queue, closed once every worker has exited.
    pub results: UnboundedReceiver<CheckResult>,
    /// Worker tasks, joined to surface panics.
    pub handles: Vec<JoinHandle<()>>,
}

/// Queues `domains` and starts `workers` tasks to check them.
///
/// Workers beyond the number of domains find the queue closed and exit
/// immediately. Must be called within a Tokio runtime.
pub fn spawn_workers<R: Resolve, C: Connect>(
    domains: Vec<String>,
    workers: usize,
    checker: Arc<DomainChecker<R, C>>,
    sink: Arc<dyn DiagnosticSink>,
) -> WorkerPool {
    let (job_tx, job_rx) = mpsc::unbounded_channel::<String>();
    let (result_tx, results) = mpsc::unbounded_channel::<CheckResult>();

    let mut expected = 0;
    for domain in domains {
        // job_rx is alive until the workers own it, so this cannot fail
        if job_tx.send(domain).is_err() {
            break;
        }
        expected += 1;
    }
    // Closing the queue is what lets idle workers terminate
    drop(job_tx);

    let jobs: JobQueue = Arc::new(Mutex::new(job_rx));
    let handles = (1..=workers)
        .map(|id| {
            tokio::spawn(worker(
                id,
                Arc::clone(&jobs),
                result_tx.clone(),
                Arc::clone(&checker),
                Arc::clone(&sink),
            ))
        })
        .collect();

    WorkerPool {
        expected,
        results,
        handles,
    }
}

async fn worker<R: Resolve, C: Connect>(
    id: usize,
    jobs: JobQueue,
    results: UnboundedSender<CheckResult>,
    checker: Arc<DomainChecker<R, C>>,
    sink: Arc<dyn DiagnosticSink>,
) {
    loop {
        let next = jobs.lock().await.recv().await;
        let Some(domain) = next else {
            break;
        };

        sink.record(DiagnosticEvent::WorkerStarted {
            worker: id,
            domain: domain.clone(),
        });
        let result = checker.check(&domain).await;
        let status = result.status;

        if results.send(result).is_err() {
            debug!("Worker {id}: result queue closed, stopping");
            break;
        }
        sink.record(DiagnosticEvent::WorkerFinished {
            worker: id,
            domain,
            status,
        });
    }
}
