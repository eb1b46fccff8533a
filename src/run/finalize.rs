//! Result aggregation.
//!
//! This module collects the per-domain results of a run into a
//! [`RunSummary`] and derives the overall status from it.

use serde::Serialize;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::error_handling::RunError;
use crate::models::CheckResult;
use crate::severity::Severity;

/// Domains of one run bucketed by severity.
///
/// Buckets keep the order in which results arrived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub critical: Vec<String>,
    pub warning: Vec<String>,
    pub ok: Vec<String>,
    pub unknown: Vec<String>,
}

impl RunSummary {
    /// Files one result under its severity.
    pub fn record(&mut self, result: CheckResult) {
        let bucket = match result.status {
            Severity::Critical => &mut self.critical,
            Severity::Warning => &mut self.warning,
            Severity::Ok => &mut self.ok,
            Severity::Unknown => &mut self.unknown,
        };
        bucket.push(result.domain);
    }

    /// Worst status among critical, warning and ok domains.
    ///
    /// The unknown bucket does not take part. `None` when none of the three
    /// buckets has a domain, e.g. for an empty run.
    pub fn overall(&self) -> Option<Severity> {
        if !self.critical.is_empty() {
            Some(Severity::Critical)
        } else if !self.warning.is_empty() {
            Some(Severity::Warning)
        } else if !self.ok.is_empty() {
            Some(Severity::Ok)
        } else {
            None
        }
    }

    /// Exit code of the run; undetermined runs exit as `Unknown`.
    pub fn exit_code(&self) -> i32 {
        self.overall().unwrap_or(Severity::Unknown).exit_code()
    }

    /// Number of domains recorded.
    pub fn total(&self) -> usize {
        self.critical.len() + self.warning.len() + self.ok.len() + self.unknown.len()
    }
}

impl FromIterator<CheckResult> for RunSummary {
    fn from_iter<I: IntoIterator<Item = CheckResult>>(iter: I) -> Self {
        let mut summary = RunSummary::default();
        for result in iter {
            summary.record(result);
        }
        summary
    }
}

/// Reads exactly `expected` results from the result queue.
///
/// Blocks until every result has arrived; there is no timeout.
///
/// # Errors
///
/// Returns `RunError::MissingResults` if the queue closes early, which
/// happens only when workers exit without reporting every domain.
pub async fn collect_results(
    results: &mut UnboundedReceiver<CheckResult>,
    expected: usize,
) -> Result<RunSummary, RunError> {
    let mut summary = RunSummary::default();
    for received in 0..expected {
        match results.recv().await {
            Some(result) => summary.record(result),
            None => return Err(RunError::MissingResults { expected, received }),
        }
    }

    log::debug!("okDomains: {:?}", summary.ok);
    log::debug!("warningDomains: {:?}", summary.warning);
    log::debug!("criticalDomains: {:?}", summary.critical);

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn result(domain: &str, status: Severity) -> CheckResult {
        CheckResult {
            domain: domain.to_string(),
            status,
        }
    }

    #[test]
    fn test_buckets_and_overall() {
        let summary: RunSummary = [
            result("a.example", Severity::Ok),
            result("b.example", Severity::Critical),
            result("c.example", Severity::Critical),
            result("d.example", Severity::Warning),
        ]
        .into_iter()
        .collect();

        assert_eq!(summary.ok, vec!["a.example"]);
        assert_eq!(summary.warning, vec!["d.example"]);
        assert_eq!(summary.critical, vec!["b.example", "c.example"]);
        assert!(summary.unknown.is_empty());
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.overall(), Some(Severity::Critical));
        assert_eq!(summary.exit_code(), 2);
    }

    #[test]
    fn test_warning_dominates_ok() {
        let summary: RunSummary = [
            result("a.example", Severity::Ok),
            result("b.example", Severity::Warning),
        ]
        .into_iter()
        .collect();
        assert_eq!(summary.overall(), Some(Severity::Warning));
        assert_eq!(summary.exit_code(), 1);
    }

    #[test]
    fn test_all_ok() {
        let summary: RunSummary = [result("a.example", Severity::Ok)].into_iter().collect();
        assert_eq!(summary.overall(), Some(Severity::Ok));
        assert_eq!(summary.exit_code(), 0);
    }

    #[test]
    fn test_empty_run_is_undetermined() {
        let summary = RunSummary::default();
        assert_eq!(summary.overall(), None);
        assert_eq!(summary.exit_code(), 3);
    }

    #[test]
    fn test_unknown_bucket_does_not_drive_overall() {
        let summary: RunSummary = [
            result("a.example", Severity::Unknown),
            result("b.example", Severity::Ok),
        ]
        .into_iter()
        .collect();
        assert_eq!(summary.unknown, vec!["a.example"]);
        assert_eq!(summary.overall(), Some(Severity::Ok));

        let only_unknown: RunSummary = [result("a.example", Severity::Unknown)]
            .into_iter()
            .collect();
        assert_eq!(only_unknown.overall(), None);
        assert_eq!(only_unknown.exit_code(), 3);
    }

    #[tokio::test]
    async fn test_collect_reads_expected_results() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(result("a.example", Severity::Ok)).unwrap();
        tx.send(result("b.example", Severity::Warning)).unwrap();

        let summary = collect_results(&mut rx, 2).await.unwrap();
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.overall(), Some(Severity::Warning));
    }

    #[tokio::test]
    async fn test_collect_fails_when_queue_closes_early() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(result("a.example", Severity::Ok)).unwrap();
        drop(tx);

        let err = collect_results(&mut rx, 3).await.unwrap_err();
        assert!(matches!(
            err,
            RunError::MissingResults {
                expected: 3,
                received: 1
            }
        ));
    }
}
