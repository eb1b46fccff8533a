//! Per-domain check.
//!
//! This module contains the logic for checking a single domain: resolve it,
//! connect to every address, inspect what each address presents and reduce
//! it all to one severity.

use std::net::IpAddr;
use std::sync::Arc;

use chrono::Utc;

use crate::config::Thresholds;
use crate::diagnostics::{DiagnosticEvent, DiagnosticSink};
use crate::dns::Resolve;
use crate::models::CheckResult;
use crate::severity::Severity;
use crate::tls::{inspect_chains, reduce, Connect};

/// Checks domains one at a time. Shared by all workers of a run.
pub struct DomainChecker<R, C> {
    resolver: R,
    connector: C,
    thresholds: Thresholds,
    sink: Arc<dyn DiagnosticSink>,
}

impl<R: Resolve, C: Connect> DomainChecker<R, C> {
    pub fn new(
        resolver: R,
        connector: C,
        thresholds: Thresholds,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            resolver,
            connector,
            thresholds,
            sink,
        }
    }

    /// Checks one domain and produces its result.
    ///
    /// Never fails: a lookup failure, or a connection failure on any
    /// address, makes the domain `Critical`. Addresses are checked in
    /// resolver order and a failing address does not stop the others. A
    /// lookup that succeeds with no addresses leaves the domain `Ok`.
    pub async fn check(&self, domain: &str) -> CheckResult {
        CheckResult {
            domain: domain.to_string(),
            status: self.check_status(domain).await,
        }
    }

    async fn check_status(&self, domain: &str) -> Severity {
        let addrs = match self.resolver.resolve(domain).await {
            Ok(addrs) => addrs,
            Err(e) => {
                self.sink.record(DiagnosticEvent::ResolutionFailed {
                    domain: domain.to_string(),
                    error: e.to_string(),
                });
                return Severity::Critical;
            }
        };
        self.sink.record(DiagnosticEvent::Resolved {
            domain: domain.to_string(),
            addrs: addrs.clone(),
        });

        let mut status = Severity::Ok;
        for addr in addrs {
            status = status.escalate(self.check_address(domain, addr).await);
        }
        status
    }

    async fn check_address(&self, domain: &str, addr: IpAddr) -> Severity {
        let chains = match self.connector.fetch_chains(domain, addr).await {
            Ok(chains) => chains,
            Err(e) => {
                self.sink.record(DiagnosticEvent::ConnectionFailed {
                    domain: domain.to_string(),
                    addr,
                    error: e.to_string(),
                });
                return Severity::Critical;
            }
        };

        let findings = inspect_chains(&chains, Utc::now(), &self.thresholds);
        for finding in &findings {
            self.sink.record(DiagnosticEvent::CertificateClassified {
                domain: domain.to_string(),
                addr,
                remaining: finding.remaining,
                status: finding.status,
            });
        }
        reduce(&findings)
    }
}
