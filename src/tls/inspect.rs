//! Certificate inspection.
//!
//! Walks the certificate chains of one verified session and classifies every
//! distinct leaf certificate by its remaining validity.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::config::Thresholds;
use crate::models::{CertificateChain, CertificateId, CertificateRecord};
use crate::severity::Severity;

/// Classification of one leaf certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafFinding {
    pub not_after: DateTime<Utc>,
    pub remaining: chrono::Duration,
    pub status: Severity,
}

/// Maps a remaining validity onto a severity.
///
/// Both thresholds are exclusive: a certificate with exactly `warning` left
/// is `Ok`, one with exactly `critical` left is `Warning`.
pub fn classify(remaining: chrono::Duration, thresholds: &Thresholds) -> Severity {
    if remaining < thresholds.critical {
        Severity::Critical
    } else if remaining < thresholds.warning {
        Severity::Warning
    } else {
        Severity::Ok
    }
}

/// Classifies the leaf certificates of one connection.
///
/// Certificates are visited chain by chain, leaf first. A certificate seen
/// earlier on the same connection is skipped, as are CA certificates: an
/// invalid CA already fails verification during the handshake.
pub fn inspect_chains(
    chains: &[CertificateChain],
    now: DateTime<Utc>,
    thresholds: &Thresholds,
) -> Vec<LeafFinding> {
    let mut seen: HashSet<&CertificateId> = HashSet::new();
    let mut findings = Vec::new();

    for cert in chains.iter().flatten() {
        if !seen.insert(&cert.identity) {
            continue;
        }
        if cert.is_ca {
            continue;
        }
        findings.push(inspect_leaf(cert, now, thresholds));
    }

    findings
}

fn inspect_leaf(
    cert: &CertificateRecord,
    now: DateTime<Utc>,
    thresholds: &Thresholds,
) -> LeafFinding {
    let remaining = cert.not_after - now;
    LeafFinding {
        not_after: cert.not_after,
        remaining,
        status: classify(remaining, thresholds),
    }
}

/// Reduces findings to one severity, starting from `Ok`.
pub fn reduce(findings: &[LeafFinding]) -> Severity {
    findings
        .iter()
        .fold(Severity::Ok, |acc, finding| acc.escalate(finding.status))
}
