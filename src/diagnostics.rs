//! Per-step diagnostic events.
//!
//! The worker pool and domain checker report what they do through an
//! injected [`DiagnosticSink`] instead of writing to a logger directly.
//! [`NoopSink`] discards everything; [`LogSink`] forwards events to the
//! `log` facade at debug level.

use std::fmt;
use std::net::IpAddr;

use crate::severity::Severity;

const TARGET: &str = "cert_status::diagnostics";

/// Something the checker did that may be worth reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEvent {
    /// A worker picked up a domain.
    WorkerStarted { worker: usize, domain: String },
    /// A worker published the result of a domain.
    WorkerFinished {
        worker: usize,
        domain: String,
        status: Severity,
    },
    /// Address lookup succeeded.
    Resolved { domain: String, addrs: Vec<IpAddr> },
    /// Address lookup failed; the domain is critical.
    ResolutionFailed { domain: String, error: String },
    /// Connecting to one address failed; the domain is critical.
    ConnectionFailed {
        domain: String,
        addr: IpAddr,
        error: String,
    },
    /// A leaf certificate was classified.
    CertificateClassified {
        domain: String,
        addr: IpAddr,
        remaining: chrono::Duration,
        status: Severity,
    },
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticEvent::WorkerStarted { worker, domain } => {
                write!(f, "Worker {worker} start with domain {domain}")
            }
            DiagnosticEvent::WorkerFinished {
                worker,
                domain,
                status,
            } => write!(f, "Worker {worker} finish with domain {domain} ({status})"),
            DiagnosticEvent::Resolved { domain, addrs } => {
                write!(f, "{domain} resolved to {} address(es)", addrs.len())
            }
            DiagnosticEvent::ResolutionFailed { domain, error } => {
                write!(f, "{domain} set Critical. Lookup: {error}")
            }
            DiagnosticEvent::ConnectionFailed {
                domain,
                addr,
                error,
            } => write!(f, "{domain} ({addr}) set Critical. Connect: {error}"),
            DiagnosticEvent::CertificateClassified {
                domain,
                addr,
                remaining,
                status,
            } => write!(
                f,
                "{domain} ({addr}) {status}. remainingValidity: {}",
                format_remaining(*remaining)
            ),
        }
    }
}

/// Formats a remaining validity as days and hours, negative once expired.
pub fn format_remaining(remaining: chrono::Duration) -> String {
    let sign = if remaining < chrono::Duration::zero() {
        "-"
    } else {
        ""
    };
    let hours = remaining.num_hours().abs();
    format!("{sign}{}d{}h", hours / 24, hours % 24)
}

/// Receives diagnostic events.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, event: DiagnosticEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _event: DiagnosticEvent) {}
}

/// Forwards events to the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&self, event: DiagnosticEvent) {
        log::debug!(target: TARGET, "{event}");
    }
}
