use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::severity::Severity;

/// Opaque identity of a certificate, used to inspect each certificate at most
/// once per connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CertificateId(Vec<u8>);

impl CertificateId {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }
}

/// A certificate presented by a peer in a verified TLS session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRecord {
    pub identity: CertificateId,
    pub is_ca: bool,
    pub not_after: DateTime<Utc>,
}

/// Certificates of one chain, leaf first.
pub type CertificateChain = Vec<CertificateRecord>;

/// Outcome of checking one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub domain: String,
    pub status: Severity,
}
