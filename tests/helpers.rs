// Shared test helpers: in-memory resolver, connector and diagnostic sink.
//
// The fakes answer from tables keyed by domain and address, so checks run
// without network access.

#![allow(dead_code)] // Not every test file uses every helper

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use cert_status::dns::Resolve;
use cert_status::tls::Connect;
use cert_status::{
    CertificateChain, CertificateId, CertificateRecord, CheckError, DiagnosticEvent,
    DiagnosticSink, DomainChecker, Thresholds,
};
use chrono::{Duration, Utc};

/// Resolver answering from a table; unknown domains fail like NXDOMAIN.
#[derive(Default)]
pub struct StaticResolver {
    answers: HashMap<String, Vec<IpAddr>>,
    panics_on: Option<String>,
}

impl StaticResolver {
    pub fn with(mut self, domain: &str, addrs: Vec<IpAddr>) -> Self {
        self.answers.insert(domain.to_string(), addrs);
        self
    }

    /// Makes the lookup of `domain` panic, killing the worker that took it.
    pub fn panicking_on(mut self, domain: &str) -> Self {
        self.panics_on = Some(domain.to_string());
        self
    }
}

impl Resolve for StaticResolver {
    async fn resolve(&self, domain: &str) -> Result<Vec<IpAddr>, CheckError> {
        if self.panics_on.as_deref() == Some(domain) {
            panic!("resolver blew up on {domain}");
        }
        self.answers
            .get(domain)
            .cloned()
            .ok_or_else(|| CheckError::Resolution {
                domain: domain.to_string(),
                reason: "no record found".to_string(),
            })
    }
}

/// Connector answering from a table keyed by address; unknown addresses
/// fail the handshake. Records every address it was asked about.
#[derive(Default)]
pub struct StaticConnector {
    sessions: HashMap<IpAddr, Vec<CertificateChain>>,
    attempts: Arc<Mutex<Vec<(String, IpAddr)>>>,
}

impl StaticConnector {
    pub fn with(mut self, addr: IpAddr, chains: Vec<CertificateChain>) -> Self {
        self.sessions.insert(addr, chains);
        self
    }

    /// Shared log of `(domain, address)` connection attempts, in order.
    pub fn attempt_log(&self) -> Arc<Mutex<Vec<(String, IpAddr)>>> {
        Arc::clone(&self.attempts)
    }
}

impl Connect for StaticConnector {
    async fn fetch_chains(
        &self,
        domain: &str,
        addr: IpAddr,
    ) -> Result<Vec<CertificateChain>, CheckError> {
        self.attempts
            .lock()
            .unwrap()
            .push((domain.to_string(), addr));
        self.sessions
            .get(&addr)
            .cloned()
            .ok_or_else(|| CheckError::Handshake {
                addr,
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "invalid peer certificate: UnknownIssuer",
                ),
            })
    }
}

/// Sink keeping every event for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, event: DiagnosticEvent) {
        self.events.lock().unwrap().push(event);
    }
}

static NEXT_CERT_ID: AtomicU32 = AtomicU32::new(0);

/// A leaf certificate expiring `days` from now.
pub fn leaf(days: i64) -> CertificateRecord {
    cert(false, days)
}

/// A CA certificate expiring `days` from now.
pub fn ca(days: i64) -> CertificateRecord {
    cert(true, days)
}

fn cert(is_ca: bool, days: i64) -> CertificateRecord {
    let id = NEXT_CERT_ID.fetch_add(1, Ordering::Relaxed);
    CertificateRecord {
        identity: CertificateId::new(id.to_be_bytes()),
        is_ca,
        // An hour of slack keeps whole-day expectations stable while the test runs
        not_after: Utc::now() + Duration::days(days) + Duration::hours(1),
    }
}

/// A session presenting one chain: the leaf plus a long-lived intermediate.
pub fn session(leaf_days: i64) -> Vec<CertificateChain> {
    vec![vec![leaf(leaf_days), ca(3650)]]
}

/// Documentation-range IPv4 address `192.0.2.<n>`.
pub fn ip(n: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(192, 0, 2, n))
}

/// Domain checker using the default 25/14 day thresholds.
pub fn checker(
    resolver: StaticResolver,
    connector: StaticConnector,
    sink: Arc<dyn DiagnosticSink>,
) -> Arc<DomainChecker<StaticResolver, StaticConnector>> {
    Arc::new(DomainChecker::new(
        resolver,
        connector,
        Thresholds::from_days(25, 14),
        sink,
    ))
}
