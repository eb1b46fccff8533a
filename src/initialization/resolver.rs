//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::time::Duration;

use log::warn;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::system_conf::read_system_conf;
use trust_dns_resolver::TokioAsyncResolver;

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};

/// Initializes the DNS resolver for address lookups.
///
/// Uses the system resolver configuration (`/etc/resolv.conf` or the
/// platform equivalent) so lookups behave like the rest of the host. Falls
/// back to the library default name servers if the system configuration
/// cannot be read.
///
/// Timeouts are bounded to keep a slow name server from stalling a worker.
pub fn init_resolver() -> TokioAsyncResolver {
    let (config, mut opts) = match read_system_conf() {
        Ok(conf) => conf,
        Err(e) => {
            warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;
    // Names are checked as given, never with search domains appended
    opts.ndots = 0;

    TokioAsyncResolver::tokio(config, opts)
}
