//! Configuration constants used as defaults.

use std::time::Duration;

/// Port every certificate check connects to.
pub const HTTPS_PORT: u16 = 443;

/// Default warning threshold in days.
pub const DEFAULT_WARNING_DAYS: u32 = 25;
/// Default critical threshold in days.
pub const DEFAULT_CRITICAL_DAYS: u32 = 14;
/// Default number of concurrent workers.
pub const DEFAULT_WORKERS: usize = 10;

// Network operation timeouts
/// TCP connect plus TLS handshake timeout in seconds
pub const CONNECT_TIMEOUT_SECS: u64 = 30;
/// Extra time on top of the connection timeout before a check is abandoned.
/// Bounds servers that accept the connection but stall the handshake or close.
pub const DEADLINE_GRACE: Duration = Duration::from_secs(5);
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 10;
/// DNS query attempts before a lookup is reported as failed
pub const DNS_ATTEMPTS: usize = 2;
