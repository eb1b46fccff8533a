//! Configuration types and CLI options.
//!
//! `Opt` is the command-line surface. It converts into the library `Config`,
//! which can also be built programmatically.

use std::time::Duration;

use strum_macros::{Display, EnumString};
use structopt::StructOpt;

use crate::config::constants::{
    CONNECT_TIMEOUT_SECS, DEADLINE_GRACE, DEFAULT_CRITICAL_DAYS, DEFAULT_WARNING_DAYS,
    DEFAULT_WORKERS,
};
use crate::error_handling::ConfigError;

/// Log output format.
///
/// Controls how diagnostic log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Remaining-validity thresholds.
///
/// A certificate whose remaining validity is strictly below `critical` is
/// critical; strictly below `warning` it is a warning. The two are not
/// checked against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub warning: chrono::Duration,
    pub critical: chrono::Duration,
}

impl Thresholds {
    pub fn from_days(warning_days: u32, critical_days: u32) -> Self {
        Self {
            warning: chrono::Duration::days(i64::from(warning_days)),
            critical: chrono::Duration::days(i64::from(critical_days)),
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::from_days(DEFAULT_WARNING_DAYS, DEFAULT_CRITICAL_DAYS)
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use cert_status::{Config, Thresholds};
///
/// let config = Config {
///     thresholds: Thresholds::from_days(30, 7),
///     workers: 4,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Warning and critical remaining-validity thresholds
    pub thresholds: Thresholds,

    /// Number of concurrent workers
    pub workers: usize,

    /// Timeout for TCP connect plus TLS handshake of one address
    pub connect_timeout: Duration,

    /// Added to `connect_timeout` to form the hard deadline of one address
    pub deadline_grace: Duration,
}

impl Config {
    /// Checks the invariants the worker pool and connector rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        if self.connect_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Hard deadline for one address: connection timeout plus grace.
    pub fn deadline(&self) -> Duration {
        self.connect_timeout + self.deadline_grace
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            workers: DEFAULT_WORKERS,
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            deadline_grace: DEADLINE_GRACE,
        }
    }
}

/// Command-line options.
#[derive(Debug, Clone, StructOpt)]
#[structopt(
    name = "cert_status",
    about = "Checks TLS certificate expiry for a list of domains"
)]
pub struct Opt {
    /// The domain names of the hosts to check; read from stdin if not provided
    #[structopt(short = "d", long = "domains")]
    pub domains: Option<String>,

    /// Warning validity in days
    #[structopt(short = "w", long = "warning", default_value = "25")]
    pub warning_days: u32,

    /// Critical validity in days
    #[structopt(short = "c", long = "critical", default_value = "14")]
    pub critical_days: u32,

    /// Count of workers
    #[structopt(short = "p", long = "workers", default_value = "10")]
    pub workers: usize,

    /// Connection timeout in seconds (TCP connect plus TLS handshake)
    #[structopt(long = "timeout", default_value = "30")]
    pub timeout_seconds: u64,

    /// Print debug information
    #[structopt(long)]
    pub debug: bool,

    /// Log format for debug information
    #[structopt(long = "log-format", default_value = "plain", possible_values = &["plain", "json"])]
    pub log_format: LogFormat,

    /// Print the run summary as JSON instead of a status line
    #[structopt(long)]
    pub json: bool,
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Self {
            thresholds: Thresholds::from_days(opt.warning_days, opt.critical_days),
            workers: opt.workers,
            connect_timeout: Duration::from_secs(opt.timeout_seconds),
            deadline_grace: DEADLINE_GRACE,
        }
    }
}
