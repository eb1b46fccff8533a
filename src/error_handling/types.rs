//! Error type definitions.
//!
//! This module defines the error types used throughout the application.
//! Per-domain failures (`CheckError`) are folded into a severity by the
//! domain checker; the remaining types abort the run.

use std::net::IpAddr;
use std::time::Duration;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error building the TLS client configuration.
    #[error("TLS client initialization error: {0}")]
    TlsConfigError(#[from] rustls::Error),
}

/// Invalid run configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The worker pool needs at least one worker.
    #[error("worker count must be at least 1")]
    NoWorkers,

    /// A zero connection timeout would fail every handshake.
    #[error("connection timeout must be greater than zero")]
    ZeroTimeout,
}

/// Failures while checking a single domain.
///
/// None of these abort a run: the domain checker turns each of them into a
/// `Critical` status for the domain concerned.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Address lookup for the domain failed.
    #[error("lookup of {domain} failed: {reason}")]
    Resolution { domain: String, reason: String },

    /// The domain cannot be used as a TLS server name.
    #[error("invalid server name {domain}: {reason}")]
    InvalidServerName { domain: String, reason: String },

    /// TCP connection to the address failed.
    #[error("connection to {addr} failed: {source}")]
    Connect {
        addr: IpAddr,
        #[source]
        source: std::io::Error,
    },

    /// TCP connect plus handshake exceeded the connection timeout.
    #[error("connection to {addr} timed out after {timeout:?}")]
    ConnectTimeout { addr: IpAddr, timeout: Duration },

    /// TLS handshake or certificate verification failed.
    #[error("TLS handshake with {addr} failed: {source}")]
    Handshake {
        addr: IpAddr,
        #[source]
        source: std::io::Error,
    },

    /// The whole connect, inspect and close sequence overran its hard deadline.
    #[error("check of {addr} exceeded its deadline of {deadline:?}")]
    DeadlineExceeded { addr: IpAddr, deadline: Duration },

    /// A presented certificate could not be parsed.
    #[error("certificate from {addr} could not be parsed: {reason}")]
    CertificateParse { addr: IpAddr, reason: String },
}

/// Fatal errors of a whole run.
#[derive(Error, Debug)]
pub enum RunError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The result queue closed before every domain reported.
    #[error("worker pool returned {received} of {expected} results")]
    MissingResults { expected: usize, received: usize },

    /// A worker task panicked.
    #[error("worker task failed: {0}")]
    WorkerPanicked(#[from] tokio::task::JoinError),

    /// Resource setup failed.
    #[error(transparent)]
    Initialization(#[from] InitializationError),
}
