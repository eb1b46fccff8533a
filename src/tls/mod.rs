//! TLS connections and certificate inspection.
//!
//! This module connects to port 443 of each resolved address and hands the
//! verified peer certificates to the inspector:
//! - [`Connect`]: the connection seam used by the domain checker
//! - [`TlsProbe`]: the `tokio-rustls` implementation, verifying against the
//!   `webpki-roots` trust anchors
//! - [`inspect_chains`] / [`reduce`]: remaining-validity classification
//!
//! Certificates are parsed with `x509-parser`.

mod extract;
mod inspect;

use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use log::debug;
use rustls::pki_types::ServerName;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio_rustls::client::TlsStream;
use tokio_rustls::rustls::ClientConfig;
use tokio_rustls::TlsConnector;

use crate::config::{Config, HTTPS_PORT};
use crate::error_handling::CheckError;
use crate::models::CertificateChain;

use extract::parse_certificate;

pub use inspect::{classify, inspect_chains, reduce, LeafFinding};

/// Opens a verified TLS session to one address of a domain and returns the
/// certificate chains it presented.
///
/// Implementations must close the connection before the returned future
/// completes, whatever the outcome.
pub trait Connect: Send + Sync + 'static {
    fn fetch_chains(
        &self,
        domain: &str,
        addr: IpAddr,
    ) -> impl Future<Output = Result<Vec<CertificateChain>, CheckError>> + Send;
}

/// TLS client that checks `addr:443` with SNI set to the domain.
///
/// TCP connect plus handshake is bounded by the connection timeout; the
/// whole connect, extract and close sequence by the hard deadline.
#[derive(Clone)]
pub struct TlsProbe {
    connector: TlsConnector,
    connect_timeout: Duration,
    deadline: Duration,
}

impl TlsProbe {
    pub fn new(tls_config: Arc<ClientConfig>, config: &Config) -> Self {
        Self {
            connector: TlsConnector::from(tls_config),
            connect_timeout: config.connect_timeout,
            deadline: config.deadline(),
        }
    }

    async fn handshake(
        &self,
        server_name: ServerName<'static>,
        addr: IpAddr,
    ) -> Result<TlsStream<TcpStream>, CheckError> {
        let sock = TcpStream::connect(SocketAddr::new(addr, HTTPS_PORT))
            .await
            .map_err(|source| CheckError::Connect { addr, source })?;
        self.connector
            .connect(server_name, sock)
            .await
            .map_err(|source| CheckError::Handshake { addr, source })
    }

    async fn probe(
        &self,
        server_name: ServerName<'static>,
        addr: IpAddr,
    ) -> Result<Vec<CertificateChain>, CheckError> {
        let mut tls_stream =
            match tokio::time::timeout(self.connect_timeout, self.handshake(server_name, addr))
                .await
            {
                Ok(stream) => stream?,
                Err(_) => {
                    return Err(CheckError::ConnectTimeout {
                        addr,
                        timeout: self.connect_timeout,
                    })
                }
            };

        // rustls hands back the chain it verified, leaf first
        let chains = match tls_stream.get_ref().1.peer_certificates() {
            Some(certs) => certs
                .iter()
                .map(|der| parse_certificate(der.as_ref()))
                .collect::<Result<CertificateChain, _>>()
                .map(|chain| vec![chain])
                .map_err(|reason| CheckError::CertificateParse { addr, reason }),
            None => Ok(Vec::new()),
        };

        if let Err(e) = tls_stream.shutdown().await {
            debug!("TLS shutdown with {addr} failed: {e}");
        }

        chains
    }
}

impl Connect for TlsProbe {
    async fn fetch_chains(
        &self,
        domain: &str,
        addr: IpAddr,
    ) -> Result<Vec<CertificateChain>, CheckError> {
        let server_name =
            ServerName::try_from(domain.to_string()).map_err(|e| CheckError::InvalidServerName {
                domain: domain.to_string(),
                reason: e.to_string(),
            })?;

        match tokio::time::timeout(self.deadline, self.probe(server_name, addr)).await {
            Ok(result) => result,
            Err(_) => Err(CheckError::DeadlineExceeded {
                addr,
                deadline: self.deadline,
            }),
        }
    }
}
