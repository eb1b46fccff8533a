//! Domain to address resolution.

use std::future::Future;
use std::net::IpAddr;

use trust_dns_resolver::TokioAsyncResolver;

use crate::error_handling::CheckError;

/// Resolves a domain to the addresses that must each be checked.
///
/// Implementations return addresses in the order the underlying mechanism
/// produced them. Any lookup failure is an error; an empty list without an
/// error is allowed and means there is nothing to connect to.
pub trait Resolve: Send + Sync + 'static {
    fn resolve(
        &self,
        domain: &str,
    ) -> impl Future<Output = Result<Vec<IpAddr>, CheckError>> + Send;
}

impl Resolve for TokioAsyncResolver {
    /// Looks up A and AAAA records for `domain`.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Resolution` on NXDOMAIN, an empty answer, a
    /// network error or a timeout.
    async fn resolve(&self, domain: &str) -> Result<Vec<IpAddr>, CheckError> {
        let response = self
            .lookup_ip(domain)
            .await
            .map_err(|e| CheckError::Resolution {
                domain: domain.to_string(),
                reason: e.to_string(),
            })?;
        Ok(response.iter().collect())
    }
}
