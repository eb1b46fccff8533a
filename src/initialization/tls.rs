//! TLS client configuration.

use std::sync::Arc;

use rustls::crypto::ring::default_provider;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};

use crate::error_handling::InitializationError;

/// Builds the client configuration shared by every connection of a run.
///
/// Server certificates are verified against the Mozilla root program as
/// bundled by `webpki-roots`; handshakes with untrusted, mismatched or
/// expired chains fail. The `ring` provider is used explicitly so the
/// configuration does not depend on a process-wide default.
///
/// # Errors
///
/// Returns `InitializationError::TlsConfigError` if the provider supports
/// none of the default protocol versions.
pub fn init_tls_config() -> Result<Arc<ClientConfig>, InitializationError> {
    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder_with_provider(Arc::new(default_provider()))
        .with_safe_default_protocol_versions()?
        .with_root_certificates(root_store)
        .with_no_client_auth();

    Ok(Arc::new(config))
}
