//! Certificate extraction utilities.

use chrono::{DateTime, Utc};

use crate::models::{CertificateId, CertificateRecord};

/// Parses a DER-encoded certificate into the fields the expiry check needs.
///
/// The DER encoding itself serves as the certificate's identity: it embeds
/// the signature, so two certificates share an identity exactly when they
/// are the same certificate.
///
/// # Errors
///
/// Returns a description of the problem if the bytes are not an X.509
/// certificate or its `notAfter` cannot be represented.
pub(crate) fn parse_certificate(der: &[u8]) -> Result<CertificateRecord, String> {
    let (_, cert) = x509_parser::parse_x509_certificate(der).map_err(|e| e.to_string())?;

    let timestamp = cert.validity().not_after.timestamp();
    let not_after = DateTime::<Utc>::from_timestamp(timestamp, 0)
        .ok_or_else(|| format!("notAfter out of range: {timestamp}"))?;

    Ok(CertificateRecord {
        identity: CertificateId::new(der),
        is_ca: cert.is_ca(),
        not_after,
    })
}
