//! Creator blob parsing
//!
//! The creator blob handed over by the peer is an opaque serialized identity.
//! The certificate is located by its PEM begin marker, decoded with
//! `rustls-pemfile` and parsed with `x509-cert`. The end of the PEM block is
//! not searched for separately: the decoder reports a missing or broken block.

use der::Decode;
use x509_cert::Certificate;

use crate::error::{ExtractionError, Result};
use crate::identity::SignerIdentity;

/// Marker preceding the signer certificate inside a creator blob
pub const CERTIFICATE_BEGIN_MARKER: &[u8] = b"-----BEGIN CERTIFICATE-----";

/// Return the blob from the first certificate marker onwards
fn certificate_text(blob: &[u8]) -> Result<&[u8]> {
    blob.windows(CERTIFICATE_BEGIN_MARKER.len())
        .position(|window| window == CERTIFICATE_BEGIN_MARKER)
        .map(|start| &blob[start..])
        .ok_or(ExtractionError::NoCertificateFound)
}

/// Locate and PEM-decode the first certificate in a creator blob
///
/// Returns the DER payload. Anything after the first complete PEM block is
/// ignored.
pub fn extract_certificate_der(blob: &[u8]) -> Result<Vec<u8>> {
    let cert_text = certificate_text(blob)?;

    let mut cursor = std::io::Cursor::new(cert_text);
    let cert_der = rustls_pemfile::certs(&mut cursor)
        .next()
        .ok_or_else(|| ExtractionError::pem_decode("no PEM block found", cert_text))?
        .map_err(|e| ExtractionError::pem_decode(e.to_string(), cert_text))?;

    Ok(cert_der.as_ref().to_vec())
}

/// Parse the signer certificate embedded in a creator blob
pub fn extract_certificate(blob: &[u8]) -> Result<Certificate> {
    let cert_der = extract_certificate_der(blob)?;
    Ok(Certificate::from_der(&cert_der)?)
}

/// Extract the full signer identity from a creator blob
pub fn extract_identity(blob: &[u8]) -> Result<SignerIdentity> {
    let cert = extract_certificate(blob)?;
    let identity = SignerIdentity::from_certificate(&cert);
    tracing::debug!(
        common_name = %identity.common_name,
        serial = %identity.serial_number,
        "extracted signer identity"
    );
    Ok(identity)
}

/// Extract the subject common name of the signer certificate
///
/// # Errors
///
/// - [`ExtractionError::NoCertificateFound`] when the blob has no begin marker
/// - [`ExtractionError::PemDecodeFailed`] when the marker is not followed by a PEM block
/// - [`ExtractionError::CertificateParseFailed`] when the PEM payload is not X.509 DER
pub fn extract_common_name(blob: &[u8]) -> Result<String> {
    extract_identity(blob).map(|identity| identity.common_name)
}
