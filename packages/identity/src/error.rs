//! Error types for signer identity extraction

use thiserror::Error;

/// Failure to extract a signer identity from a creator blob.
///
/// Every variant is recoverable. The blob is supplied once per invocation,
/// so retrying with the same input always yields the same outcome.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The `-----BEGIN CERTIFICATE-----` marker does not occur in the blob
    #[error("No Certificate found")]
    NoCertificateFound,

    /// The marker is present but the bytes following it are not a PEM block
    #[error("Error received on PEM decode of certificate ({reason}): {text}")]
    PemDecodeFailed {
        /// Decoder diagnostic
        reason: String,
        /// Blob contents from the marker onwards, lossily decoded as UTF-8
        text: String,
    },

    /// The PEM payload is not a valid DER-encoded X.509 certificate
    #[error("X.509 parsing failed: {0}")]
    CertificateParseFailed(#[from] der::Error),
}

/// Discriminant of [`ExtractionError`] without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionErrorKind {
    /// See [`ExtractionError::NoCertificateFound`]
    NoCertificateFound,
    /// See [`ExtractionError::PemDecodeFailed`]
    PemDecodeFailed,
    /// See [`ExtractionError::CertificateParseFailed`]
    CertificateParseFailed,
}

impl ExtractionError {
    /// Kind of failure, for matching without borrowing the payload
    #[must_use]
    pub fn kind(&self) -> ExtractionErrorKind {
        match self {
            Self::NoCertificateFound => ExtractionErrorKind::NoCertificateFound,
            Self::PemDecodeFailed { .. } => ExtractionErrorKind::PemDecodeFailed,
            Self::CertificateParseFailed(_) => ExtractionErrorKind::CertificateParseFailed,
        }
    }

    pub(crate) fn pem_decode(reason: impl Into<String>, text: &[u8]) -> Self {
        Self::PemDecodeFailed {
            reason: reason.into(),
            text: String::from_utf8_lossy(text).into_owned(),
        }
    }
}

/// Result alias for identity extraction
pub type Result<T> = std::result::Result<T, ExtractionError>;
