//! # Chaincode signer identity
//!
//! Extracts the identity of the client that signed a transaction from the
//! creator blob supplied by the peer. The blob is a serialized identity whose
//! payload is a PEM-encoded X.509 certificate; this crate finds the
//! certificate, decodes it and reads the subject.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chaincode_identity::extract_common_name;
//!
//! let creator: Vec<u8> = stub.creator()?;
//! let signer = extract_common_name(&creator)?;
//! ```
//!
//! Extraction is a pure function of its input and may be called from any
//! number of threads at once.

#![forbid(unsafe_code)]

pub mod error;
pub mod extractor;
pub mod identity;
pub mod name_extraction;

pub use error::{ExtractionError, ExtractionErrorKind, Result};
pub use extractor::{
    CERTIFICATE_BEGIN_MARKER, extract_certificate, extract_certificate_der, extract_common_name,
    extract_identity,
};
pub use identity::SignerIdentity;
