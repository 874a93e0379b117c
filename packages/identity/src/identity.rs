//! Signer identity as read from the creator certificate

use serde::{Deserialize, Serialize};
use x509_cert::Certificate;

use crate::name_extraction::extract_name_attributes;

/// Identity of the client that signed a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerIdentity {
    /// Subject commonName, verbatim. Empty when the subject has none.
    pub common_name: String,
    /// Subject organizationName attributes
    pub organization: Vec<String>,
    /// Subject organizationalUnitName attributes
    pub organizational_unit: Vec<String>,
    /// Issuer commonName, empty when absent
    pub issuer_common_name: String,
    /// Certificate serial number as lower-case hex
    pub serial_number: String,
}

impl SignerIdentity {
    /// Build the identity from a parsed certificate
    #[must_use]
    pub fn from_certificate(cert: &Certificate) -> Self {
        let tbs = &cert.tbs_certificate;
        let subject = extract_name_attributes(&tbs.subject);
        let issuer = extract_name_attributes(&tbs.issuer);

        Self {
            common_name: subject.common_name.unwrap_or_default(),
            organization: subject.organization,
            organizational_unit: subject.organizational_unit,
            issuer_common_name: issuer.common_name.unwrap_or_default(),
            serial_number: hex::encode(tbs.serial_number.as_bytes()),
        }
    }
}
