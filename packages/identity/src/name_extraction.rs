//! Distinguished name attribute extraction
//!
//! Pulls the attributes a signer identity cares about out of an x509-cert
//! `Name`, decoding each value according to its ASN.1 string type.

use der::asn1::{BmpString, Ia5StringRef, PrintableStringRef, Utf8StringRef};
use der::{Any, Tag, Tagged};
use x509_cert::name::Name;

const OID_CN: &str = "2.5.4.3"; // commonName
const OID_O: &str = "2.5.4.10"; // organizationName
const OID_OU: &str = "2.5.4.11"; // organizationalUnitName

/// Subject or issuer attributes relevant to a signer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameAttributes {
    /// Last commonName attribute in the sequence, if any
    pub common_name: Option<String>,
    /// organizationName attributes in order
    pub organization: Vec<String>,
    /// organizationalUnitName attributes in order
    pub organizational_unit: Vec<String>,
}

/// Extract CN, O and OU attributes from a distinguished name
pub fn extract_name_attributes(name: &Name) -> NameAttributes {
    let mut attrs = NameAttributes::default();

    for rdn in &name.0 {
        for atv in rdn.0.iter() {
            let Some(value) = decode_string_value(&atv.value) else {
                tracing::debug!(
                    oid = %atv.oid,
                    tag = ?atv.value.tag(),
                    "skipping non-string name attribute"
                );
                continue;
            };

            match atv.oid.to_string().as_str() {
                // A later CN overrides an earlier one
                OID_CN => attrs.common_name = Some(value),
                OID_O => attrs.organization.push(value),
                OID_OU => attrs.organizational_unit.push(value),
                _ => {}
            }
        }
    }

    attrs
}

/// Decode an attribute value in any of the directory string encodings
fn decode_string_value(value: &Any) -> Option<String> {
    if let Ok(ps) = PrintableStringRef::try_from(value) {
        return Some(ps.to_string());
    }
    if let Ok(utf8s) = Utf8StringRef::try_from(value) {
        return Some(utf8s.to_string());
    }
    if let Ok(ia5s) = Ia5StringRef::try_from(value) {
        return Some(ia5s.to_string());
    }

    match value.tag() {
        // T61 is treated as Latin-1, which covers what CAs put in practice
        Tag::TeletexString => Some(value.value().iter().map(|&b| char::from(b)).collect()),
        Tag::BmpString => value
            .decode_as::<BmpString>()
            .ok()
            .map(|bmp| bmp.to_string()),
        _ => None,
    }
}
