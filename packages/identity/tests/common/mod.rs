//! Certificate fixtures shared by the integration tests

#![allow(dead_code)]

use rcgen::{CertificateParams, DistinguishedName, DnType, KeyPair, SerialNumber};

/// A generated self-signed certificate in both encodings
pub struct TestCert {
    pub pem: String,
    pub der: Vec<u8>,
}

/// Generate a self-signed client certificate with the given subject CN
pub fn client_cert(common_name: &str) -> TestCert {
    let mut params = CertificateParams::new(vec!["localhost".to_string()])
        .expect("Failed to create certificate parameters");

    let mut distinguished_name = DistinguishedName::new();
    distinguished_name.push(DnType::CommonName, common_name);
    distinguished_name.push(DnType::OrganizationName, "Org1");
    distinguished_name.push(DnType::OrganizationalUnitName, "client");
    params.distinguished_name = distinguished_name;
    params.serial_number = Some(SerialNumber::from(vec![0x0a, 0x0b, 0x0c]));

    let key_pair = KeyPair::generate().expect("Failed to generate key pair");
    let cert = params
        .self_signed(&key_pair)
        .expect("Failed to create self-signed certificate");

    TestCert {
        pem: cert.pem(),
        der: cert.der().to_vec(),
    }
}

/// Generate a certificate whose subject carries no common name
pub fn cert_without_common_name() -> TestCert {
    let mut params = CertificateParams::new(vec!["localhost".to_string()])
        .expect("Failed to create certificate parameters");

    let mut distinguished_name = DistinguishedName::new();
    distinguished_name.push(DnType::OrganizationName, "Org1");
    params.distinguished_name = distinguished_name;

    let key_pair = KeyPair::generate().expect("Failed to generate key pair");
    let cert = params
        .self_signed(&key_pair)
        .expect("Failed to create self-signed certificate");

    TestCert {
        pem: cert.pem(),
        der: cert.der().to_vec(),
    }
}

/// Wrap a PEM certificate the way the peer serializes a creator identity
///
/// Protobuf `SerializedIdentity { mspid = 1, id_bytes = 2 }`.
pub fn serialized_identity(msp_id: &str, pem: &str) -> Vec<u8> {
    let mut out = Vec::new();
    out.push(0x0a);
    push_varint(&mut out, msp_id.len());
    out.extend_from_slice(msp_id.as_bytes());
    out.push(0x12);
    push_varint(&mut out, pem.len());
    out.extend_from_slice(pem.as_bytes());
    out
}

fn push_varint(out: &mut Vec<u8>, mut value: usize) {
    while value >= 0x80 {
        out.push((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

/// Read the subject CN directly from DER with x509-parser
pub fn oracle_common_name(der: &[u8]) -> String {
    let (_, parsed) =
        x509_parser::parse_x509_certificate(der).expect("x509-parser rejected certificate");
    let common_name = parsed
        .subject()
        .iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
        .unwrap_or_default()
        .to_string();
    common_name
}
