use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::EmsaError;

/// DER encodings of the `DigestAlgorithm` part of `DigestInfo`, up to and including the
/// `OCTET STRING` header of the digest. Taken from RFC 8017, section 9.2, note 1.
const SHA224_PREFIX: [u8; 19] = [
    0x30, 0x2d, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x04, 0x05,
    0x00, 0x04, 0x1c,
];
const SHA256_PREFIX: [u8; 19] = [
    0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01, 0x05,
    0x00, 0x04, 0x20,
];
const SHA384_PREFIX: [u8; 19] = [
    0x30, 0x41, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x02, 0x05,
    0x00, 0x04, 0x30,
];
const SHA512_PREFIX: [u8; 19] = [
    0x30, 0x51, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x03, 0x05,
    0x00, 0x04, 0x40,
];
const SHA512_224_PREFIX: [u8; 19] = [
    0x30, 0x2d, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x05, 0x05,
    0x00, 0x04, 0x1c,
];
const SHA512_256_PREFIX: [u8; 19] = [
    0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x06, 0x05,
    0x00, 0x04, 0x20,
];

/// A hash function with a PKCS#1 v1.5 algorithm identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum HashAlgorithm {
    #[strum(to_string = "sha224", serialize = "sha-224")]
    Sha224,
    #[strum(to_string = "sha256", serialize = "sha-256")]
    Sha256,
    #[strum(to_string = "sha384", serialize = "sha-384")]
    Sha384,
    #[strum(to_string = "sha512", serialize = "sha-512")]
    Sha512,
    #[strum(to_string = "sha512-224", serialize = "sha512/224", serialize = "sha-512/224")]
    Sha512_224,
    #[strum(to_string = "sha512-256", serialize = "sha512/256", serialize = "sha-512/256")]
    Sha512_256,
}

impl HashAlgorithm {
    /// Length of the digest in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Sha224 | HashAlgorithm::Sha512_224 => 28,
            HashAlgorithm::Sha256 | HashAlgorithm::Sha512_256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    pub const fn der_prefix(self) -> &'static [u8] {
        match self {
            HashAlgorithm::Sha224 => &SHA224_PREFIX,
            HashAlgorithm::Sha256 => &SHA256_PREFIX,
            HashAlgorithm::Sha384 => &SHA384_PREFIX,
            HashAlgorithm::Sha512 => &SHA512_PREFIX,
            HashAlgorithm::Sha512_224 => &SHA512_224_PREFIX,
            HashAlgorithm::Sha512_256 => &SHA512_256_PREFIX,
        }
    }

    pub fn digest(self, msg: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha224 => Sha224::digest(msg).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(msg).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(msg).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(msg).to_vec(),
            HashAlgorithm::Sha512_224 => Sha512_224::digest(msg).to_vec(),
            HashAlgorithm::Sha512_256 => Sha512_256::digest(msg).to_vec(),
        }
    }

    /// Hashes `msg` and wraps the result in its `DigestInfo`.
    pub fn digest_info(self, msg: &[u8]) -> DigestInfo {
        DigestInfo {
            algorithm: self,
            digest: self.digest(msg),
        }
    }

    /// Identifies the algorithm whose DER prefix starts `bytes`.
    pub fn from_der_prefix(bytes: &[u8]) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter().find(|alg| bytes.starts_with(alg.der_prefix()))
    }
}

/// The DER-encoded `DigestInfo` value `T` of RFC 8017, section 9.2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestInfo {
    algorithm: HashAlgorithm,
    digest: Vec<u8>,
}

impl DigestInfo {
    /// Wraps a precomputed digest. Fails if its length does not match the algorithm.
    pub fn new(algorithm: HashAlgorithm, digest: Vec<u8>) -> Result<Self, EmsaError> {
        if digest.len() != algorithm.output_len() {
            return Err(EmsaError::Malformed("digest length does not match algorithm"));
        }
        Ok(Self { algorithm, digest })
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// Length of the DER encoding, `tLen` in RFC 8017.
    pub fn encoded_len(&self) -> usize {
        self.algorithm.der_prefix().len() + self.digest.len()
    }

    pub fn to_der(&self) -> Vec<u8> {
        let mut der = Vec::with_capacity(self.encoded_len());
        der.extend_from_slice(self.algorithm.der_prefix());
        der.extend_from_slice(&self.digest);
        der
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::FIXTURE_MESSAGE;

    #[test]
    fn test_sha512_fixture_digest() {
        let digest = HashAlgorithm::Sha512.digest(FIXTURE_MESSAGE.as_bytes());
        assert_eq!(
            digest,
            hex!("cfaf7c7a4b15e3b47bc307d99216ec1a26283b23eac2c90b133d7ba862182d0ced5e56af69c2ba093801b94322175272b64827df7305563f7cea401006f207a7")
        );
    }

    #[test]
    fn test_sha256_fixture_digest() {
        let digest = HashAlgorithm::Sha256.digest(FIXTURE_MESSAGE.as_bytes());
        assert_eq!(
            digest,
            hex!("de6571b74b27971a055db8d1c9d1aee3c39e41ce3abda4bb7b596cbb9b164455")
        );
    }

    #[test]
    fn test_output_len_matches_digest() {
        for alg in HashAlgorithm::iter() {
            assert_eq!(alg.digest(b"abc").len(), alg.output_len(), "{alg}");
            // The last prefix byte is the OCTET STRING length.
            assert_eq!(*alg.der_prefix().last().unwrap() as usize, alg.output_len());
        }
    }

    #[test]
    fn test_prefix_lookup() {
        for alg in HashAlgorithm::iter() {
            let info = alg.digest_info(b"abc");
            assert_eq!(HashAlgorithm::from_der_prefix(&info.to_der()), Some(alg));
        }
        assert_eq!(HashAlgorithm::from_der_prefix(&[0x30, 0x21]), None);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("sha512".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha512));
        assert_eq!("SHA-512".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha512));
        assert_eq!(
            "sha512/256".parse::<HashAlgorithm>(),
            Ok(HashAlgorithm::Sha512_256)
        );
        assert!("md5".parse::<HashAlgorithm>().is_err());
        assert_eq!(HashAlgorithm::Sha512_224.to_string(), "sha512-224");
    }

    #[test]
    fn test_digest_info_rejects_wrong_length() {
        assert!(DigestInfo::new(HashAlgorithm::Sha512, vec![0u8; 32]).is_err());
        let info = DigestInfo::new(HashAlgorithm::Sha256, vec![0u8; 32]).unwrap();
        assert_eq!(info.encoded_len(), 51);
    }
}
