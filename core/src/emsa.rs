//! EMSA-PKCS1-v1_5 encoding, RFC 8017 section 9.2.
//!
//! An encoded message of length `emLen` is laid out as
//! `0x00 || 0x01 || PS || 0x00 || T`, where `T` is the DER `DigestInfo` and `PS` is
//! `emLen - tLen - 3` bytes of `0xff`, at least [MIN_PADDING_LEN] of them.

use std::fmt;

use subtle::ConstantTimeEq;

use crate::{
    digest::{DigestInfo, HashAlgorithm},
    error::EmsaError,
    utils::{from_prefixed_hex, to_prefixed_hex},
};

/// Minimum number of `0xff` padding bytes.
pub const MIN_PADDING_LEN: usize = 8;

/// Longest encoded message accepted, that of a 16384-bit modulus.
pub const MAX_EM_LEN: usize = 2048;

/// Header, separator and minimum padding.
const FIXED_OVERHEAD: usize = 3 + MIN_PADDING_LEN;

/// The byte length of an encoded message for a modulus of `bits` bits.
pub const fn em_len_for_bits(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// The shortest `emLen` that can carry a digest of `hash`.
pub const fn min_em_len(hash: HashAlgorithm) -> usize {
    hash.der_prefix().len() + hash.output_len() + FIXED_OVERHEAD
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedMessage(Vec<u8>);

impl EncodedMessage {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `0x`-prefixed lowercase hex.
    pub fn to_hex(&self) -> String {
        to_prefixed_hex(&self.0)
    }

    /// Reads hex with or without the `0x` prefix. No structural check is made; see [parse].
    pub fn from_hex(s: &str) -> Result<Self, EmsaError> {
        Ok(Self(from_prefixed_hex(s)?))
    }
}

impl AsRef<[u8]> for EncodedMessage {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for EncodedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Encodes `info` into a buffer of exactly `em_len` bytes.
pub fn encode(info: &DigestInfo, em_len: usize) -> Result<EncodedMessage, EmsaError> {
    let t_len = info.encoded_len();
    let required = t_len + FIXED_OVERHEAD;
    if em_len < required {
        return Err(EmsaError::IntendedLengthTooShort { required, em_len });
    }
    if em_len > MAX_EM_LEN {
        return Err(EmsaError::IntendedLengthTooLong {
            max: MAX_EM_LEN,
            em_len,
        });
    }

    let ps_len = em_len - t_len - 3;
    tracing::debug!(
        "encoding {} digest: em_len={}, t_len={}, ps_len={}",
        info.algorithm(),
        em_len,
        t_len,
        ps_len
    );

    let mut em = Vec::with_capacity(em_len);
    em.extend_from_slice(&[0x00, 0x01]);
    em.resize(2 + ps_len, 0xff);
    em.push(0x00);
    em.extend_from_slice(&info.to_der());
    debug_assert_eq!(em.len(), em_len);

    Ok(EncodedMessage(em))
}

/// Hashes `msg` with `hash` and encodes the digest.
pub fn encode_message(
    hash: HashAlgorithm,
    msg: &[u8],
    em_len: usize,
) -> Result<EncodedMessage, EmsaError> {
    encode(&hash.digest_info(msg), em_len)
}

/// Checks that `em` is the encoding of `msg` under `hash`.
///
/// The expected encoding is recomputed at `em.len()` and compared in constant time, as
/// RSASSA-PKCS1-v1_5 verification does.
pub fn verify(hash: HashAlgorithm, msg: &[u8], em: &[u8]) -> Result<(), EmsaError> {
    let expected = encode_message(hash, msg, em.len())?;
    if bool::from(expected.as_bytes().ct_eq(em)) {
        Ok(())
    } else {
        Err(EmsaError::Inconsistent)
    }
}

/// The fields of a structurally valid encoded message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    pub algorithm: HashAlgorithm,
    pub digest: Vec<u8>,
    pub padding_len: usize,
}

/// Splits an encoded message back into algorithm, digest and padding length.
pub fn parse(em: &[u8]) -> Result<ParsedMessage, EmsaError> {
    let body = match em {
        [0x00, 0x01, body @ ..] => body,
        _ => return Err(EmsaError::Malformed("missing 0x00 0x01 header")),
    };

    let padding_len = body.iter().take_while(|&&b| b == 0xff).count();
    if padding_len < MIN_PADDING_LEN {
        return Err(EmsaError::Malformed("padding shorter than 8 bytes"));
    }

    let t = match &body[padding_len..] {
        [0x00, t @ ..] => t,
        _ => return Err(EmsaError::Malformed("missing 0x00 separator")),
    };

    let algorithm = HashAlgorithm::from_der_prefix(t).ok_or(EmsaError::UnknownAlgorithm)?;
    let digest = &t[algorithm.der_prefix().len()..];
    if digest.len() != algorithm.output_len() {
        return Err(EmsaError::Malformed("digest length does not match algorithm"));
    }

    Ok(ParsedMessage {
        algorithm,
        digest: digest.to_vec(),
        padding_len,
    })
}
