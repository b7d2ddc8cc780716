mod logger;
mod options;

pub use logger::*;
use num_bigint::BigUint;
pub use options::*;

use crate::error::EmsaError;

/// Widest limb accepted by [bytes_to_limbs_le].
pub const MAX_LIMB_BITS: usize = 256;

/// Lowercase hex with a `0x` prefix.
pub fn to_prefixed_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decodes hex, with or without a `0x` prefix.
pub fn from_prefixed_hex(s: &str) -> Result<Vec<u8>, EmsaError> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    Ok(hex::decode(digits)?)
}

fn check_limb_bits(limb_bits: usize) -> Result<(), EmsaError> {
    if limb_bits == 0 || limb_bits > MAX_LIMB_BITS {
        return Err(EmsaError::InvalidLimbWidth {
            got: limb_bits,
            max: MAX_LIMB_BITS,
        });
    }
    Ok(())
}

/// Splits the big-endian integer `bytes` into little-endian limbs of `limb_bits` bits.
///
/// The number of limbs is `ceil(8 * bytes.len() / limb_bits)`, so leading zero bytes still
/// occupy limbs.
pub fn bytes_to_limbs_le(bytes: &[u8], limb_bits: usize) -> Result<Vec<BigUint>, EmsaError> {
    check_limb_bits(limb_bits)?;
    let nb_limbs = (bytes.len() * 8).div_ceil(limb_bits);
    let mask = (BigUint::from(1u32) << limb_bits) - 1u32;
    let mut x = BigUint::from_bytes_be(bytes);
    let limbs = (0..nb_limbs)
        .map(|_| {
            let limb = &x & &mask;
            x >>= limb_bits;
            limb
        })
        .collect();
    Ok(limbs)
}

/// Inverse of [bytes_to_limbs_le]: recombines limbs into `len` big-endian bytes.
pub fn limbs_to_bytes_be(
    limbs: &[BigUint],
    limb_bits: usize,
    len: usize,
) -> Result<Vec<u8>, EmsaError> {
    check_limb_bits(limb_bits)?;
    let mut x = BigUint::default();
    for (i, limb) in limbs.iter().enumerate() {
        if limb.bits() > limb_bits as u64 {
            return Err(EmsaError::Malformed("limb exceeds limb width"));
        }
        x |= limb << (i * limb_bits);
    }

    let bytes = if x.bits() == 0 { vec![] } else { x.to_bytes_be() };
    if bytes.len() > len {
        return Err(EmsaError::Malformed("limbs exceed target length"));
    }
    let mut padded = vec![0u8; len - bytes.len()];
    padded.extend_from_slice(&bytes);
    Ok(padded)
}
