use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use crate::{
    digest::HashAlgorithm,
    emsa::{em_len_for_bits, encode, parse, verify},
    error::EmsaError,
    utils::{bytes_to_limbs_le, from_prefixed_hex, limbs_to_bytes_be, to_prefixed_hex},
    FIXTURE_MESSAGE, FIXTURE_MODULUS_BITS,
};

/// A known-answer vector for an RSASSA-PKCS1-v1_5 verifier.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestVector {
    pub message: String,
    #[serde_as(as = "DisplayFromStr")]
    pub hash: HashAlgorithm,
    pub modulus_bits: usize,
    /// `0x`-prefixed digest of `message`.
    pub digest: String,
    /// `0x`-prefixed EMSA-PKCS1-v1_5 encoding of `digest`.
    pub encoded: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limb_bits: Option<usize>,
    /// Little-endian limbs of `encoded`, as decimal strings.
    #[serde_as(as = "Option<Vec<DisplayFromStr>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limbs: Option<Vec<BigUint>>,
}

impl TestVector {
    pub fn generate(
        message: &str,
        hash: HashAlgorithm,
        modulus_bits: usize,
        limb_bits: Option<usize>,
    ) -> Result<Self, EmsaError> {
        let _span = tracing::info_span!("generate vector", %hash, modulus_bits).entered();

        let info = hash.digest_info(message.as_bytes());
        let em = encode(&info, em_len_for_bits(modulus_bits))?;
        let limbs = limb_bits
            .map(|bits| bytes_to_limbs_le(em.as_bytes(), bits))
            .transpose()?;
        tracing::info!("encoded {} bytes", em.len());

        Ok(Self {
            message: message.to_string(),
            hash,
            modulus_bits,
            digest: to_prefixed_hex(info.digest()),
            encoded: em.to_hex(),
            limb_bits,
            limbs,
        })
    }

    /// The SHA-512 vector of [FIXTURE_MESSAGE] at [FIXTURE_MODULUS_BITS]. The modulus is too
    /// small for SHA-512, so this always reports the length error.
    pub fn fixture() -> Result<Self, EmsaError> {
        Self::generate(
            FIXTURE_MESSAGE,
            HashAlgorithm::Sha512,
            FIXTURE_MODULUS_BITS,
            None,
        )
    }

    /// Checks a vector read from elsewhere: the encoding must verify against `message`, carry
    /// `digest`, match `modulus_bits`, and recombine from `limbs` when those are present.
    pub fn validate(&self) -> Result<(), EmsaError> {
        let em = from_prefixed_hex(&self.encoded)?;
        if em.len() != em_len_for_bits(self.modulus_bits) {
            return Err(EmsaError::Malformed("encoding length does not match modulus size"));
        }
        verify(self.hash, self.message.as_bytes(), &em)?;

        let parsed = parse(&em)?;
        if parsed.algorithm != self.hash || parsed.digest != from_prefixed_hex(&self.digest)? {
            return Err(EmsaError::Inconsistent);
        }

        match (&self.limbs, self.limb_bits) {
            (Some(limbs), Some(limb_bits)) => {
                if limbs_to_bytes_be(limbs, limb_bits, em.len())? != em {
                    return Err(EmsaError::Inconsistent);
                }
            }
            (None, _) => {}
            (Some(_), None) => return Err(EmsaError::Malformed("limbs without a limb width")),
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
