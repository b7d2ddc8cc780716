use std::env;

use crate::{digest::HashAlgorithm, FIXTURE_MODULUS_BITS};

const DEFAULT_HASH: HashAlgorithm = HashAlgorithm::Sha512;

/// Defaults for vector generation, overridable through the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorOpts {
    pub modulus_bits: usize,
    pub hash: HashAlgorithm,
    pub limb_bits: Option<usize>,
}

impl Default for VectorOpts {
    fn default() -> Self {
        Self {
            modulus_bits: env::var("RSA_VECTORS_MODULUS_BITS").map_or_else(
                |_| FIXTURE_MODULUS_BITS,
                |s| s.parse::<usize>().unwrap_or(FIXTURE_MODULUS_BITS),
            ),
            hash: env::var("RSA_VECTORS_HASH").map_or_else(
                |_| DEFAULT_HASH,
                |s| s.parse::<HashAlgorithm>().unwrap_or(DEFAULT_HASH),
            ),
            limb_bits: env::var("RSA_VECTORS_LIMB_BITS")
                .ok()
                .and_then(|s| s.parse::<usize>().ok()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    const VARS: [&str; 3] = [
        "RSA_VECTORS_MODULUS_BITS",
        "RSA_VECTORS_HASH",
        "RSA_VECTORS_LIMB_BITS",
    ];

    fn clear() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear();
        let opts = VectorOpts::default();
        assert_eq!(opts.modulus_bits, FIXTURE_MODULUS_BITS);
        assert_eq!(opts.hash, HashAlgorithm::Sha512);
        assert_eq!(opts.limb_bits, None);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear();
        env::set_var("RSA_VECTORS_MODULUS_BITS", "2048");
        env::set_var("RSA_VECTORS_HASH", "sha256");
        env::set_var("RSA_VECTORS_LIMB_BITS", "121");
        let opts = VectorOpts::default();
        clear();
        assert_eq!(opts.modulus_bits, 2048);
        assert_eq!(opts.hash, HashAlgorithm::Sha256);
        assert_eq!(opts.limb_bits, Some(121));
    }

    #[test]
    #[serial]
    fn test_unparsable_env_falls_back() {
        clear();
        env::set_var("RSA_VECTORS_MODULUS_BITS", "many");
        env::set_var("RSA_VECTORS_HASH", "md5");
        let opts = VectorOpts::default();
        clear();
        assert_eq!(opts.modulus_bits, FIXTURE_MODULUS_BITS);
        assert_eq!(opts.hash, HashAlgorithm::Sha512);
    }
}
