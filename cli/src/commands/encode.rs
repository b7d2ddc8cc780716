use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rsa_vectors_core::{utils::VectorOpts, HashAlgorithm, TestVector, FIXTURE_MESSAGE};

const DEFAULT_LIMB_BITS: usize = 64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A single `0x`-prefixed line.
    #[default]
    Hex,
    /// The full test vector as JSON.
    Json,
    /// One decimal limb per line, least significant first.
    Limbs,
}

#[derive(Args, Debug, Default)]
pub struct EncodeCmd {
    #[clap(long, default_value = FIXTURE_MESSAGE)]
    pub message: String,

    #[clap(long, help = "Hash algorithm [default: sha512]")]
    pub hash: Option<HashAlgorithm>,

    #[clap(long, help = "Modulus size in bits [default: 672, too small for a SHA-512 encoding]")]
    pub bits: Option<usize>,

    #[clap(long, value_enum, default_value_t = OutputFormat::Hex)]
    pub format: OutputFormat,

    #[clap(long, help = "Limb width in bits, for json and limbs output")]
    pub limb_bits: Option<usize>,
}

impl EncodeCmd {
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let opts = VectorOpts::default();
        let hash = self.hash.unwrap_or(opts.hash);
        let bits = self.bits.unwrap_or(opts.modulus_bits);
        let limb_bits = match self.format {
            OutputFormat::Limbs => Some(
                self.limb_bits
                    .or(opts.limb_bits)
                    .unwrap_or(DEFAULT_LIMB_BITS),
            ),
            OutputFormat::Json => self.limb_bits.or(opts.limb_bits),
            OutputFormat::Hex => None,
        };

        let vector = TestVector::generate(&self.message, hash, bits, limb_bits)
            .with_context(|| format!("failed to encode {hash} digest for a {bits}-bit modulus"))?;

        match self.format {
            OutputFormat::Hex => writeln!(out, "{}", vector.encoded)?,
            OutputFormat::Json => writeln!(out, "{}", vector.to_json()?)?,
            OutputFormat::Limbs => {
                for limb in vector.limbs.iter().flatten() {
                    writeln!(out, "{limb}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rsa_vectors_core::EmsaError;

    use super::*;

    fn run(cmd: EncodeCmd) -> Result<String> {
        let mut out = Vec::new();
        cmd.run(&mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn cmd() -> EncodeCmd {
        EncodeCmd {
            message: FIXTURE_MESSAGE.to_string(),
            hash: Some(HashAlgorithm::Sha512),
            bits: Some(1024),
            ..Default::default()
        }
    }

    #[test]
    fn test_encode_hex() {
        let out = run(cmd()).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert_eq!(out, "0x0001ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff003051300d060960864801650304020305000440cfaf7c7a4b15e3b47bc307d99216ec1a26283b23eac2c90b133d7ba862182d0ced5e56af69c2ba093801b94322175272b64827df7305563f7cea401006f207a7\n");
    }

    #[test]
    fn test_json_rejects_zero_limb_width() {
        let err = run(EncodeCmd {
            format: OutputFormat::Json,
            limb_bits: Some(0),
            ..cmd()
        })
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EmsaError>(),
            Some(EmsaError::InvalidLimbWidth { got: 0, .. })
        ));
    }

    #[test]
    fn test_encode_too_short() {
        let err = run(EncodeCmd {
            bits: Some(672),
            ..cmd()
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("need at least 94 bytes, got 84"));
    }

    #[test]
    fn test_hex_ignores_limb_width() {
        let out = run(EncodeCmd {
            limb_bits: Some(0),
            ..cmd()
        })
        .unwrap();
        assert!(out.starts_with("0x0001ff"));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_encode_rejects_huge_modulus() {
        let err = run(EncodeCmd {
            bits: Some(usize::MAX),
            ..cmd()
        })
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EmsaError>(),
            Some(EmsaError::IntendedLengthTooLong { max: 2048, .. })
        ));
    }

    #[test]
    fn test_encode_limbs() {
        let out = run(EncodeCmd {
            format: OutputFormat::Limbs,
            limb_bits: Some(64),
            ..cmd()
        })
        .unwrap();
        let limbs = out.lines().collect::<Vec<_>>();
        assert_eq!(limbs.len(), 16);
        assert_eq!(limbs[0], "9001077242833536935");
    }

    #[test]
    fn test_encode_json() {
        let out = run(EncodeCmd {
            format: OutputFormat::Json,
            hash: Some(HashAlgorithm::Sha256),
            ..cmd()
        })
        .unwrap();
        assert!(out.contains("\"hash\": \"sha256\""));
        assert!(out.contains("\"modulus_bits\": 1024"));
    }
}
