//! Known-answer vectors for EMSA-PKCS1-v1_5 (RFC 8017, section 9.2) over the SHA-2 family.

pub mod digest;
pub mod emsa;
pub mod error;
pub mod utils;
pub mod vector;

pub use digest::{DigestInfo, HashAlgorithm};
pub use emsa::{encode, encode_message, parse, verify, EncodedMessage, ParsedMessage};
pub use error::EmsaError;
pub use vector::TestVector;

/// The message the circuit verifier's test vector is built from.
pub const FIXTURE_MESSAGE: &str = "E PLURIBUS UNUM; DO NOT SHARE";

/// The circuit fixture's modulus size, 84 bytes. That is below the 94 bytes a SHA-512
/// encoding needs, so encoding the fixture fails with
/// [EmsaError::IntendedLengthTooShort]; pass a larger modulus to get a usable vector.
pub const FIXTURE_MODULUS_BITS: usize = 672;
