use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmsaError {
    #[error("intended encoded message length too short: need at least {required} bytes, got {em_len}")]
    IntendedLengthTooShort { required: usize, em_len: usize },
    #[error("intended encoded message length too long: at most {max} bytes, got {em_len}")]
    IntendedLengthTooLong { max: usize, em_len: usize },
    #[error("malformed encoded message: {0}")]
    Malformed(&'static str),
    #[error("unrecognized digest algorithm identifier")]
    UnknownAlgorithm,
    #[error("encoded message is inconsistent with the message digest")]
    Inconsistent,
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("limb width must be between 1 and {max} bits, got {got}")]
    InvalidLimbWidth { got: usize, max: usize },
}
