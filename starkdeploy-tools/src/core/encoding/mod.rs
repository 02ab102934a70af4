// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Encoding of constructor values into Starknet calldata.

pub use byte_array::{ByteArray, BYTES_PER_WORD};
pub use felt::{FieldElement, FIELD_PRIME};
pub use u256::{parse_u256, split, split_decimal};

pub mod byte_array;
pub mod felt;
pub mod u256;

#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("invalid hex field element: {0:?}")]
    InvalidHex(String),
    #[error("invalid decimal integer: {0:?}")]
    InvalidDecimal(String),
    #[error("value out of range: {0}")]
    Overflow(String),
    #[error("negative value for unsigned integer: {0:?}")]
    NegativeValue(String),
    #[error("byte array word of {0} bytes exceeds 31 bytes")]
    WordOverflow(usize),
    #[error("malformed byte array: {0}")]
    MalformedByteArray(String),
    #[error("expected a string, found integer {0}")]
    ExpectedString(i64),

    #[error("missing constructor argument `{0}`")]
    MissingField(String),
    #[error("unknown constructor argument `{0}`")]
    UnknownField(String),
    #[error("unsupported constructor parameter type `{0}`")]
    UnsupportedType(String),
    #[error("constructor interface mismatch: expected {expected}, spec hashes to {actual}")]
    InterfaceMismatch { expected: String, actual: String },
    #[error("constructor spec does not match contract ABI at position {position}: {reason}")]
    AbiMismatch { position: usize, reason: String },

    #[error("invalid constructor argument `{param}`: {source}")]
    Param {
        param: String,
        #[source]
        source: Box<EncodingError>,
    },
}

impl EncodingError {
    /// Attaches the name of the parameter being encoded.
    pub fn in_param(self, param: impl Into<String>) -> Self {
        Self::Param {
            param: param.into(),
            source: Box::new(self),
        }
    }
}
