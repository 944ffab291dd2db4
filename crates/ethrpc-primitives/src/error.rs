//! Common error types for primitives

use thiserror::Error;

/// Primitive parsing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitiveError {
    /// The string does not start with `0x`
    #[error("missing 0x prefix")]
    MissingPrefix,

    /// Invalid hex digits (or an odd number of them for byte data)
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    /// Byte length does not match the fixed width of the type
    #[error("invalid length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Expected number of bytes
        expected: usize,
        /// Actual number of bytes
        got: usize,
    },

    /// A quantity with no digits after the prefix
    #[error("empty quantity")]
    EmptyQuantity,

    /// A quantity with a superfluous leading zero nibble
    #[error("non-minimal quantity encoding: {0}")]
    NonMinimal(String),

    /// A quantity that does not fit the target integer width
    #[error("quantity does not fit in {bits} bits")]
    Overflow {
        /// Width of the target integer
        bits: u32,
    },
}
