//! Cryptographic errors

use ethrpc_primitives::PrimitiveError;
use thiserror::Error;

/// Cryptographic operation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// The input is not a well-formed address
    #[error("invalid address: {0}")]
    InvalidAddress(#[from] PrimitiveError),

    /// The letter casing does not match the EIP-55 checksum
    #[error("checksum mismatch: expected {expected}, got {got}")]
    ChecksumMismatch {
        /// Correctly checksummed form
        expected: String,
        /// Input as given
        got: String,
    },
}
