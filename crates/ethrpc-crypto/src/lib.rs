//! # ethrpc-crypto
//!
//! Cryptographic helpers for the Ethereum JSON-RPC schema.
//!
//! - Keccak-256 hashing
//! - EIP-55 checksum casing of addresses
//! - Checksum verification of user-supplied address strings

#![warn(missing_docs)]
#![warn(clippy::all)]

mod checksum;
mod error;
mod hash;

pub use checksum::{has_mixed_case, to_checksum, verify_checksum};
pub use error::CryptoError;
pub use hash::keccak256;
