//! # ethrpc-primitives
//!
//! Primitive types for the Ethereum JSON-RPC schema.
//!
//! This crate provides the leaf values that appear on the wire: fixed-width
//! byte strings (addresses, hashes, nonces, bloom filters) and the
//! arbitrary-width integer quantities (amounts, block numbers, gas).
//! Everything here parses strictly from the `0x`-prefixed wire form and
//! formats back to the canonical lower-case form.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod amount;
mod error;
mod fixed;
mod hash;
pub mod hex_data;
pub mod quantity;

pub use address::Address;
pub use amount::Amount;
pub use error::PrimitiveError;
pub use fixed::FixedBytes;
pub use hash::{BlockHash, BlockNonce, LogTopic, LogsBloom, TrieHash, TxHash, UnclesHash};

// Re-export primitive-types for U256
pub use primitive_types::U256;
