//! # ethrpc-schema
//!
//! Typed schema and wire codec for Ethereum JSON-RPC payloads.
//!
//! JSON values are *structured* into typed records and *unstructured* back
//! into their canonical wire form: minimal hex quantities, lower-case hex
//! data, checksum-cased addresses. Every structuring failure is a
//! [`ValidationError`] that says where in the input it happened.
//!
//! ## Usage
//!
//! ```ignore
//! use ethrpc_schema::{Codec, TxReceipt};
//!
//! let codec = Codec::new();
//! let receipt: TxReceipt = codec.structure(&json)?;
//! if receipt.succeeded() {
//!     println!("{} logs", receipt.logs.len());
//! }
//! let wire = codec.unstructure(&receipt);
//! ```
//!
//! ## Substitution
//!
//! Address and amount fields can be decoded into consumer-defined types
//! registered on a codec:
//!
//! ```ignore
//! ethrpc_schema::substitute!(MyAddress => Address);
//!
//! let codec = Codec::builder().address::<MyAddress>().build();
//! let receipt: TxReceipt<_> = codec.structure(&json)?;
//! // receipt.from is a MyAddress
//! ```
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`block`] | Block labels and block identifiers |
//! | [`params`] | Request parameter records |
//! | [`responses`] | Transaction, log, receipt and block records |
//! | [`rpc_error`] | Provider errors and their classification |
//! | [`envelope`] | JSON-RPC request/response envelopes |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod block;
mod codec;
mod convert;
pub mod envelope;
mod error;
pub mod params;
pub mod responses;
pub mod rpc_error;
mod schema;

pub use block::{Block, BlockLabel};
pub use codec::{structure, unstructure, Codec, CodecBuilder, CodecOptions};
pub use convert::{Structure, Unstructure};
pub use envelope::{JsonRpcId, JsonRpcRequest, JsonRpcResponse};
pub use error::{Alternative, PathSegment, Reason, ValidationError, ValidationResult};
pub use params::{
    EstimateGasParams, EthCallParams, FilterParams, FilterParamsEIP234, OneOrMany, TopicFilter,
    Type2Transaction,
};
pub use responses::{BlockInfo, BlockTransactions, LogEntry, TxInfo, TxReceipt};
pub use rpc_error::{ErrorCode, ErrorData, RpcError, RpcErrorCode};
pub use schema::{Primitives, Schema, Standard, Substitute};

pub use bytes::Bytes;
pub use ethrpc_crypto::{keccak256, to_checksum};
pub use ethrpc_primitives::{
    Address, Amount, BlockHash, BlockNonce, FixedBytes, LogTopic, LogsBloom, PrimitiveError,
    TrieHash, TxHash, UnclesHash, U256,
};
pub use serde_json::Value;
