//! Errors returned by RPC providers

use std::fmt;

use bytes::Bytes;
use ethrpc_primitives::hex_data;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::convert::{expect_object, optional, put, put_optional, required};
use crate::{CodecOptions, Structure, Unstructure, ValidationError};

/// Well-known error codes (JSON-RPC 2.0 and EIP-1474)
pub mod error_code {
    /// Invalid JSON was received
    pub const PARSE_ERROR: i64 = -32700;
    /// The JSON is not a valid request object
    pub const INVALID_REQUEST: i64 = -32600;
    /// Method does not exist or is not available
    pub const METHOD_NOT_FOUND: i64 = -32601;
    /// Invalid method parameters
    pub const INVALID_PARAMS: i64 = -32602;
    /// Internal JSON-RPC error
    pub const INTERNAL_ERROR: i64 = -32603;

    /// Requested resource not found
    pub const RESOURCE_NOT_FOUND: i64 = -32001;
    /// Requested resource not available
    pub const RESOURCE_UNAVAILABLE: i64 = -32002;
    /// Transaction creation failed
    pub const TRANSACTION_REJECTED: i64 = -32003;
    /// Method is not implemented
    pub const METHOD_NOT_SUPPORTED: i64 = -32004;
    /// Request exceeds a defined limit
    pub const LIMIT_EXCEEDED: i64 = -32005;

    /// Contract execution failed (revert)
    pub const EXECUTION_ERROR: i64 = 3;

    /// Implementation-defined server errors
    pub const SERVER_ERROR_RANGE: std::ops::RangeInclusive<i64> = -32099..=-32000;
    /// Codes reserved by the JSON-RPC protocol
    pub const RESERVED_RANGE: std::ops::RangeInclusive<i64> = -32768..=-32000;
}

/// Raw numeric error code
///
/// Unlike every other integer in the protocol this one travels as a plain
/// JSON number, never as hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorCode(pub i64);

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ErrorCode {
    fn from(code: i64) -> Self {
        ErrorCode(code)
    }
}

impl From<RpcErrorCode> for ErrorCode {
    fn from(code: RpcErrorCode) -> Self {
        ErrorCode(code.code())
    }
}

impl<S> Structure<S> for ErrorCode {
    fn structure(_options: &CodecOptions, value: &Value) -> Result<Self, ValidationError> {
        value
            .as_i64()
            .map(ErrorCode)
            .ok_or_else(|| ValidationError::unexpected_type("integer", value))
    }
}

impl Unstructure for ErrorCode {
    fn unstructure(&self, _options: &CodecOptions) -> Value {
        Value::from(self.0)
    }
}

/// Classification of an [`ErrorCode`]
///
/// Every code falls in exactly one bucket; the open-ended buckets keep the
/// original number so [`RpcErrorCode::code`] is lossless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcErrorCode {
    /// -32700
    ParseError,
    /// -32600
    InvalidRequest,
    /// -32601
    MethodNotFound,
    /// -32602
    InvalidParams,
    /// -32603
    InternalError,
    /// -32001
    ResourceNotFound,
    /// -32002
    ResourceUnavailable,
    /// -32003
    TransactionRejected,
    /// -32004
    MethodNotSupported,
    /// -32005
    LimitExceeded,
    /// Other codes in -32099..=-32000
    ServerError(i64),
    /// Other codes in the reserved range -32768..=-32000
    ReservedError(i64),
    /// 3, contract execution failed
    ExecutionError,
    /// Anything else
    Application(i64),
}

impl RpcErrorCode {
    /// Bucket for a raw code
    pub fn classify(code: i64) -> Self {
        use error_code::*;
        match code {
            PARSE_ERROR => RpcErrorCode::ParseError,
            INVALID_REQUEST => RpcErrorCode::InvalidRequest,
            METHOD_NOT_FOUND => RpcErrorCode::MethodNotFound,
            INVALID_PARAMS => RpcErrorCode::InvalidParams,
            INTERNAL_ERROR => RpcErrorCode::InternalError,
            RESOURCE_NOT_FOUND => RpcErrorCode::ResourceNotFound,
            RESOURCE_UNAVAILABLE => RpcErrorCode::ResourceUnavailable,
            TRANSACTION_REJECTED => RpcErrorCode::TransactionRejected,
            METHOD_NOT_SUPPORTED => RpcErrorCode::MethodNotSupported,
            LIMIT_EXCEEDED => RpcErrorCode::LimitExceeded,
            EXECUTION_ERROR => RpcErrorCode::ExecutionError,
            c if SERVER_ERROR_RANGE.contains(&c) => RpcErrorCode::ServerError(c),
            c if RESERVED_RANGE.contains(&c) => RpcErrorCode::ReservedError(c),
            c => RpcErrorCode::Application(c),
        }
    }

    /// Numeric code
    pub fn code(&self) -> i64 {
        use error_code::*;
        match self {
            RpcErrorCode::ParseError => PARSE_ERROR,
            RpcErrorCode::InvalidRequest => INVALID_REQUEST,
            RpcErrorCode::MethodNotFound => METHOD_NOT_FOUND,
            RpcErrorCode::InvalidParams => INVALID_PARAMS,
            RpcErrorCode::InternalError => INTERNAL_ERROR,
            RpcErrorCode::ResourceNotFound => RESOURCE_NOT_FOUND,
            RpcErrorCode::ResourceUnavailable => RESOURCE_UNAVAILABLE,
            RpcErrorCode::TransactionRejected => TRANSACTION_REJECTED,
            RpcErrorCode::MethodNotSupported => METHOD_NOT_SUPPORTED,
            RpcErrorCode::LimitExceeded => LIMIT_EXCEEDED,
            RpcErrorCode::ExecutionError => EXECUTION_ERROR,
            RpcErrorCode::ServerError(c)
            | RpcErrorCode::ReservedError(c)
            | RpcErrorCode::Application(c) => *c,
        }
    }
}

impl From<ErrorCode> for RpcErrorCode {
    fn from(code: ErrorCode) -> Self {
        RpcErrorCode::classify(code.0)
    }
}

/// Extra error payload: hex bytes (e.g. revert data) or arbitrary JSON
///
/// A hex string is always held as bytes and `null` is never held at all, so
/// every payload reads back exactly as it was written.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorData(Payload);

#[derive(Debug, Clone, PartialEq)]
enum Payload {
    Bytes(Bytes),
    Json(Value),
}

impl ErrorData {
    /// Byte payload
    pub fn bytes(bytes: impl Into<Bytes>) -> Self {
        ErrorData(Payload::Bytes(bytes.into()))
    }

    /// Payload from a JSON value
    ///
    /// A `0x`-prefixed hex string becomes a byte payload; `null` is no
    /// payload and yields `None`.
    pub fn json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => match hex_data::decode(&s) {
                Ok(bytes) => Some(ErrorData::bytes(bytes)),
                Err(_) => Some(ErrorData(Payload::Json(Value::String(s)))),
            },
            other => Some(ErrorData(Payload::Json(other))),
        }
    }

    /// Bytes, if the payload is hex data
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match &self.0 {
            Payload::Bytes(bytes) => Some(bytes),
            Payload::Json(_) => None,
        }
    }

    /// JSON value, if the payload is not hex data
    pub fn as_json(&self) -> Option<&Value> {
        match &self.0 {
            Payload::Bytes(_) => None,
            Payload::Json(value) => Some(value),
        }
    }
}

impl fmt::Display for ErrorData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Payload::Bytes(bytes) => f.write_str(&hex_data::encode(bytes)),
            Payload::Json(value) => write!(f, "{}", value),
        }
    }
}

impl<S> Structure<S> for ErrorData {
    fn structure(_options: &CodecOptions, value: &Value) -> Result<Self, ValidationError> {
        ErrorData::json(value.clone())
            .ok_or_else(|| ValidationError::unexpected_type("non-null value", value))
    }
}

impl Unstructure for ErrorData {
    fn unstructure(&self, options: &CodecOptions) -> Value {
        match &self.0 {
            Payload::Bytes(bytes) => bytes.unstructure(options),
            Payload::Json(value) => value.clone(),
        }
    }
}

fn describe_data(data: &Option<ErrorData>) -> String {
    match data {
        Some(data) => format!(" ({})", data),
        None => String::new(),
    }
}

/// An error returned in the `error` member of a JSON-RPC response
#[derive(Debug, Clone, PartialEq, Error)]
#[error("RPC error {code}: {message}{}", describe_data(.data))]
pub struct RpcError {
    /// Numeric code as received
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Extra payload
    pub data: Option<ErrorData>,
}

impl RpcError {
    /// Error with a raw code and no data
    pub fn new(code: impl Into<ErrorCode>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }

    /// Error with a classified code
    pub fn with_code(
        code: RpcErrorCode,
        message: impl Into<String>,
        data: Option<ErrorData>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data,
        }
    }

    /// Attach a payload
    pub fn with_data(mut self, data: ErrorData) -> Self {
        self.data = Some(data);
        self
    }

    /// Bucket of the numeric code
    pub fn parsed_code(&self) -> RpcErrorCode {
        self.code.into()
    }

    /// Revert data, if the payload is hex bytes
    pub fn revert_data(&self) -> Option<&Bytes> {
        self.data.as_ref().and_then(ErrorData::as_bytes)
    }
}

impl<S> Structure<S> for RpcError {
    fn structure(options: &CodecOptions, value: &Value) -> Result<Self, ValidationError> {
        let object = expect_object(value)?;
        Ok(RpcError {
            code: required::<S, _>(options, object, "code")?,
            message: required::<S, _>(options, object, "message")?,
            data: optional::<S, _>(options, object, "data")?,
        })
    }
}

impl Unstructure for RpcError {
    fn unstructure(&self, options: &CodecOptions) -> Value {
        let mut object = Map::new();
        put(&mut object, options, "code", &self.code);
        put(&mut object, options, "message", &self.message);
        put_optional(&mut object, options, "data", &self.data);
        Value::Object(object)
    }
}
