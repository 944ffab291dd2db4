//! JSON-RPC 2.0 request and response envelopes
//!
//! Only the shaping of single requests and responses lives here; sending
//! them is up to the caller's transport.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::convert::{expect_object, put, required};
use crate::error::Reason;
use crate::rpc_error::RpcError;
use crate::schema::Schema;
use crate::{Codec, CodecOptions, Structure, Unstructure, ValidationError};

/// Protocol version carried by every envelope
pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC request ID (can be number, string, or null)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(untagged)]
pub enum JsonRpcId {
    /// Numeric ID, kept exactly as sent
    Number(Number),
    /// String ID
    String(String),
    /// Null ID
    #[default]
    Null,
}

impl From<u64> for JsonRpcId {
    fn from(id: u64) -> Self {
        JsonRpcId::Number(id.into())
    }
}

impl From<i64> for JsonRpcId {
    fn from(id: i64) -> Self {
        JsonRpcId::Number(id.into())
    }
}

impl From<&str> for JsonRpcId {
    fn from(id: &str) -> Self {
        JsonRpcId::String(id.to_string())
    }
}

impl<S> Structure<S> for JsonRpcId {
    fn structure(_options: &CodecOptions, value: &Value) -> Result<Self, ValidationError> {
        JsonRpcId::deserialize(value)
            .map_err(|_| ValidationError::unexpected_type("number, string or null", value))
    }
}

impl Unstructure for JsonRpcId {
    fn unstructure(&self, _options: &CodecOptions) -> Value {
        match self {
            JsonRpcId::Number(n) => Value::Number(n.clone()),
            JsonRpcId::String(s) => Value::String(s.clone()),
            JsonRpcId::Null => Value::Null,
        }
    }
}

/// JSON-RPC 2.0 request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC version (must be "2.0")
    pub jsonrpc: String,
    /// Request ID
    #[serde(default)]
    pub id: JsonRpcId,
    /// Method name
    pub method: String,
    /// Method parameters
    #[serde(default)]
    pub params: Vec<Value>,
}

impl JsonRpcRequest {
    /// Request with no parameters
    pub fn new(id: impl Into<JsonRpcId>, method: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.into(),
            method: method.into(),
            params: Vec::new(),
        }
    }

    /// Append a positional parameter, unstructured with `codec`
    pub fn param<S: Schema, T: Unstructure + ?Sized>(mut self, codec: &Codec<S>, value: &T) -> Self {
        self.params.push(codec.unstructure(value));
        self
    }
}

/// JSON-RPC 2.0 response
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRpcResponse {
    /// Request ID
    pub id: JsonRpcId,
    /// `result` on success, `error` on failure
    pub outcome: Result<Value, RpcError>,
}

impl JsonRpcResponse {
    /// Create success response
    pub fn success(id: JsonRpcId, result: Value) -> Self {
        Self {
            id,
            outcome: Ok(result),
        }
    }

    /// Create error response
    pub fn error(id: JsonRpcId, error: RpcError) -> Self {
        Self {
            id,
            outcome: Err(error),
        }
    }

    /// Raw result or the provider's error
    pub fn into_result(self) -> Result<Value, RpcError> {
        self.outcome
    }

    /// Structure the result into `T`
    ///
    /// The outer error is a malformed result; the inner one is an error
    /// reported by the provider.
    pub fn decode<S: Schema, T: Structure<S>>(
        &self,
        codec: &Codec<S>,
    ) -> Result<Result<T, RpcError>, ValidationError> {
        match &self.outcome {
            Ok(result) => codec
                .structure(result)
                .map(Ok)
                .map_err(|e| e.at_field("result")),
            Err(error) => Ok(Err(error.clone())),
        }
    }
}

impl<S> Structure<S> for JsonRpcResponse {
    fn structure(options: &CodecOptions, value: &Value) -> Result<Self, ValidationError> {
        let object = expect_object(value)?;

        let version: String = required::<S, _>(options, object, "jsonrpc")?;
        if version != JSONRPC_VERSION {
            return Err(ValidationError::new(Reason::UnknownVariant {
                value: version,
                expected: &[JSONRPC_VERSION],
            })
            .at_field("jsonrpc"));
        }

        let id = match object.get("id") {
            Some(id) => {
                <JsonRpcId as Structure<S>>::structure(options, id).map_err(|e| e.at_field("id"))?
            }
            None => JsonRpcId::Null,
        };

        let outcome = match object.get("error") {
            Some(error) if !error.is_null() => Err(<RpcError as Structure<S>>::structure(
                options, error,
            )
            .map_err(|e| e.at_field("error"))?),
            _ => match object.get("result") {
                Some(result) => Ok(result.clone()),
                None => return Err(ValidationError::new(Reason::MissingField).at_field("result")),
            },
        };

        Ok(JsonRpcResponse { id, outcome })
    }
}

impl Unstructure for JsonRpcResponse {
    fn unstructure(&self, options: &CodecOptions) -> Value {
        let mut object = Map::new();
        put(&mut object, options, "jsonrpc", JSONRPC_VERSION);
        put(&mut object, options, "id", &self.id);
        match &self.outcome {
            Ok(result) => put(&mut object, options, "result", result),
            Err(error) => put(&mut object, options, "error", error),
        }
        Value::Object(object)
    }
}
