//! Validation errors raised while structuring JSON into typed values

use std::fmt;

use ethrpc_crypto::CryptoError;
use ethrpc_primitives::PrimitiveError;
use thiserror::Error;

/// One step in the path from the outermost value to a failing leaf
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object key (the wire name, e.g. `blockHash`)
    Field(&'static str),
    /// Array position
    Index(usize),
}

/// Why a value failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reason {
    /// Wrong JSON shape
    #[error("expected {expected}, got {got}")]
    UnexpectedType {
        /// What the target shape needs
        expected: &'static str,
        /// What the JSON value actually is
        got: &'static str,
    },

    /// Hex, length or quantity violation
    #[error(transparent)]
    Primitive(#[from] PrimitiveError),

    /// Mixed-case address whose casing is not its EIP-55 checksum
    #[error("checksum mismatch, expected {expected}")]
    Checksum {
        /// Correctly checksummed form
        expected: String,
    },

    /// Required object key not present
    #[error("missing field")]
    MissingField,

    /// String outside a closed set of labels
    #[error("unknown variant {value:?}, expected one of: {}", .expected.join(", "))]
    UnknownVariant {
        /// Input as given
        value: String,
        /// Accepted labels
        expected: &'static [&'static str],
    },

    /// Typed transaction object with the wrong `type`
    #[error("expected transaction type {expected}, got {got}")]
    UnexpectedTxType {
        /// Type required by the target shape
        expected: u64,
        /// Type found on the wire
        got: u64,
    },

    /// Every alternative of a union failed
    #[error("no alternative matched ({})", describe(.0))]
    NoMatchingAlternative(Vec<Alternative>),
}

impl From<CryptoError> for Reason {
    fn from(e: CryptoError) -> Self {
        match e {
            CryptoError::InvalidAddress(e) => Reason::Primitive(e),
            CryptoError::ChecksumMismatch { expected, .. } => Reason::Checksum { expected },
        }
    }
}

/// The failure of one union alternative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternative {
    /// Alternative name, e.g. `label` or `number`
    pub name: &'static str,
    /// Why it did not match
    pub error: ValidationError,
}

fn describe(alternatives: &[Alternative]) -> String {
    alternatives
        .iter()
        .map(|a| format!("{}: {}", a.name, a.error))
        .collect::<Vec<_>>()
        .join("; ")
}

/// A structuring failure, located by its path inside the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    path: Vec<PathSegment>,
    reason: Reason,
}

impl ValidationError {
    /// Error at the root of the value being structured
    pub fn new(reason: impl Into<Reason>) -> Self {
        Self {
            path: Vec::new(),
            reason: reason.into(),
        }
    }

    /// Wrong JSON shape
    pub fn unexpected_type(expected: &'static str, got: &serde_json::Value) -> Self {
        Self::new(Reason::UnexpectedType {
            expected,
            got: json_kind(got),
        })
    }

    /// Prefix the path with an object key
    pub fn at_field(mut self, name: &'static str) -> Self {
        self.path.insert(0, PathSegment::Field(name));
        self
    }

    /// Prefix the path with an array index
    pub fn at_index(mut self, index: usize) -> Self {
        self.path.insert(0, PathSegment::Index(index));
        self
    }

    /// Path from the outermost value to the failure
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Path rendered as `logs[0].topics[1]`; empty at the root
    pub fn path_string(&self) -> String {
        let mut out = String::new();
        for segment in &self.path {
            match segment {
                PathSegment::Field(name) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(name);
                }
                PathSegment::Index(i) => {
                    out.push_str(&format!("[{}]", i));
                }
            }
        }
        out
    }

    /// Underlying reason
    pub fn reason(&self) -> &Reason {
        &self.reason
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.reason)
        } else {
            write!(f, "at `{}`: {}", self.path_string(), self.reason)
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}

impl From<PrimitiveError> for ValidationError {
    fn from(e: PrimitiveError) -> Self {
        Self::new(e)
    }
}

impl From<CryptoError> for ValidationError {
    fn from(e: CryptoError) -> Self {
        Self::new(e)
    }
}

/// Short name of a JSON value's kind, for error messages
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Result type for structuring
pub type ValidationResult<T> = Result<T, ValidationError>;
