//! Block identifiers
//!
//! A block is addressed either by one of the well-known labels or by its
//! number. On the wire both are strings, so decoding tries the label first
//! and falls back to a minimal hex quantity.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::convert::{expect_str, Alternatives};
use crate::error::Reason;
use crate::{CodecOptions, Structure, Unstructure, ValidationError};

/// Named block tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockLabel {
    /// Most recent block in the canonical chain
    Latest,
    /// Genesis block
    Earliest,
    /// Block being built from pending transactions
    Pending,
    /// Most recent safe head
    Safe,
    /// Most recent finalized block
    Finalized,
}

impl BlockLabel {
    /// All labels, in declaration order
    pub const ALL: [BlockLabel; 5] = [
        BlockLabel::Latest,
        BlockLabel::Earliest,
        BlockLabel::Pending,
        BlockLabel::Safe,
        BlockLabel::Finalized,
    ];

    const NAMES: &'static [&'static str] = &["latest", "earliest", "pending", "safe", "finalized"];

    /// Wire name
    pub const fn as_str(&self) -> &'static str {
        match self {
            BlockLabel::Latest => "latest",
            BlockLabel::Earliest => "earliest",
            BlockLabel::Pending => "pending",
            BlockLabel::Safe => "safe",
            BlockLabel::Finalized => "finalized",
        }
    }
}

impl fmt::Display for BlockLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockLabel {
    type Err = Reason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| Reason::UnknownVariant {
                value: s.to_string(),
                expected: BlockLabel::NAMES,
            })
    }
}

impl<S> Structure<S> for BlockLabel {
    fn structure(_options: &CodecOptions, value: &Value) -> Result<Self, ValidationError> {
        expect_str(value)?.parse().map_err(ValidationError::new)
    }
}

impl Unstructure for BlockLabel {
    fn unstructure(&self, _options: &CodecOptions) -> Value {
        Value::String(self.as_str().to_string())
    }
}

/// A block tag or a block number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    /// Named block
    Label(BlockLabel),
    /// Block by number
    Number(u64),
}

impl Default for Block {
    fn default() -> Self {
        Block::Label(BlockLabel::Latest)
    }
}

impl From<BlockLabel> for Block {
    fn from(label: BlockLabel) -> Self {
        Block::Label(label)
    }
}

impl From<u64> for Block {
    fn from(number: u64) -> Self {
        Block::Number(number)
    }
}

impl<S> Structure<S> for Block {
    fn structure(options: &CodecOptions, value: &Value) -> Result<Self, ValidationError> {
        Alternatives::new(value)
            .or_try("label", |v| {
                <BlockLabel as Structure<S>>::structure(options, v).map(Block::Label)
            })
            .or_try("number", |v| {
                <u64 as Structure<S>>::structure(options, v).map(Block::Number)
            })
            .finish()
    }
}

impl Unstructure for Block {
    fn unstructure(&self, options: &CodecOptions) -> Value {
        match self {
            Block::Label(label) => label.unstructure(options),
            Block::Number(number) => number.unstructure(options),
        }
    }
}
