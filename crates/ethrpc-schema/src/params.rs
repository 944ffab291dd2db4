//! Request parameter shapes

use bytes::Bytes;
use ethrpc_primitives::{Amount, BlockHash, LogTopic, U256};
use serde_json::{Map, Value};

use crate::block::Block;
use crate::convert::{
    expect_object, impl_record, optional, put, put_optional, required, Alternatives,
};
use crate::error::Reason;
use crate::schema::{Schema, Standard, Substitute};
use crate::{CodecOptions, Structure, Unstructure, ValidationError};

/// A single value or a list of them
#[derive(Debug, Clone, PartialEq)]
pub enum OneOrMany<T> {
    /// Exactly one value
    One(T),
    /// Any number of values
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Values as a slice
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value),
            OneOrMany::Many(values) => values,
        }
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        OneOrMany::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}

impl<S, T: Structure<S>> Structure<S> for OneOrMany<T> {
    fn structure(options: &CodecOptions, value: &Value) -> Result<Self, ValidationError> {
        Alternatives::new(value)
            .or_try("one", |v| T::structure(options, v).map(OneOrMany::One))
            .or_try("many", |v| {
                <Vec<T> as Structure<S>>::structure(options, v).map(OneOrMany::Many)
            })
            .finish()
    }
}

impl<T: Unstructure> Unstructure for OneOrMany<T> {
    fn unstructure(&self, options: &CodecOptions) -> Value {
        match self {
            OneOrMany::One(value) => value.unstructure(options),
            OneOrMany::Many(values) => values.unstructure(options),
        }
    }
}

/// One position of a log topic filter; `None` matches any topic
pub type TopicFilter = Option<OneOrMany<LogTopic>>;

/// Parameters of `eth_call`
#[derive(Debug, Clone, PartialEq)]
pub struct EthCallParams<S: Schema = Standard> {
    /// Call target
    pub to: S::Address,
    /// Caller
    pub from: Option<S::Address>,
    /// Gas limit
    pub gas: Option<u64>,
    /// Gas price, zero if unspecified
    pub gas_price: U256,
    /// Value sent with the call
    pub value: S::Amount,
    /// Call data
    pub data: Option<Bytes>,
}

impl<S: Schema> EthCallParams<S> {
    /// Call to `to` with everything else unset
    pub fn new(to: S::Address) -> Self {
        Self {
            to,
            from: None,
            gas: None,
            gas_price: U256::zero(),
            value: S::Amount::from_base(Amount::ZERO),
            data: None,
        }
    }
}

impl_record!(EthCallParams {
    to: required "to",
    from: optional "from",
    gas: optional "gas",
    gas_price: defaulted "gasPrice",
    value: defaulted_amount "value",
    data: optional "data",
});

/// Parameters of `eth_estimateGas`
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateGasParams<S: Schema = Standard> {
    /// Sender
    pub from: S::Address,
    /// Recipient, `None` for contract creation
    pub to: Option<S::Address>,
    /// Gas limit
    pub gas: Option<u64>,
    /// Gas price, zero if unspecified
    pub gas_price: U256,
    /// Sender nonce
    pub nonce: Option<u64>,
    /// Value sent
    pub value: S::Amount,
    /// Call data or init code
    pub data: Option<Bytes>,
}

impl<S: Schema> EstimateGasParams<S> {
    /// Estimate for a transaction from `from` with everything else unset
    pub fn new(from: S::Address) -> Self {
        Self {
            from,
            to: None,
            gas: None,
            gas_price: U256::zero(),
            nonce: None,
            value: S::Amount::from_base(Amount::ZERO),
            data: None,
        }
    }
}

impl_record!(EstimateGasParams {
    from: required "from",
    to: optional "to",
    gas: optional "gas",
    gas_price: defaulted "gasPrice",
    nonce: optional "nonce",
    value: defaulted_amount "value",
    data: optional "data",
});

/// Log filter over a block range
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterParams<S: Schema = Standard> {
    /// First block of the range
    pub from_block: Option<Block>,
    /// Last block of the range
    pub to_block: Option<Block>,
    /// Emitting contract(s)
    pub address: Option<OneOrMany<S::Address>>,
    /// Topic filters by position
    pub topics: Option<Vec<TopicFilter>>,
}

impl_record!(FilterParams {
    from_block: optional "fromBlock",
    to_block: optional "toBlock",
    address: optional "address",
    topics: optional "topics",
});

/// Log filter for a single block (EIP-234)
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParamsEIP234<S: Schema = Standard> {
    /// Block to search
    pub block_hash: BlockHash,
    /// Emitting contract(s)
    pub address: Option<OneOrMany<S::Address>>,
    /// Topic filters by position
    pub topics: Option<Vec<TopicFilter>>,
}

impl<S: Schema> FilterParamsEIP234<S> {
    /// Filter matching every log of the block
    pub fn new(block_hash: BlockHash) -> Self {
        Self {
            block_hash,
            address: None,
            topics: None,
        }
    }
}

impl_record!(FilterParamsEIP234 {
    block_hash: required "blockHash",
    address: optional "address",
    topics: optional "topics",
});

/// EIP-1559 transaction for signing or submission
///
/// The wire object carries `"type": "0x2"`, which is checked on decode and
/// added on encode.
#[derive(Debug, Clone, PartialEq)]
pub struct Type2Transaction<S: Schema = Standard> {
    /// Chain the transaction is valid on
    pub chain_id: u64,
    /// Value transferred
    pub value: S::Amount,
    /// Gas limit
    pub gas: u64,
    /// Fee cap per gas
    pub max_fee_per_gas: S::Amount,
    /// Priority fee per gas
    pub max_priority_fee_per_gas: S::Amount,
    /// Sender nonce
    pub nonce: u64,
    /// Recipient, `None` for contract creation
    pub to: Option<S::Address>,
    /// Call data or init code
    pub data: Option<Bytes>,
}

impl<S: Schema> Type2Transaction<S> {
    /// EIP-2718 transaction type
    pub const TYPE: u64 = 2;
}

impl<S: Schema> Structure<S> for Type2Transaction<S> {
    fn structure(options: &CodecOptions, value: &Value) -> Result<Self, ValidationError> {
        let object = expect_object(value)?;
        let tx_type: u64 = required::<S, _>(options, object, "type")?;
        if tx_type != Self::TYPE {
            return Err(ValidationError::new(Reason::UnexpectedTxType {
                expected: Self::TYPE,
                got: tx_type,
            })
            .at_field("type"));
        }

        Ok(Type2Transaction {
            chain_id: required::<S, _>(options, object, "chainId")?,
            value: required::<S, _>(options, object, "value")?,
            gas: required::<S, _>(options, object, "gas")?,
            max_fee_per_gas: required::<S, _>(options, object, "maxFeePerGas")?,
            max_priority_fee_per_gas: required::<S, _>(options, object, "maxPriorityFeePerGas")?,
            nonce: required::<S, _>(options, object, "nonce")?,
            to: optional::<S, _>(options, object, "to")?,
            data: optional::<S, _>(options, object, "data")?,
        })
    }
}

impl<S: Schema> Unstructure for Type2Transaction<S> {
    fn unstructure(&self, options: &CodecOptions) -> Value {
        let mut object = Map::new();
        put(&mut object, options, "type", &Self::TYPE);
        put(&mut object, options, "chainId", &self.chain_id);
        put(&mut object, options, "value", &self.value);
        put(&mut object, options, "gas", &self.gas);
        put(&mut object, options, "maxFeePerGas", &self.max_fee_per_gas);
        put(&mut object, options, "maxPriorityFeePerGas", &self.max_priority_fee_per_gas);
        put(&mut object, options, "nonce", &self.nonce);
        put_optional(&mut object, options, "to", &self.to);
        put_optional(&mut object, options, "data", &self.data);
        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockLabel;
    use crate::{structure, unstructure};
    use ethrpc_primitives::{Address, Amount};
    use serde_json::json;

    const TO: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    fn to() -> Address {
        Address::from_hex(TO).unwrap()
    }

    // ===== EthCallParams =====

    #[test]
    fn test_eth_call_minimal_encoding() {
        let params = EthCallParams::<Standard>::new(to());
        assert_eq!(
            unstructure(&params),
            json!({ "to": TO, "gasPrice": "0x0", "value": "0x0" })
        );
    }

    #[test]
    fn test_eth_call_defaults_filled() {
        let params: EthCallParams = structure(&json!({ "to": TO })).unwrap();
        assert_eq!(params, EthCallParams::new(to()));
    }

    #[test]
    fn test_eth_call_missing_to() {
        let err = structure::<EthCallParams>(&json!({ "gas": "0x1" })).unwrap_err();
        assert_eq!(err.reason(), &Reason::MissingField);
        assert_eq!(err.path_string(), "to");
    }

    #[test]
    fn test_eth_call_full_round_trip() {
        let params = EthCallParams::<Standard> {
            from: Some(Address::from_bytes([1; 20])),
            gas: Some(21_000),
            gas_price: U256::from(7),
            value: Amount::gwei(3),
            data: Some(Bytes::from_static(&[0x12, 0x34])),
            ..EthCallParams::new(to())
        };
        let wire = unstructure(&params);
        assert_eq!(wire["gas"], json!("0x5208"));
        assert_eq!(wire["data"], json!("0x1234"));
        assert_eq!(structure::<EthCallParams>(&wire).unwrap(), params);
    }

    #[test]
    fn test_eth_call_null_optional_tolerated() {
        let params: EthCallParams = structure(&json!({ "to": TO, "from": null })).unwrap();
        assert_eq!(params.from, None);
    }

    // ===== EstimateGasParams =====

    #[test]
    fn test_estimate_gas_round_trip() {
        let params = EstimateGasParams::<Standard> {
            nonce: Some(5),
            ..EstimateGasParams::new(to())
        };
        let wire = unstructure(&params);
        assert_eq!(
            wire,
            json!({ "from": TO, "nonce": "0x5", "gasPrice": "0x0", "value": "0x0" })
        );
        assert_eq!(structure::<EstimateGasParams>(&wire).unwrap(), params);
    }

    // ===== Filters =====

    #[test]
    fn test_empty_filter_is_empty_object() {
        assert_eq!(unstructure(&FilterParams::<Standard>::default()), json!({}));
    }

    #[test]
    fn test_filter_address_one_or_many() {
        let one: FilterParams = structure(&json!({ "address": TO })).unwrap();
        assert_eq!(one.address, Some(OneOrMany::One(to())));

        let many: FilterParams = structure(&json!({ "address": [TO, TO] })).unwrap();
        assert_eq!(many.address, Some(OneOrMany::Many(vec![to(), to()])));
        assert_eq!(many.address.unwrap().as_slice().len(), 2);
    }

    #[test]
    fn test_filter_topics_with_wildcards() {
        let topic = format!("0x{}", "ab".repeat(32));
        let wire = json!({
            "fromBlock": "earliest",
            "toBlock": "0x64",
            "topics": [topic, null, [topic, topic]],
        });
        let filter: FilterParams = structure(&wire).unwrap();
        assert_eq!(filter.from_block, Some(Block::Label(BlockLabel::Earliest)));
        assert_eq!(filter.to_block, Some(Block::Number(100)));
        let topics = filter.topics.as_ref().unwrap();
        assert_eq!(topics.len(), 3);
        assert!(matches!(topics[0], Some(OneOrMany::One(_))));
        assert_eq!(topics[1], None);
        assert!(matches!(&topics[2], Some(OneOrMany::Many(v)) if v.len() == 2));
        assert_eq!(unstructure(&filter), wire);
    }

    #[test]
    fn test_filter_bad_topic_path() {
        let wire = json!({ "topics": [null, "0x1234"] });
        let err = structure::<FilterParams>(&wire).unwrap_err();
        assert_eq!(err.path_string(), "topics[1]");
        assert!(matches!(err.reason(), Reason::Primitive(_)));
    }

    #[test]
    fn test_filter_bad_address_in_list_path() {
        let wire = json!({ "address": [TO, "0x1234"] });
        let err = structure::<FilterParams>(&wire).unwrap_err();
        assert_eq!(err.path_string(), "address[1]");
        assert!(matches!(err.reason(), Reason::Primitive(_)));
    }

    #[test]
    fn test_filter_address_wrong_kind_lists_alternatives() {
        let err = structure::<FilterParams>(&json!({ "address": 5 })).unwrap_err();
        assert_eq!(err.path_string(), "address");
        assert!(matches!(err.reason(), Reason::NoMatchingAlternative(_)));
    }

    #[test]
    fn test_filter_eip234() {
        let hash = format!("0x{}", "cd".repeat(32));
        let filter: FilterParamsEIP234 = structure(&json!({ "blockHash": hash })).unwrap();
        assert_eq!(filter, FilterParamsEIP234::new(BlockHash::from_bytes([0xcd; 32])));
        assert_eq!(unstructure(&filter), json!({ "blockHash": hash }));
    }

    // ===== Type2Transaction =====

    fn type2() -> Type2Transaction {
        Type2Transaction {
            chain_id: 1,
            value: Amount::ether(1),
            gas: 21_000,
            max_fee_per_gas: Amount::gwei(30),
            max_priority_fee_per_gas: Amount::gwei(2),
            nonce: 0,
            to: Some(to()),
            data: None,
        }
    }

    #[test]
    fn test_type2_encodes_type() {
        let wire = unstructure(&type2());
        assert_eq!(wire["type"], json!("0x2"));
        assert_eq!(wire["nonce"], json!("0x0"));
        assert!(wire.get("data").is_none());
        assert_eq!(structure::<Type2Transaction>(&wire).unwrap(), type2());
    }

    #[test]
    fn test_type2_wrong_type() {
        let mut wire = unstructure(&type2());
        wire["type"] = json!("0x1");
        let err = structure::<Type2Transaction>(&wire).unwrap_err();
        assert_eq!(err.path_string(), "type");
        assert_eq!(
            err.reason(),
            &Reason::UnexpectedTxType {
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn test_type2_missing_type() {
        let mut wire = unstructure(&type2());
        wire.as_object_mut().unwrap().remove("type");
        let err = structure::<Type2Transaction>(&wire).unwrap_err();
        assert_eq!(err.reason(), &Reason::MissingField);
        assert_eq!(err.path_string(), "type");
    }
}
