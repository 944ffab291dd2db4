//! Primitive substitution through codec configuration

use ethrpc_schema::{
    substitute, Address, Amount, Codec, EthCallParams, Primitives, Standard, Substitute,
    TxReceipt, Value,
};
use serde_json::json;

// ==================== Substitute types ====================

#[derive(Debug, Clone, PartialEq)]
struct LabeledAddress {
    address: Address,
    label: Option<String>,
}

impl Substitute<Address> for LabeledAddress {
    fn from_base(address: Address) -> Self {
        LabeledAddress {
            address,
            label: None,
        }
    }

    fn as_base(&self) -> &Address {
        &self.address
    }
}

substitute!(LabeledAddress => Address);

#[derive(Debug, Clone, PartialEq)]
struct Wei(Amount);

impl Substitute<Amount> for Wei {
    fn from_base(amount: Amount) -> Self {
        Wei(amount)
    }

    fn as_base(&self) -> &Amount {
        &self.0
    }
}

substitute!(Wei => Amount);

type Labeled = Primitives<LabeledAddress, Amount>;

const FROM: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
const TO: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

fn hex32(byte: u8) -> String {
    format!("0x{}", format!("{:02x}", byte).repeat(32))
}

fn receipt_json() -> Value {
    json!({
        "blockHash": hex32(0xbb),
        "blockNumber": "0x10",
        "contractAddress": null,
        "cumulativeGasUsed": "0xa410",
        "effectiveGasPrice": "0x3b9aca00",
        "from": FROM,
        "gasUsed": "0x5208",
        "to": TO,
        "transactionHash": hex32(0x11),
        "transactionIndex": "0x1",
        "type": "0x2",
        "status": "0x1",
        "logs": [{
            "removed": false,
            "address": TO,
            "data": "0x",
            "topics": [hex32(0xdd)],
            "logIndex": "0x0",
            "transactionIndex": "0x1",
            "transactionHash": hex32(0x11),
            "blockHash": hex32(0xbb),
            "blockNumber": "0x10",
        }],
        "logsBloom": format!("0x{}", "00".repeat(256)),
    })
}

// ==================== Decoding ====================

#[test]
fn test_substituted_address_everywhere() {
    let codec = Codec::builder().address::<LabeledAddress>().build();
    let receipt: TxReceipt<Labeled> = codec.structure(&receipt_json()).unwrap();

    assert_eq!(receipt.from.label, None);
    assert_eq!(receipt.from.address, Address::from_hex(FROM).unwrap());
    let to = receipt.to.as_ref().unwrap();
    assert_eq!(to.address, Address::from_hex(TO).unwrap());
    assert_eq!(receipt.logs[0].address.as_base(), to.as_base());
}

#[test]
fn test_substituted_amount() {
    let codec = Codec::builder().amount::<Wei>().build();
    let params: EthCallParams<Primitives<Address, Wei>> =
        codec.structure(&json!({ "to": TO, "value": "0x64" })).unwrap();
    assert_eq!(params.value, Wei(Amount::wei(100u64)));
}

#[test]
fn test_substituted_default_amount() {
    let codec = Codec::builder().amount::<Wei>().build();
    let params: EthCallParams<Primitives<Address, Wei>> =
        codec.structure(&json!({ "to": TO })).unwrap();
    assert_eq!(params.value, Wei(Amount::ZERO));
}

#[test]
fn test_both_substituted() {
    let codec = Codec::builder()
        .address::<LabeledAddress>()
        .amount::<Wei>()
        .build();
    let receipt: TxReceipt<Primitives<LabeledAddress, Wei>> =
        codec.structure(&receipt_json()).unwrap();
    assert_eq!(receipt.effective_gas_price, Wei(Amount::gwei(1)));
}

// ==================== Transparency ====================

#[test]
fn test_encoding_ignores_extras() {
    let codec = Codec::builder().address::<LabeledAddress>().build();
    let mut receipt: TxReceipt<Labeled> = codec.structure(&receipt_json()).unwrap();
    receipt.from.label = Some("alice".to_string());

    assert_eq!(codec.unstructure(&receipt), receipt_json());
}

#[test]
fn test_same_wire_as_standard() {
    let standard = Codec::new();
    let labeled = Codec::builder().address::<LabeledAddress>().build();

    let a: TxReceipt<Standard> = standard.structure(&receipt_json()).unwrap();
    let b: TxReceipt<Labeled> = labeled.structure(&receipt_json()).unwrap();

    assert_eq!(standard.unstructure(&a), labeled.unstructure(&b));
    // either codec can encode either record
    assert_eq!(standard.unstructure(&b), labeled.unstructure(&a));
}

#[test]
fn test_codecs_do_not_interfere() {
    let labeled = Codec::builder().address::<LabeledAddress>().build();
    let _: TxReceipt<Labeled> = labeled.structure(&receipt_json()).unwrap();

    // building a substituting codec leaves the standard one untouched
    let receipt: TxReceipt = Codec::new().structure(&receipt_json()).unwrap();
    assert_eq!(receipt.from, Address::from_hex(FROM).unwrap());
}

#[test]
fn test_substitute_respects_options() {
    let codec = Codec::builder()
        .address::<LabeledAddress>()
        .checksum_addresses(false)
        .validate_checksums(true)
        .build();

    let receipt: TxReceipt<Labeled> = codec.structure(&receipt_json()).unwrap();
    let wire = codec.unstructure(&receipt);
    assert_eq!(wire["from"], json!(FROM.to_lowercase()));

    let mut bad = receipt_json();
    bad["from"] = json!("0x5AAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    let err = codec.structure::<TxReceipt<Labeled>>(&bad).unwrap_err();
    assert_eq!(err.path_string(), "from");
}
