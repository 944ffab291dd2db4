//! Checksum property tests for ethrpc-crypto

use ethrpc_crypto::{has_mixed_case, to_checksum, verify_checksum};
use ethrpc_primitives::Address;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_checksum_roundtrip(bytes in any::<[u8; 20]>()) {
        let address = Address::from_bytes(bytes);
        let checksummed = to_checksum(&address);
        prop_assert_eq!(verify_checksum(&checksummed).unwrap(), address);
    }

    #[test]
    fn test_checksum_only_changes_case(bytes in any::<[u8; 20]>()) {
        let address = Address::from_bytes(bytes);
        prop_assert_eq!(to_checksum(&address).to_lowercase(), address.to_hex());
    }
}

#[test]
fn test_has_mixed_case() {
    assert!(has_mixed_case("0xaB"));
    assert!(!has_mixed_case("0xab"));
    assert!(!has_mixed_case("0xAB"));
    assert!(!has_mixed_case("0x12"));
}
