//! EIP-55 mixed-case checksum encoding of addresses

use ethrpc_primitives::Address;

use crate::{keccak256, CryptoError};

/// Checksum-cased hex form of an address, `0x`-prefixed
///
/// A letter digit is upper-cased when the matching nibble of
/// `keccak256(lower_case_hex)` is 8 or more.
pub fn to_checksum(address: &Address) -> String {
    let lower = hex::encode(address.as_bytes());
    let hash = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(2 + lower.len());
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// True if the hex digits of `s` contain both upper- and lower-case letters
pub fn has_mixed_case(s: &str) -> bool {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    let upper = digits.chars().any(|c| c.is_ascii_uppercase());
    let lower = digits.chars().any(|c| c.is_ascii_lowercase());
    upper && lower
}

/// Parse an address, enforcing the checksum when the input is mixed-case
///
/// All-lower and all-upper inputs carry no checksum and are accepted as is.
pub fn verify_checksum(s: &str) -> Result<Address, CryptoError> {
    let address = Address::from_hex(s)?;
    if has_mixed_case(s) {
        let expected = to_checksum(&address);
        if expected != s {
            return Err(CryptoError::ChecksumMismatch {
                expected,
                got: s.to_string(),
            });
        }
    }
    Ok(address)
}
