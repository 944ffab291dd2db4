//! Minimal-length hex quantities
//!
//! Integers travel as `0x`-prefixed hex with no leading zero nibble
//! (`0x0`, `0x1a`). Non-minimal encodings such as `0x01a` are rejected
//! rather than re-canonicalized, so every accepted string is exactly what
//! [`format_u256`] / [`format_u64`] would produce for the parsed value
//! (modulo letter case).

use primitive_types::U256;

use crate::hex_data::{strip_prefix, PREFIX};
use crate::PrimitiveError;

fn digits(s: &str) -> Result<&str, PrimitiveError> {
    let digits = strip_prefix(s)?;
    if digits.is_empty() {
        return Err(PrimitiveError::EmptyQuantity);
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PrimitiveError::InvalidHex(s.to_string()));
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(PrimitiveError::NonMinimal(s.to_string()));
    }
    Ok(digits)
}

/// Parse a quantity into a 256-bit integer
pub fn parse_u256(s: &str) -> Result<U256, PrimitiveError> {
    let digits = digits(s)?;
    if digits.len() > 64 {
        return Err(PrimitiveError::Overflow { bits: 256 });
    }
    U256::from_str_radix(digits, 16).map_err(|_| PrimitiveError::InvalidHex(s.to_string()))
}

/// Parse a quantity into a `u64`
pub fn parse_u64(s: &str) -> Result<u64, PrimitiveError> {
    let digits = digits(s)?;
    if digits.len() > 16 {
        return Err(PrimitiveError::Overflow { bits: 64 });
    }
    u64::from_str_radix(digits, 16).map_err(|_| PrimitiveError::InvalidHex(s.to_string()))
}

/// Format U256 as a minimal hex quantity
pub fn format_u256(value: &U256) -> String {
    format!("{}{:x}", PREFIX, value)
}

/// Format u64 as a minimal hex quantity
pub fn format_u64(value: u64) -> String {
    format!("{}{:x}", PREFIX, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Parsing =====

    #[test]
    fn test_parse_zero() {
        assert_eq!(parse_u64("0x0").unwrap(), 0);
        assert_eq!(parse_u256("0x0").unwrap(), U256::zero());
    }

    #[test]
    fn test_parse_one() {
        assert_eq!(parse_u64("0x1").unwrap(), 1);
    }

    #[test]
    fn test_parse_uppercase_digits() {
        assert_eq!(parse_u64("0xFF").unwrap(), 255);
    }

    #[test]
    fn test_parse_one_ether() {
        assert_eq!(
            parse_u256("0xde0b6b3a7640000").unwrap(),
            U256::from(1_000_000_000_000_000_000u64)
        );
    }

    #[test]
    fn test_parse_rejects_leading_zero() {
        assert_eq!(
            parse_u64("0x01"),
            Err(PrimitiveError::NonMinimal("0x01".to_string()))
        );
        assert!(matches!(parse_u256("0x00"), Err(PrimitiveError::NonMinimal(_))));
        assert!(matches!(parse_u256("0x01a"), Err(PrimitiveError::NonMinimal(_))));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(parse_u64("0x"), Err(PrimitiveError::EmptyQuantity));
    }

    #[test]
    fn test_parse_rejects_missing_prefix() {
        assert_eq!(parse_u64("10"), Err(PrimitiveError::MissingPrefix));
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert!(matches!(parse_u64("0xzz"), Err(PrimitiveError::InvalidHex(_))));
        assert!(matches!(parse_u64("0x-1"), Err(PrimitiveError::InvalidHex(_))));
    }

    #[test]
    fn test_parse_u64_overflow() {
        assert_eq!(parse_u64("0xffffffffffffffff").unwrap(), u64::MAX);
        assert_eq!(
            parse_u64("0x10000000000000000"),
            Err(PrimitiveError::Overflow { bits: 64 })
        );
    }

    #[test]
    fn test_parse_u256_overflow() {
        let max = format!("0x{}", "f".repeat(64));
        assert_eq!(parse_u256(&max).unwrap(), U256::MAX);
        let too_big = format!("0x1{}", "0".repeat(64));
        assert_eq!(parse_u256(&too_big), Err(PrimitiveError::Overflow { bits: 256 }));
    }

    // ===== Formatting =====

    #[test]
    fn test_format_u64() {
        assert_eq!(format_u64(0), "0x0");
        assert_eq!(format_u64(16), "0x10");
        assert_eq!(format_u64(255), "0xff");
        assert_eq!(format_u64(1_000_000), "0xf4240");
    }

    #[test]
    fn test_format_u256() {
        assert_eq!(format_u256(&U256::zero()), "0x0");
        assert_eq!(format_u256(&U256::from(1_000_000_000u64)), "0x3b9aca00");
    }
}
