//! `0x`-prefixed hex byte strings

use crate::PrimitiveError;

/// Hex prefix used by every JSON-RPC byte string and quantity
pub const PREFIX: &str = "0x";

/// Strip the mandatory `0x` prefix
pub fn strip_prefix(s: &str) -> Result<&str, PrimitiveError> {
    s.strip_prefix(PREFIX).ok_or(PrimitiveError::MissingPrefix)
}

/// Decode a prefixed hex string of any even length (`"0x"` is empty data)
pub fn decode(s: &str) -> Result<Vec<u8>, PrimitiveError> {
    let digits = strip_prefix(s)?;
    hex::decode(digits).map_err(|e| PrimitiveError::InvalidHex(e.to_string()))
}

/// Decode a prefixed hex string into exactly `N` bytes
pub fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], PrimitiveError> {
    let bytes = decode(s)?;
    if bytes.len() != N {
        return Err(PrimitiveError::InvalidLength {
            expected: N,
            got: bytes.len(),
        });
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Format bytes as lower-case prefixed hex
pub fn encode(bytes: &[u8]) -> String {
    format!("{}{}", PREFIX, hex::encode(bytes))
}
