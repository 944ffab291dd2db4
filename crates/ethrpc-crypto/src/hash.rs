//! Keccak-256 hashing

use sha3::{Digest, Keccak256};

/// Compute Keccak-256 hash of the input data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_of(data: &[u8]) -> String {
        format!("0x{}", hex::encode(keccak256(data)))
    }

    // ==================== Ethereum official test vectors ====================

    #[test]
    fn test_keccak256_empty() {
        assert_eq!(
            hex_of(&[]),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_keccak256_hello() {
        assert_eq!(
            hex_of(b"hello"),
            "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        );
    }

    #[test]
    fn test_keccak256_32_bytes() {
        assert_eq!(
            hex_of(&[0u8; 32]),
            "0x290decd9548b62a8d60345a988386fc84ba6bc95484008f6362f93160ef3e563"
        );
    }

    #[test]
    fn test_keccak256_empty_rlp_list() {
        // keccak256(0xc0), the empty uncles hash
        assert_eq!(
            hex_of(&[0xc0]),
            "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347"
        );
    }

    #[test]
    fn test_keccak256_transfer_selector() {
        let hash = keccak256(b"transfer(address,uint256)");
        assert_eq!(&hash[..4], &[0xa9, 0x05, 0x9c, 0xbb]);
    }
}
