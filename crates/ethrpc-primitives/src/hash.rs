//! Hash types and other fixed-width byte strings

use crate::fixed::fixed_bytes_type;

fixed_bytes_type!(
    /// Transaction hash (32 bytes)
    TxHash,
    32
);

fixed_bytes_type!(
    /// Block hash (32 bytes)
    BlockHash,
    32
);

fixed_bytes_type!(
    /// Trie root hash (32 bytes)
    TrieHash,
    32
);

fixed_bytes_type!(
    /// Hash of a block's uncle list (32 bytes)
    UnclesHash,
    32
);

fixed_bytes_type!(
    /// Log topic (32 bytes)
    LogTopic,
    32
);

fixed_bytes_type!(
    /// Block nonce (8 bytes)
    BlockNonce,
    8
);

fixed_bytes_type!(
    /// Bloom filter over a block's or receipt's logs (256 bytes)
    LogsBloom,
    256
);
