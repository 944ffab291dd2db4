//! Response shapes

use bytes::Bytes;
use ethrpc_primitives::{
    BlockHash, BlockNonce, LogTopic, LogsBloom, TrieHash, TxHash, UnclesHash, U256,
};
use serde_json::Value;

use crate::convert::{impl_record, Alternatives};
use crate::schema::{Schema, Standard};
use crate::{CodecOptions, Structure, Unstructure, ValidationError};

/// A transaction as returned by `eth_getTransactionByHash`
#[derive(Debug, Clone, PartialEq)]
pub struct TxInfo<S: Schema = Standard> {
    /// Chain ID
    pub chain_id: u64,
    /// EIP-2718 transaction type
    pub tx_type: u64,
    /// Transaction hash
    pub hash: TxHash,
    /// Call data or init code
    pub input: Option<Bytes>,
    /// Including block, `None` while pending
    pub block_hash: Option<BlockHash>,
    /// Including block number, `None` while pending
    pub block_number: Option<u64>,
    /// Position in the block, `None` while pending
    pub transaction_index: Option<u64>,
    /// Sender
    pub from: S::Address,
    /// Recipient, `None` for contract creation
    pub to: Option<S::Address>,
    /// Value transferred
    pub value: S::Amount,
    /// Sender nonce
    pub nonce: u64,
    /// Gas limit
    pub gas: u64,
    /// Gas price (effective price for EIP-1559 transactions)
    pub gas_price: S::Amount,
    /// Fee cap, EIP-1559 only
    pub max_fee_per_gas: Option<S::Amount>,
    /// Priority fee, EIP-1559 only
    pub max_priority_fee_per_gas: Option<S::Amount>,
    /// Signature recovery id
    pub v: U256,
    /// Signature `r`
    pub r: U256,
    /// Signature `s`
    pub s: U256,
}

impl_record!(TxInfo {
    chain_id: required "chainId",
    tx_type: required "type",
    hash: required "hash",
    input: nullable "input",
    block_hash: nullable "blockHash",
    block_number: nullable "blockNumber",
    transaction_index: nullable "transactionIndex",
    from: required "from",
    to: nullable "to",
    value: required "value",
    nonce: required "nonce",
    gas: required "gas",
    gas_price: required "gasPrice",
    max_fee_per_gas: nullable "maxFeePerGas",
    max_priority_fee_per_gas: nullable "maxPriorityFeePerGas",
    v: required "v",
    r: required "r",
    s: required "s",
});

/// A log emitted during transaction execution
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry<S: Schema = Standard> {
    /// `true` if the log was dropped by a chain reorganization
    pub removed: bool,
    /// Emitting contract
    pub address: S::Address,
    /// Non-indexed arguments
    pub data: Bytes,
    /// Indexed arguments, event signature first for non-anonymous events
    pub topics: Vec<LogTopic>,
    /// Position in the block
    pub log_index: u64,
    /// Position of the transaction in the block
    pub transaction_index: u64,
    /// Emitting transaction
    pub transaction_hash: TxHash,
    /// Including block
    pub block_hash: BlockHash,
    /// Including block number
    pub block_number: u64,
}

impl_record!(LogEntry {
    removed: required "removed",
    address: required "address",
    data: required "data",
    topics: required "topics",
    log_index: required "logIndex",
    transaction_index: required "transactionIndex",
    transaction_hash: required "transactionHash",
    block_hash: required "blockHash",
    block_number: required "blockNumber",
});

/// Receipt of an executed transaction
#[derive(Debug, Clone, PartialEq)]
pub struct TxReceipt<S: Schema = Standard> {
    /// Including block
    pub block_hash: BlockHash,
    /// Including block number
    pub block_number: u64,
    /// Created contract, if any
    pub contract_address: Option<S::Address>,
    /// Gas used by this and all preceding transactions in the block
    pub cumulative_gas_used: u64,
    /// Price actually paid per gas
    pub effective_gas_price: S::Amount,
    /// Sender
    pub from: S::Address,
    /// Gas used by this transaction
    pub gas_used: u64,
    /// Recipient, `None` for contract creation
    pub to: Option<S::Address>,
    /// Transaction hash
    pub transaction_hash: TxHash,
    /// Position in the block
    pub transaction_index: u64,
    /// EIP-2718 transaction type
    pub tx_type: u64,
    /// 1 on success, 0 on failure
    pub status: u64,
    /// Emitted logs
    pub logs: Vec<LogEntry<S>>,
    /// Bloom filter of the logs
    pub logs_bloom: LogsBloom,
}

impl<S: Schema> TxReceipt<S> {
    /// Whether execution succeeded
    pub fn succeeded(&self) -> bool {
        self.status == 1
    }
}

impl_record!(TxReceipt {
    block_hash: required "blockHash",
    block_number: required "blockNumber",
    contract_address: nullable "contractAddress",
    cumulative_gas_used: required "cumulativeGasUsed",
    effective_gas_price: required "effectiveGasPrice",
    from: required "from",
    gas_used: required "gasUsed",
    to: nullable "to",
    transaction_hash: required "transactionHash",
    transaction_index: required "transactionIndex",
    tx_type: required "type",
    status: required "status",
    logs: required "logs",
    logs_bloom: required "logsBloom",
});

/// Transactions of a block: hashes only, or full objects
///
/// An empty list is indistinguishable on the wire and decodes as
/// [`BlockTransactions::Hashes`].
#[derive(Debug, Clone, PartialEq)]
pub enum BlockTransactions<S: Schema = Standard> {
    /// Transaction hashes
    Hashes(Vec<TxHash>),
    /// Full transaction objects
    Full(Vec<TxInfo<S>>),
}

impl<S: Schema> BlockTransactions<S> {
    /// Number of transactions
    pub fn len(&self) -> usize {
        match self {
            BlockTransactions::Hashes(hashes) => hashes.len(),
            BlockTransactions::Full(txs) => txs.len(),
        }
    }

    /// Whether the block has no transactions
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transaction hashes in block order
    pub fn hashes(&self) -> Vec<TxHash> {
        match self {
            BlockTransactions::Hashes(hashes) => hashes.clone(),
            BlockTransactions::Full(txs) => txs.iter().map(|tx| tx.hash).collect(),
        }
    }
}

impl<S: Schema> Default for BlockTransactions<S> {
    fn default() -> Self {
        BlockTransactions::Hashes(Vec::new())
    }
}

impl<S: Schema> Structure<S> for BlockTransactions<S> {
    fn structure(options: &CodecOptions, value: &Value) -> Result<Self, ValidationError> {
        Alternatives::new(value)
            .or_try("hashes", |v| {
                <Vec<TxHash> as Structure<S>>::structure(options, v).map(BlockTransactions::Hashes)
            })
            .or_try("full", |v| {
                <Vec<TxInfo<S>> as Structure<S>>::structure(options, v)
                    .map(BlockTransactions::Full)
            })
            .finish()
    }
}

impl<S: Schema> Unstructure for BlockTransactions<S> {
    fn unstructure(&self, options: &CodecOptions) -> Value {
        match self {
            BlockTransactions::Hashes(hashes) => hashes.unstructure(options),
            BlockTransactions::Full(txs) => txs.unstructure(options),
        }
    }
}

/// A block as returned by `eth_getBlockByHash` / `eth_getBlockByNumber`
#[derive(Debug, Clone, PartialEq)]
pub struct BlockInfo<S: Schema = Standard> {
    /// Block number
    pub number: u64,
    /// Block hash, `None` while pending
    pub hash: Option<BlockHash>,
    /// Parent block hash
    pub parent_hash: BlockHash,
    /// Proof-of-work nonce, `None` while pending
    pub nonce: Option<BlockNonce>,
    /// Beneficiary, `None` while pending
    pub miner: Option<S::Address>,
    /// Difficulty
    pub difficulty: U256,
    /// Total chain difficulty up to this block
    pub total_difficulty: Option<U256>,
    /// Block size in bytes
    pub size: u64,
    /// Gas limit
    pub gas_limit: u64,
    /// Gas used by all transactions
    pub gas_used: u64,
    /// EIP-1559 base fee
    pub base_fee_per_gas: S::Amount,
    /// Unix timestamp
    pub timestamp: u64,
    /// Included transactions
    pub transactions: BlockTransactions<S>,
    /// Uncle block hashes
    pub uncles: Vec<BlockHash>,
    /// Hash of the uncles list
    pub sha3_uncles: UnclesHash,
    /// Bloom filter of all logs, `None` while pending
    pub logs_bloom: Option<LogsBloom>,
    /// Root of the transaction trie
    pub transactions_root: TrieHash,
    /// Root of the state trie
    pub state_root: TrieHash,
    /// Root of the receipts trie
    pub receipts_root: TrieHash,
    /// Extra data field
    pub extra_data: Bytes,
}

impl_record!(BlockInfo {
    number: required "number",
    hash: nullable "hash",
    parent_hash: required "parentHash",
    nonce: nullable "nonce",
    miner: nullable "miner",
    difficulty: required "difficulty",
    total_difficulty: nullable "totalDifficulty",
    size: required "size",
    gas_limit: required "gasLimit",
    gas_used: required "gasUsed",
    base_fee_per_gas: required "baseFeePerGas",
    timestamp: required "timestamp",
    transactions: required "transactions",
    uncles: required "uncles",
    sha3_uncles: required "sha3Uncles",
    logs_bloom: nullable "logsBloom",
    transactions_root: required "transactionsRoot",
    state_root: required "stateRoot",
    receipts_root: required "receiptsRoot",
    extra_data: required "extraData",
});
