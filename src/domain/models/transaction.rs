//! Transaction Models

use alloy_primitives::{Address, TxHash, U256};

/// A transaction as reported by a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainTransaction {
    pub hash: TxHash,
    pub from: Address,
    pub to: Option<Address>,
    pub value: U256,
    pub block_number: Option<u64>,
}

/// Summary row of an address's transaction history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSummary {
    pub hash: TxHash,
    pub from: Address,
    pub to: Option<Address>,
    /// Value in wei
    pub value: U256,
    pub block_number: u64,
    pub timestamp: u64,
}

/// Result of a confirmed transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionOutcome {
    pub hash: TxHash,
    pub block_number: Option<u64>,
}
