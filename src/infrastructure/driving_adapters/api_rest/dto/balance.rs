//! Transaction History DTOs

use serde::Serialize;

use crate::domain::models::amount::format_ether;
use crate::domain::models::TransactionSummary;

/// One history row; `value` is in ether
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub hash: String,
    pub from: String,
    pub to: Option<String>,
    pub value: String,
    pub block_number: u64,
    pub timestamp: u64,
}

impl From<TransactionSummary> for TransactionDto {
    fn from(tx: TransactionSummary) -> Self {
        Self {
            hash: tx.hash.to_string(),
            from: tx.from.to_string(),
            to: tx.to.map(|to| to.to_string()),
            value: format_ether(tx.value),
            block_number: tx.block_number,
            timestamp: tx.timestamp,
        }
    }
}

/// Response for `GET /transactions/{address}`
#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionDto>,
}

impl From<Vec<TransactionSummary>> for TransactionsResponse {
    fn from(transactions: Vec<TransactionSummary>) -> Self {
        Self {
            transactions: transactions.into_iter().map(TransactionDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, TxHash, U256};
    use serde_json::json;

    #[test]
    fn test_transaction_row_shape() {
        let body = serde_json::to_value(TransactionDto::from(TransactionSummary {
            hash: TxHash::repeat_byte(0x01),
            from: Address::repeat_byte(0x02),
            to: None,
            value: U256::from(250_000_000_000_000_000u64),
            block_number: 7,
            timestamp: 1_700_000_084,
        }))
        .unwrap();

        assert_eq!(body["value"], "0.25");
        assert_eq!(body["blockNumber"], 7);
        assert_eq!(body["to"], json!(null));
        assert_eq!(body["timestamp"], 1_700_000_084);
    }
}
