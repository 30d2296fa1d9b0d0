//! Get Transaction History Use Case
//!
//! The local development chain has no indexer, so its history is recovered
//! by scanning recent blocks for logs emitted at the address. Public test
//! networks are served by the block explorer.

use std::collections::HashSet;
use std::sync::Arc;

use alloy_primitives::Address;

use crate::application::registry::NetworkContractRegistry;
use crate::domain::gateways::TransactionExplorer;
use crate::domain::models::{NetworkName, TransactionSummary};
use crate::shared::errors::UseCaseError;

/// Number of most recent blocks scanned on local networks
pub const LOCAL_SCAN_DEPTH: u64 = 100;

/// Use case for an address's recent transactions
pub struct GetTransactionHistoryUseCase {
    registry: Arc<NetworkContractRegistry>,
    explorer: Arc<dyn TransactionExplorer>,
    limit: usize,
}

impl GetTransactionHistoryUseCase {
    #[must_use]
    pub fn new(registry: Arc<NetworkContractRegistry>, explorer: Arc<dyn TransactionExplorer>, limit: usize) -> Self {
        Self {
            registry,
            explorer,
            limit,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Configuration` when the explorer has no API key,
    /// and chain or explorer errors verbatim.
    pub async fn execute(&self, network: NetworkName, address: Address) -> Result<Vec<TransactionSummary>, UseCaseError> {
        if network.is_local() {
            return self.scan_recent_blocks(network, address).await;
        }

        if !self.explorer.is_configured() {
            return Err(UseCaseError::Configuration("Etherscan API key not configured".to_string()));
        }
        Ok(self.explorer.recent_transactions(network, address, self.limit).await?)
    }

    async fn scan_recent_blocks(
        &self,
        network: NetworkName,
        address: Address,
    ) -> Result<Vec<TransactionSummary>, UseCaseError> {
        let reader = self.registry.reader(network)?;
        let latest = reader.block_number().await?;
        let from_block = latest.saturating_sub(LOCAL_SCAN_DEPTH);
        tracing::debug!(%network, %address, from_block, to_block = latest, "Scanning blocks for logs");

        let hashes = reader.log_transaction_hashes(address, from_block, latest).await?;

        // A transaction emitting several logs is listed once
        let mut seen = HashSet::new();
        let mut transactions = Vec::new();
        for hash in hashes.into_iter().filter(|hash| seen.insert(*hash)) {
            let Some(tx) = reader.transaction(hash).await? else {
                continue;
            };
            let Some(block_number) = tx.block_number else {
                continue;
            };
            let timestamp = reader.block_timestamp(block_number).await?.unwrap_or_default();
            transactions.push(TransactionSummary {
                hash: tx.hash,
                from: tx.from,
                to: tx.to,
                value: tx.value,
                block_number,
                timestamp,
            });
        }
        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::registry::test_support::registry;
    use crate::domain::gateways::explorer::MockTransactionExplorer;
    use crate::infrastructure::driven_adapters::chain::InMemoryChain;
    use crate::shared::errors::ProviderError;
    use alloy_primitives::{TxHash, U256};

    fn unused_explorer() -> Arc<dyn TransactionExplorer> {
        let mut explorer = MockTransactionExplorer::new();
        explorer.expect_is_configured().never();
        explorer.expect_recent_transactions().never();
        Arc::new(explorer)
    }

    #[tokio::test]
    async fn should_scan_local_logs_with_block_timestamps() {
        let chain = InMemoryChain::new();
        let token = Address::repeat_byte(0x77);
        let sender = Address::repeat_byte(0x01);
        chain.record_logged_transfer(sender, token, U256::from(5u64)).await;
        chain.record_logged_transfer(sender, Address::repeat_byte(0x78), U256::ZERO).await;
        chain.record_logged_transfer(sender, token, U256::ZERO).await;
        let use_case = GetTransactionHistoryUseCase::new(registry(&chain), unused_explorer(), 10);

        let txs = use_case.execute(NetworkName::Localhost, token).await.unwrap();

        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].block_number, 1);
        assert_eq!(txs[0].from, sender);
        assert_eq!(txs[0].value, U256::from(5u64));
        assert_eq!(txs[0].timestamp, 1_700_000_012);
        assert_eq!(txs[1].block_number, 3);
    }

    #[tokio::test]
    async fn should_list_a_transaction_with_several_logs_once() {
        let chain = InMemoryChain::new();
        let token = Address::repeat_byte(0x77);
        let first = chain.record_logged_transfer(Address::repeat_byte(0x01), token, U256::ZERO).await;
        chain.record_logged_transfer(Address::repeat_byte(0x02), token, U256::ZERO).await;
        chain.record_extra_log(first.hash, token).await;
        let use_case = GetTransactionHistoryUseCase::new(registry(&chain), unused_explorer(), 10);

        let txs = use_case.execute(NetworkName::Localhost, token).await.unwrap();

        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].hash, first.hash);
        assert_eq!(txs[1].block_number, 2);
    }

    #[tokio::test]
    async fn should_use_explorer_for_public_networks() {
        let chain = InMemoryChain::new();
        let mut explorer = MockTransactionExplorer::new();
        explorer.expect_is_configured().return_const(true);
        explorer
            .expect_recent_transactions()
            .withf(|network, _, limit| *network == NetworkName::Sepolia && *limit == 10)
            .times(1)
            .returning(|_, address, _| {
                Ok(vec![TransactionSummary {
                    hash: TxHash::repeat_byte(0xab),
                    from: address,
                    to: None,
                    value: U256::ZERO,
                    block_number: 9,
                    timestamp: 1_700_000_000,
                }])
            });
        let use_case = GetTransactionHistoryUseCase::new(registry(&chain), Arc::new(explorer), 10);

        let txs = use_case.execute(NetworkName::Sepolia, Address::repeat_byte(2)).await.unwrap();

        assert_eq!(txs.len(), 1);
        assert_eq!(chain.connection_count(), 0);
    }

    #[tokio::test]
    async fn should_require_explorer_key_for_public_networks() {
        let mut explorer = MockTransactionExplorer::new();
        explorer.expect_is_configured().return_const(false);
        explorer.expect_recent_transactions().never();
        let use_case = GetTransactionHistoryUseCase::new(registry(&InMemoryChain::new()), Arc::new(explorer), 10);

        let err = use_case.execute(NetworkName::Holesky, Address::ZERO).await.unwrap_err();

        assert!(matches!(err, UseCaseError::Configuration(ref m) if m == "Etherscan API key not configured"));
    }

    #[tokio::test]
    async fn should_pass_explorer_errors_through() {
        let mut explorer = MockTransactionExplorer::new();
        explorer.expect_is_configured().return_const(true);
        explorer
            .expect_recent_transactions()
            .returning(|_, _, _| Err(ProviderError::Upstream("Max rate limit reached".to_string())));
        let use_case = GetTransactionHistoryUseCase::new(registry(&InMemoryChain::new()), Arc::new(explorer), 10);

        let err = use_case.execute(NetworkName::Sepolia, Address::ZERO).await.unwrap_err();

        assert_eq!(err.to_string(), "Max rate limit reached");
    }
}
