//! Block Explorer Gateway

use alloy_primitives::Address;
use async_trait::async_trait;

use crate::domain::models::network::NetworkName;
use crate::domain::models::transaction::TransactionSummary;
use crate::shared::errors::ProviderError;

/// Hosted transaction index for public networks
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransactionExplorer: Send + Sync {
    /// Whether an API key is configured
    fn is_configured(&self) -> bool;

    /// Most recent transactions of `address`, newest first, at most `limit`
    async fn recent_transactions(
        &self,
        network: NetworkName,
        address: Address,
        limit: usize,
    ) -> Result<Vec<TransactionSummary>, ProviderError>;
}
