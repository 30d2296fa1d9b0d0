//! Get Token Balance Use Case

use std::sync::Arc;

use alloy_primitives::Address;

use crate::application::registry::NetworkContractRegistry;
use crate::domain::models::amount::format_ether;
use crate::domain::models::NetworkName;
use crate::shared::errors::UseCaseError;

/// Use case for reading an account's balance of the network's token
pub struct GetTokenBalanceUseCase {
    registry: Arc<NetworkContractRegistry>,
}

impl GetTokenBalanceUseCase {
    #[must_use]
    pub fn new(registry: Arc<NetworkContractRegistry>) -> Self {
        Self { registry }
    }

    /// Execute the use case, returning the balance in whole tokens (18 decimals)
    ///
    /// # Errors
    ///
    /// Returns the registry error if no contract can be provisioned, or the chain error.
    pub async fn execute(&self, network: NetworkName, account: Address) -> Result<String, UseCaseError> {
        let record = self.registry.contract_instance(network).await?;
        let balance = record.contract().balance_of(account).await?;
        tracing::debug!(%network, %account, %balance, "Token balance fetched");
        Ok(format_ether(balance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::registry::test_support::registry;
    use crate::infrastructure::driven_adapters::chain::InMemoryChain;

    #[tokio::test]
    async fn should_format_balance_in_whole_tokens() {
        let registry = registry(&InMemoryChain::new());
        let owner = registry
            .contract_instance(NetworkName::Localhost)
            .await
            .unwrap()
            .contract()
            .owner()
            .await
            .unwrap();
        let use_case = GetTokenBalanceUseCase::new(registry);

        assert_eq!(use_case.execute(NetworkName::Localhost, owner).await.unwrap(), "1000000.0");
        assert_eq!(
            use_case
                .execute(NetworkName::Localhost, Address::repeat_byte(0x42))
                .await
                .unwrap(),
            "0.0"
        );
    }
}
