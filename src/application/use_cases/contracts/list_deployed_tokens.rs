//! List Deployed Tokens Use Case

use std::sync::Arc;

use crate::application::registry::NetworkContractRegistry;
use crate::domain::models::{DeployedTokenRecord, NetworkName};

/// Use case for listing tokens deployed through the API
pub struct ListDeployedTokensUseCase {
    registry: Arc<NetworkContractRegistry>,
}

impl ListDeployedTokensUseCase {
    #[must_use]
    pub fn new(registry: Arc<NetworkContractRegistry>) -> Self {
        Self { registry }
    }

    /// Execute the use case; an unseen network yields an empty list
    pub async fn execute(&self, network: NetworkName) -> Vec<DeployedTokenRecord> {
        self.registry.deployed_tokens(network).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::registry::test_support::registry;
    use crate::infrastructure::driven_adapters::chain::InMemoryChain;
    use alloy_primitives::Address;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn should_list_only_the_requested_network() {
        let registry = registry(&InMemoryChain::new());
        registry
            .add_deployed_token(DeployedTokenRecord {
                address: Address::repeat_byte(1),
                name: "Bar".to_string(),
                symbol: "BAR".to_string(),
                initial_supply: dec!(5),
                network: NetworkName::Sepolia,
            })
            .await;
        let use_case = ListDeployedTokensUseCase::new(registry);

        assert_eq!(use_case.execute(NetworkName::Sepolia).await.len(), 1);
        assert!(use_case.execute(NetworkName::Localhost).await.is_empty());
    }
}
