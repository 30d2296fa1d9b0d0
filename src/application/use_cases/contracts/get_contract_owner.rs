//! Get Contract Owner Use Case

use std::sync::Arc;

use alloy_primitives::Address;

use crate::application::registry::NetworkContractRegistry;
use crate::domain::models::NetworkName;
use crate::shared::errors::UseCaseError;

/// Use case for reading `owner()` of the network's token contract
pub struct GetContractOwnerUseCase {
    registry: Arc<NetworkContractRegistry>,
}

impl GetContractOwnerUseCase {
    #[must_use]
    pub fn new(registry: Arc<NetworkContractRegistry>) -> Self {
        Self { registry }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns the registry error if no contract can be provisioned, or the chain error.
    pub async fn execute(&self, network: NetworkName) -> Result<Address, UseCaseError> {
        let record = self.registry.contract_instance(network).await?;
        Ok(record.contract().owner().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::registry::test_support::registry;
    use crate::infrastructure::driven_adapters::chain::InMemoryChain;

    #[tokio::test]
    async fn should_return_the_deployer_as_owner() {
        let registry = registry(&InMemoryChain::new());
        let deployer = registry.provider_and_signer(NetworkName::Localhost).unwrap().signer_address();
        let use_case = GetContractOwnerUseCase::new(registry);

        assert_eq!(use_case.execute(NetworkName::Localhost).await.unwrap(), deployer);
    }
}
