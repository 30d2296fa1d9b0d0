//! Get Health Use Case

use std::sync::Arc;

use alloy_primitives::Address;

use crate::application::registry::NetworkContractRegistry;

/// Liveness plus the default network's contract state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub contract_deployed: bool,
    pub contract_address: Option<Address>,
}

/// Use case for the health probe; never touches the chain
pub struct GetHealthUseCase {
    registry: Arc<NetworkContractRegistry>,
}

impl GetHealthUseCase {
    #[must_use]
    pub fn new(registry: Arc<NetworkContractRegistry>) -> Self {
        Self { registry }
    }

    pub async fn execute(&self) -> HealthStatus {
        let contract_address = self.registry.contract_address(self.registry.default_network()).await;
        HealthStatus {
            contract_deployed: contract_address.is_some(),
            contract_address,
        }
    }
}
