//! Get Contract Info Use Case
//!
//! Returns the network's token contract, deploying it on first request.

use std::sync::Arc;

use alloy_primitives::Address;
use serde_json::Value;

use crate::application::registry::NetworkContractRegistry;
use crate::domain::gateways::ContractArtifactSource;
use crate::domain::models::NetworkName;
use crate::shared::errors::UseCaseError;

/// Address and interface of a network's token contract
#[derive(Debug, Clone)]
pub struct ContractInfo {
    pub address: Address,
    pub abi: Value,
    pub network: NetworkName,
}

/// Use case for looking up (or provisioning) the network's contract
pub struct GetContractInfoUseCase {
    registry: Arc<NetworkContractRegistry>,
    artifacts: Arc<dyn ContractArtifactSource>,
}

impl GetContractInfoUseCase {
    #[must_use]
    pub fn new(registry: Arc<NetworkContractRegistry>, artifacts: Arc<dyn ContractArtifactSource>) -> Self {
        Self { registry, artifacts }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns the registry's error if the contract could not be provisioned, or
    /// `UseCaseError::Artifact` if the ABI cannot be read.
    pub async fn execute(&self, network: NetworkName) -> Result<ContractInfo, UseCaseError> {
        let record = self.registry.contract_instance(network).await?;
        // ABI is read per request so a recompiled contract is served without restart
        let artifact = self.artifacts.load().await?;

        Ok(ContractInfo {
            address: record.address(),
            abi: artifact.abi,
            network,
        })
    }
}
