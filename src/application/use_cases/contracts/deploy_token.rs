//! Deploy Token Use Case
//!
//! Deploys a new instance of the token contract and appends it to the
//! network's deployed-token list. This does not touch the registry's
//! per-network contract.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::application::registry::NetworkContractRegistry;
use crate::domain::gateways::ContractArtifactSource;
use crate::domain::models::amount::ether_to_wei;
use crate::domain::models::{DeployedTokenRecord, NetworkName};
use crate::shared::errors::UseCaseError;

/// Parameters of a token deployment
#[derive(Debug, Clone)]
pub struct NewToken {
    pub name: String,
    pub symbol: String,
    /// Whole tokens minted to the deployer
    pub initial_supply: Decimal,
}

impl NewToken {
    fn validate(&self) -> Result<(), UseCaseError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("name: Name is required".to_string());
        }
        if self.symbol.trim().is_empty() {
            errors.push("symbol: Symbol is required".to_string());
        }
        if self.initial_supply <= Decimal::ZERO {
            errors.push("initialSupply: Initial supply must be a positive number".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(UseCaseError::Validation(errors))
        }
    }
}

/// A freshly deployed token together with the contract ABI
#[derive(Debug, Clone)]
pub struct DeployedToken {
    pub record: DeployedTokenRecord,
    pub abi: Value,
}

/// Use case for deploying a new token contract
pub struct DeployTokenUseCase {
    registry: Arc<NetworkContractRegistry>,
    artifacts: Arc<dyn ContractArtifactSource>,
}

impl DeployTokenUseCase {
    #[must_use]
    pub fn new(registry: Arc<NetworkContractRegistry>, artifacts: Arc<dyn ContractArtifactSource>) -> Self {
        Self { registry, artifacts }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` for a blank name or symbol or a
    /// non-positive supply, before any chain access. Chain, artifact and
    /// configuration failures are passed through.
    pub async fn execute(&self, network: NetworkName, token: NewToken) -> Result<DeployedToken, UseCaseError> {
        token.validate()?;
        let supply = ether_to_wei(token.initial_supply)?;

        let signer = self.registry.provider_and_signer(network)?;
        let artifact = self.artifacts.load().await?;

        tracing::info!(%network, name = %token.name, symbol = %token.symbol, supply = %token.initial_supply, "Deploying token");
        let address = signer.deploy_token(artifact.bytecode, supply).await?;
        tracing::info!(%network, %address, name = %token.name, "Token deployed");

        let record = DeployedTokenRecord {
            address,
            name: token.name,
            symbol: token.symbol,
            initial_supply: token.initial_supply,
            network,
        };
        self.registry.add_deployed_token(record.clone()).await;

        Ok(DeployedToken {
            record,
            abi: artifact.abi,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::registry::test_support::{artifact_source, registry};
    use crate::infrastructure::driven_adapters::chain::InMemoryChain;
    use rust_decimal_macros::dec;

    fn foo() -> NewToken {
        NewToken {
            name: "Foo".to_string(),
            symbol: "FOO".to_string(),
            initial_supply: dec!(100),
        }
    }

    #[tokio::test]
    async fn should_append_one_record_per_deployment() {
        let chain = InMemoryChain::new();
        let registry = registry(&chain);
        let use_case = DeployTokenUseCase::new(registry.clone(), artifact_source());

        let first = use_case.execute(NetworkName::Localhost, foo()).await.unwrap();
        assert_eq!(registry.deployed_tokens(NetworkName::Localhost).await.len(), 1);

        let second = use_case.execute(NetworkName::Localhost, foo()).await.unwrap();
        let tokens = registry.deployed_tokens(NetworkName::Localhost).await;

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], first.record);
        assert_eq!(tokens[1], second.record);
        assert_ne!(first.record.address, second.record.address);
        assert_eq!(first.record.initial_supply, dec!(100));
    }

    #[tokio::test]
    async fn should_not_replace_the_registry_contract() {
        let chain = InMemoryChain::new();
        let registry = registry(&chain);
        let use_case = DeployTokenUseCase::new(registry.clone(), artifact_source());

        use_case.execute(NetworkName::Localhost, foo()).await.unwrap();

        assert!(registry.contract_address(NetworkName::Localhost).await.is_none());
    }

    #[tokio::test]
    async fn should_reject_invalid_parameters_before_deploying() {
        let chain = InMemoryChain::new();
        let use_case = DeployTokenUseCase::new(registry(&chain), artifact_source());

        let result = use_case
            .execute(
                NetworkName::Localhost,
                NewToken {
                    name: " ".to_string(),
                    symbol: String::new(),
                    initial_supply: dec!(0),
                },
            )
            .await;

        match result {
            Err(UseCaseError::Validation(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(chain.connection_count(), 0);
    }
}
