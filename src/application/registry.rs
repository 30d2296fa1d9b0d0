//! Network Contract Registry
//!
//! Per-network memo of the deployed token contract and the history of tokens
//! deployed through the API. State lives only as long as the process.
//!
//! Deploy-on-demand is serialized per network: concurrent first callers for
//! the same network wait on one deployment and all receive its record.
//! Explicit deployments through [`NetworkContractRegistry::deploy_contract_for_network`]
//! are not guarded and replace the current record.

use std::collections::HashMap;
use std::sync::Arc;

use alloy_primitives::{Address, U256};
use tokio::sync::{Mutex, RwLock};

use crate::domain::gateways::{ChainConnector, ChainReader, ChainSigner, ContractArtifactSource};
use crate::domain::models::{ContractRecord, DeployedTokenRecord, NetworkConfig, NetworkName, TokenContract};
use crate::shared::errors::UseCaseError;

/// 1,000,000 tokens with 18 decimals
const DEFAULT_INITIAL_SUPPLY: U256 = U256::from_limbs([0x1bce_cced_a100_0000, 0xd3c2, 0, 0]);

pub struct NetworkContractRegistry {
    networks: HashMap<NetworkName, NetworkConfig>,
    connector: Arc<dyn ChainConnector>,
    artifacts: Arc<dyn ContractArtifactSource>,
    initial_supply: U256,
    default_network: NetworkName,
    records: RwLock<HashMap<NetworkName, ContractRecord>>,
    deploy_guards: Mutex<HashMap<NetworkName, Arc<Mutex<()>>>>,
    deployed_tokens: RwLock<HashMap<NetworkName, Vec<DeployedTokenRecord>>>,
}

impl NetworkContractRegistry {
    #[must_use]
    pub fn new(
        networks: impl IntoIterator<Item = NetworkConfig>,
        connector: Arc<dyn ChainConnector>,
        artifacts: Arc<dyn ContractArtifactSource>,
    ) -> Self {
        Self {
            networks: networks.into_iter().map(|config| (config.name(), config)).collect(),
            connector,
            artifacts,
            initial_supply: DEFAULT_INITIAL_SUPPLY,
            default_network: NetworkName::default(),
            records: RwLock::new(HashMap::new()),
            deploy_guards: Mutex::new(HashMap::new()),
            deployed_tokens: RwLock::new(HashMap::new()),
        }
    }

    /// Supply (in base units) minted by registry deployments
    #[must_use]
    pub fn with_initial_supply(mut self, initial_supply: U256) -> Self {
        self.initial_supply = initial_supply;
        self
    }

    #[must_use]
    pub fn with_default_network(mut self, network: NetworkName) -> Self {
        self.default_network = network;
        self
    }

    #[must_use]
    pub fn default_network(&self) -> NetworkName {
        self.default_network
    }

    fn network_config(&self, network: NetworkName) -> Result<&NetworkConfig, UseCaseError> {
        self.networks
            .get(&network)
            .ok_or_else(|| UseCaseError::Configuration(format!("Unsupported network: {network}")))
    }

    fn rpc_url(&self, network: NetworkName) -> Result<&str, UseCaseError> {
        self.network_config(network)?
            .rpc_url()
            .ok_or_else(|| UseCaseError::Configuration(format!("RPC URL not configured for network: {network}")))
    }

    /// Signing client for `network`, built from its static settings
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Configuration` if the network is not configured or
    /// lacks an RPC URL or private key.
    pub fn provider_and_signer(&self, network: NetworkName) -> Result<Arc<dyn ChainSigner>, UseCaseError> {
        let rpc_url = self.rpc_url(network)?;
        let key = self
            .network_config(network)?
            .private_key()
            .ok_or_else(|| UseCaseError::Configuration(format!("Private key not configured for network: {network}")))?;
        Ok(self.connector.signer(network, rpc_url, key)?)
    }

    /// Read-only client for `network`; built fresh on every call
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Configuration` if the network has no RPC URL.
    pub fn reader(&self, network: NetworkName) -> Result<Arc<dyn ChainReader>, UseCaseError> {
        let rpc_url = self.rpc_url(network)?;
        Ok(self.connector.reader(network, rpc_url)?)
    }

    async fn deploy(&self, network: NetworkName) -> Result<ContractRecord, UseCaseError> {
        let signer = self.provider_and_signer(network)?;
        let artifact = self.artifacts.load().await?;

        tracing::info!(%network, deployer = %signer.signer_address(), "Deploying token contract");
        let address = signer.deploy_token(artifact.bytecode, self.initial_supply).await?;

        let record = ContractRecord::new(network, TokenContract::new(address, signer));
        self.records.write().await.insert(network, record.clone());
        tracing::info!(%network, %address, "Token contract deployed");
        Ok(record)
    }

    /// Deploy a fresh contract on `network` and make it the network's record
    ///
    /// Failures are logged and reported as `None`.
    pub async fn deploy_contract_for_network(&self, network: NetworkName) -> Option<ContractRecord> {
        match self.deploy(network).await {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::error!(%network, error = %e, "Contract deployment failed");
                None
            }
        }
    }

    /// The network's contract, deployed on first use
    ///
    /// # Errors
    ///
    /// Returns the configuration or artifact error that prevented the
    /// deployment, or `UseCaseError::ContractUnavailable` when the chain
    /// rejected it. No record is stored in that case, so a later call retries.
    pub async fn contract_instance(&self, network: NetworkName) -> Result<ContractRecord, UseCaseError> {
        if let Some(record) = self.records.read().await.get(&network) {
            return Ok(record.clone());
        }

        let guard = self.deploy_guards.lock().await.entry(network).or_default().clone();
        let _deploying = guard.lock().await;

        // Another caller may have finished the deployment while we waited
        if let Some(record) = self.records.read().await.get(&network) {
            return Ok(record.clone());
        }
        self.deploy(network).await.map_err(|e| match e {
            UseCaseError::Chain(err) => {
                tracing::error!(%network, error = %err, "On-demand deployment failed");
                UseCaseError::ContractUnavailable(format!("Contract not initialized on {network}: {err}"))
            }
            other => other,
        })
    }

    /// Address of the network's contract, if one was deployed by this process
    pub async fn contract_address(&self, network: NetworkName) -> Option<Address> {
        self.records.read().await.get(&network).map(ContractRecord::address)
    }

    /// Tokens deployed through the API on `network`, oldest first
    pub async fn deployed_tokens(&self, network: NetworkName) -> Vec<DeployedTokenRecord> {
        self.deployed_tokens.write().await.entry(network).or_default().clone()
    }

    pub async fn add_deployed_token(&self, record: DeployedTokenRecord) {
        self.deployed_tokens
            .write()
            .await
            .entry(record.network)
            .or_default()
            .push(record);
    }

    /// Eagerly provision the default network's contract
    pub async fn initialize_default_network(&self) -> Option<ContractRecord> {
        let network = self.default_network;
        match self.contract_instance(network).await {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::error!(%network, error = %e, "Default network initialization failed");
                None
            }
        }
    }
}
