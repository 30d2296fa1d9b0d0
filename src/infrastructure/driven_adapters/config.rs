//! Application Configuration
//!
//! Loads configuration from files and environment variables. Credentials are
//! optional here; a missing key only fails the request that needs it.

use std::collections::HashMap;

use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::nowpayments;
use crate::domain::models::{NetworkConfig, NetworkName};
use crate::shared::SecretString;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// RPC endpoint and signer of one network
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkSettings {
    #[serde(default)]
    pub rpc_url: Option<String>,
    #[serde(default)]
    pub private_key: Option<SecretString>,
}

/// Per-network settings, keyed by the recognized network names
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworksConfig {
    #[serde(default)]
    pub localhost: NetworkSettings,
    #[serde(default)]
    pub sepolia: NetworkSettings,
    #[serde(default)]
    pub holesky: NetworkSettings,
}

impl NetworksConfig {
    #[must_use]
    pub fn settings(&self, network: NetworkName) -> &NetworkSettings {
        match network {
            NetworkName::Localhost => &self.localhost,
            NetworkName::Sepolia => &self.sepolia,
            NetworkName::Holesky => &self.holesky,
        }
    }
}

/// Token contract build output and registry deployment parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ContractConfig {
    pub artifact_path: String,
    pub default_network: NetworkName,
    /// Whole tokens minted to the signer by registry deployments
    pub initial_supply: Decimal,
}

/// Block explorer used for testnet transaction history
#[derive(Debug, Clone, Deserialize)]
pub struct EtherscanConfig {
    #[serde(default)]
    pub api_key: Option<SecretString>,
    pub sepolia_url: String,
    pub holesky_url: String,
    pub history_limit: usize,
}

impl EtherscanConfig {
    #[must_use]
    pub fn base_urls(&self) -> HashMap<NetworkName, String> {
        HashMap::from([
            (NetworkName::Sepolia, self.sepolia_url.clone()),
            (NetworkName::Holesky, self.holesky_url.clone()),
        ])
    }
}

/// CoinGate merchant API
#[derive(Debug, Clone, Deserialize)]
pub struct CoinGateConfig {
    #[serde(default)]
    pub api_key: Option<SecretString>,
    pub sandbox: bool,
    #[serde(default)]
    pub base_url: Option<String>,
}

/// NowPayments API and the URLs handed to it for callbacks and redirects
#[derive(Debug, Clone, Deserialize)]
pub struct NowPaymentsConfig {
    #[serde(default)]
    pub api_key: Option<SecretString>,
    #[serde(default = "default_nowpayments_base_url")]
    pub base_url: String,
    pub ipn_base_url: String,
    pub frontend_url: String,
}

fn default_nowpayments_base_url() -> String {
    nowpayments::DEFAULT_BASE_URL.to_string()
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub networks: NetworksConfig,
    pub contract: ContractConfig,
    pub etherscan: EtherscanConfig,
    pub coingate: CoinGateConfig,
    pub nowpayments: NowPaymentsConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `config/default.toml` is missing or a value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Config::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(true))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Override with environment variables (e.g., APP__NETWORKS__SEPOLIA__PRIVATE_KEY)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Static settings of every recognized network
    #[must_use]
    pub fn network_configs(&self) -> Vec<NetworkConfig> {
        NetworkName::ALL
            .into_iter()
            .map(|name| {
                let settings = self.networks.settings(name);
                NetworkConfig::new(name, settings.rpc_url.clone(), settings.private_key.clone())
            })
            .collect()
    }

    /// Where NowPayments should post instant payment notifications
    #[must_use]
    pub fn ipn_callback_url(&self) -> String {
        format!("{}/api/nowpayments/ipn", self.nowpayments.ipn_base_url.trim_end_matches('/'))
    }
}
