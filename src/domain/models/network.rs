//! Network Domain Model
//!
//! The fixed set of blockchain networks the gateway can talk to, and the
//! static per-network connection settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::errors::DomainError;
use crate::shared::SecretString;

/// A recognized network name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkName {
    /// Local development chain (Ganache / Hardhat node)
    #[default]
    Localhost,
    Sepolia,
    Holesky,
}

impl NetworkName {
    pub const ALL: [NetworkName; 3] = [Self::Localhost, Self::Sepolia, Self::Holesky];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Localhost => "localhost",
            Self::Sepolia => "sepolia",
            Self::Holesky => "holesky",
        }
    }

    /// Local chains have no indexer, so history is scanned block by block
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Localhost)
    }
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| DomainError::UnsupportedNetwork(s.to_string()))
    }
}

/// Static connection settings for one network, fixed at process start
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    name: NetworkName,
    rpc_url: Option<String>,
    private_key: Option<SecretString>,
}

impl NetworkConfig {
    #[must_use]
    pub fn new(name: NetworkName, rpc_url: Option<String>, private_key: Option<SecretString>) -> Self {
        // Blank values come from env vars that exist but are empty
        let rpc_url = rpc_url.filter(|url| !url.trim().is_empty());
        let private_key = private_key.filter(|key| !key.is_blank());
        Self {
            name,
            rpc_url,
            private_key,
        }
    }

    #[must_use]
    pub fn name(&self) -> NetworkName {
        self.name
    }

    #[must_use]
    pub fn rpc_url(&self) -> Option<&str> {
        self.rpc_url.as_deref()
    }

    #[must_use]
    pub fn private_key(&self) -> Option<&SecretString> {
        self.private_key.as_ref()
    }
}
