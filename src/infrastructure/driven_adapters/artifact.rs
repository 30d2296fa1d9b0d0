//! Contract Artifact Loader
//!
//! Reads the Hardhat build output of the token contract from disk. The file
//! is read on every call so a recompiled contract is picked up without a
//! restart.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use alloy_primitives::Bytes;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::gateways::ContractArtifactSource;
use crate::domain::models::ContractArtifact;
use crate::shared::errors::ArtifactError;

#[derive(Debug, Deserialize)]
struct HardhatArtifact {
    abi: Value,
    #[serde(default)]
    bytecode: String,
}

/// Hardhat artifact JSON on the local filesystem
#[derive(Debug, Clone)]
pub struct FileContractArtifactSource {
    path: PathBuf,
}

impl FileContractArtifactSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ContractArtifactSource for FileContractArtifactSource {
    async fn load(&self) -> Result<ContractArtifact, ArtifactError> {
        let raw = tokio::fs::read(&self.path).await.map_err(|e| ArtifactError::Unreadable {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        let artifact: HardhatArtifact =
            serde_json::from_slice(&raw).map_err(|e| ArtifactError::Malformed(e.to_string()))?;

        if !artifact.abi.is_array() {
            return Err(ArtifactError::Malformed("abi is not an array".to_string()));
        }
        let bytecode =
            Bytes::from_str(artifact.bytecode.trim()).map_err(|e| ArtifactError::Malformed(format!("bytecode: {e}")))?;
        if bytecode.is_empty() {
            return Err(ArtifactError::Malformed("bytecode is empty".to_string()));
        }

        Ok(ContractArtifact {
            abi: artifact.abi,
            bytecode,
        })
    }
}
