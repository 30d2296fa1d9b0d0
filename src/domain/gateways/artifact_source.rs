//! Contract Artifact Gateway

use async_trait::async_trait;

use crate::domain::models::contract::ContractArtifact;
use crate::shared::errors::ArtifactError;

/// Source of the compiled token contract (ABI + creation bytecode)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContractArtifactSource: Send + Sync {
    /// Load the artifact; implementations read it fresh on every call
    async fn load(&self) -> Result<ContractArtifact, ArtifactError>;
}
