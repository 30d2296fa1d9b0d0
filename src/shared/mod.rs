//! Shared Module
//!
//! Cross-cutting utilities and types used across the application.

pub mod errors;
pub mod secret;
pub mod serde_helpers;

pub use errors::{ApiError, ArtifactError, ChainError, DomainError, ProviderError, UseCaseError};
pub use secret::SecretString;
