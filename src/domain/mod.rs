//! Domain Layer
//!
//! Contains the gateway traits (ports) and the models that flow through them.
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{
    ChainConnector, ChainReader, ChainSigner, CoinGateGateway, ContractArtifactSource, NowPaymentsGateway,
    TransactionExplorer,
};
pub use models::{ContractRecord, DeployedTokenRecord, NetworkConfig, NetworkName};
