//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod artifact_source;
pub mod chain;
pub mod explorer;
pub mod payment_provider;

pub use artifact_source::ContractArtifactSource;
pub use chain::{ChainConnector, ChainReader, ChainSigner};
pub use explorer::TransactionExplorer;
pub use payment_provider::{CoinGateGateway, NowPaymentsGateway};
