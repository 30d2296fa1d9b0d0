//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - EVM nodes (alloy) and the in-memory chain
//! - Contract artifact on disk
//! - Block explorer and payment processor HTTP clients
//! - Configuration

pub mod artifact;
pub mod chain;
pub mod coingate;
pub mod config;
pub mod etherscan;
mod http;
pub mod nowpayments;

pub use artifact::FileContractArtifactSource;
pub use chain::AlloyChainConnector;
#[cfg(any(test, feature = "test-utils"))]
pub use chain::InMemoryChain;
pub use coingate::CoinGateClient;
pub use config::AppConfig;
pub use etherscan::EtherscanExplorer;
pub use nowpayments::NowPaymentsClient;
