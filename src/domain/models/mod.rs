//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod amount;
pub mod contract;
pub mod network;
pub mod payment;
pub mod transaction;

pub use contract::{ContractArtifact, ContractRecord, DeployedTokenRecord, TokenContract};
pub use network::{NetworkConfig, NetworkName};
pub use payment::{
    CoinGateCurrency, CoinGateOrder, Invoice, NewCoinGateOrder, NewInvoice, PayCurrency, PaymentStatus,
};
pub use transaction::{ChainTransaction, TransactionOutcome, TransactionSummary};
