//! Token Contract Use Cases
//!
//! The registry-backed contract, explicitly deployed tokens, owner transfers
//! and relaying of transactions signed elsewhere.

mod deploy_token;
mod get_contract_info;
mod get_contract_owner;
mod get_health;
mod get_token_balance;
mod list_deployed_tokens;
mod relay_signed_transaction;
mod transfer_to_user;

pub use deploy_token::{DeployTokenUseCase, DeployedToken, NewToken};
pub use get_contract_info::{ContractInfo, GetContractInfoUseCase};
pub use get_contract_owner::GetContractOwnerUseCase;
pub use get_health::{GetHealthUseCase, HealthStatus};
pub use get_token_balance::GetTokenBalanceUseCase;
pub use list_deployed_tokens::ListDeployedTokensUseCase;
pub use relay_signed_transaction::RelaySignedTransactionUseCase;
pub use transfer_to_user::{TokenTransfer, TransferToUserUseCase};
