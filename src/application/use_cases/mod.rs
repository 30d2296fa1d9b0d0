//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod balances;
pub mod contracts;
pub mod payments;
pub mod transfers;

pub use balances::{GetNativeBalanceUseCase, GetTransactionHistoryUseCase};
pub use contracts::{
    DeployTokenUseCase, GetContractInfoUseCase, GetContractOwnerUseCase, GetHealthUseCase, GetTokenBalanceUseCase,
    ListDeployedTokensUseCase, RelaySignedTransactionUseCase, TransferToUserUseCase,
};
pub use payments::{
    CreateCoinGateOrderUseCase, CreateNowPaymentsPaymentUseCase, GetCoinGateOrderUseCase, GetNowPaymentsStatusUseCase,
    ListCoinGateCurrenciesUseCase,
};
pub use transfers::SendEtherUseCase;
