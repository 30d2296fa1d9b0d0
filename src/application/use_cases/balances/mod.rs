//! Balance & History Use Cases
//!
//! Stateless lookups against a freshly built provider per request.

mod get_native_balance;
mod get_transaction_history;

pub use get_native_balance::GetNativeBalanceUseCase;
pub use get_transaction_history::GetTransactionHistoryUseCase;
