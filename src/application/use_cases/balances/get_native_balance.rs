//! Get Native Balance Use Case

use std::sync::Arc;

use alloy_primitives::Address;

use crate::application::registry::NetworkContractRegistry;
use crate::domain::models::amount::format_ether;
use crate::domain::models::NetworkName;
use crate::shared::errors::UseCaseError;

/// Use case for reading an account's native currency balance
pub struct GetNativeBalanceUseCase {
    registry: Arc<NetworkContractRegistry>,
}

impl GetNativeBalanceUseCase {
    #[must_use]
    pub fn new(registry: Arc<NetworkContractRegistry>) -> Self {
        Self { registry }
    }

    /// Execute the use case, returning the balance in ether
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Configuration` if the network has no RPC URL, or the chain error.
    pub async fn execute(&self, network: NetworkName, account: Address) -> Result<String, UseCaseError> {
        tracing::debug!(%network, %account, "Fetching native balance");
        let reader = self.registry.reader(network)?;
        let balance = format_ether(reader.native_balance(account).await?);
        tracing::debug!(%network, %account, %balance, "Native balance fetched");
        Ok(balance)
    }
}
