//! List CoinGate Currencies Use Case

use std::sync::Arc;

use crate::domain::gateways::CoinGateGateway;
use crate::domain::models::CoinGateCurrency;
use crate::shared::errors::UseCaseError;

/// Use case for listing the currencies CoinGate supports
pub struct ListCoinGateCurrenciesUseCase {
    gateway: Arc<dyn CoinGateGateway>,
}

impl ListCoinGateCurrenciesUseCase {
    #[must_use]
    pub fn new(gateway: Arc<dyn CoinGateGateway>) -> Self {
        Self { gateway }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns the provider error verbatim.
    pub async fn execute(&self) -> Result<Vec<CoinGateCurrency>, UseCaseError> {
        Ok(self.gateway.list_currencies().await?)
    }
}
