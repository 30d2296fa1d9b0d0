//! Get CoinGate Order Use Case

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::gateways::CoinGateGateway;
use crate::domain::models::CoinGateOrder;
use crate::shared::errors::UseCaseError;

/// An order with its derived exchange figures
#[derive(Debug, Clone, PartialEq)]
pub struct PricedOrder {
    pub order: CoinGateOrder,
    /// `receive_amount / pay_amount`
    pub conversion_rate: Option<Decimal>,
    /// e.g. `"100 USD = 0.0021 BTC"`
    pub exchange_summary: String,
}

/// Use case for fetching a CoinGate order
pub struct GetCoinGateOrderUseCase {
    gateway: Arc<dyn CoinGateGateway>,
}

impl GetCoinGateOrderUseCase {
    #[must_use]
    pub fn new(gateway: Arc<dyn CoinGateGateway>) -> Self {
        Self { gateway }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns the provider error verbatim.
    pub async fn execute(&self, id: &str) -> Result<PricedOrder, UseCaseError> {
        let order = self.gateway.get_order(id).await?;
        Ok(PricedOrder {
            conversion_rate: order.conversion_rate(),
            exchange_summary: order.exchange_summary(),
            order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::payment_provider::MockCoinGateGateway;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn should_derive_conversion_rate_and_summary() {
        let mut gateway = MockCoinGateGateway::new();
        gateway
            .expect_get_order()
            .withf(|id| id == "1087999")
            .returning(|id| {
                Ok(CoinGateOrder {
                    id: id.to_string(),
                    pay_amount: Some("50".to_string()),
                    pay_currency: Some("USD".to_string()),
                    receive_amount: Some("0.001".to_string()),
                    receive_currency: Some("BTC".to_string()),
                    ..Default::default()
                })
            });
        let use_case = GetCoinGateOrderUseCase::new(Arc::new(gateway));

        let priced = use_case.execute("1087999").await.unwrap();

        assert_eq!(priced.conversion_rate, Some(dec!(0.00002)));
        assert_eq!(priced.exchange_summary, "50 USD = 0.001 BTC");
    }

    #[tokio::test]
    async fn should_leave_rate_empty_when_amounts_are_missing() {
        let mut gateway = MockCoinGateGateway::new();
        gateway.expect_get_order().returning(|id| {
            Ok(CoinGateOrder {
                id: id.to_string(),
                ..Default::default()
            })
        });
        let use_case = GetCoinGateOrderUseCase::new(Arc::new(gateway));

        let priced = use_case.execute("7").await.unwrap();

        assert_eq!(priced.conversion_rate, None);
        assert_eq!(priced.exchange_summary, "undefined undefined = undefined undefined");
    }
}
