//! Create CoinGate Order Use Case

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;

use crate::domain::gateways::CoinGateGateway;
use crate::domain::models::amount::require_positive;
use crate::domain::models::{CoinGateOrder, NewCoinGateOrder};
use crate::shared::errors::UseCaseError;

/// Currency settled to the merchant when the caller names none
pub const DEFAULT_RECEIVE_CURRENCY: &str = "BTC";

/// Caller's order parameters
#[derive(Debug, Clone, Default)]
pub struct CoinGateOrderRequest {
    pub amount: Decimal,
    pub currency: String,
    pub receive_currency: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub callback_url: Option<String>,
    pub cancel_url: Option<String>,
    pub success_url: Option<String>,
}

/// Use case for creating a CoinGate order
pub struct CreateCoinGateOrderUseCase {
    gateway: Arc<dyn CoinGateGateway>,
}

impl CreateCoinGateOrderUseCase {
    #[must_use]
    pub fn new(gateway: Arc<dyn CoinGateGateway>) -> Self {
        Self { gateway }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` for a non-positive amount and
    /// `UseCaseError::Validation` for a blank currency, before calling CoinGate.
    pub async fn execute(&self, request: CoinGateOrderRequest) -> Result<CoinGateOrder, UseCaseError> {
        let amount = require_positive(request.amount)?;
        let currency = request.currency.trim();
        if currency.is_empty() {
            return Err(UseCaseError::Validation(vec!["currency: Currency is required".to_string()]));
        }

        let order = NewCoinGateOrder {
            order_id: format!("order_{}", Utc::now().timestamp_millis()),
            price_amount: amount,
            price_currency: currency.to_string(),
            receive_currency: request
                .receive_currency
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_RECEIVE_CURRENCY.to_string()),
            title: request.title,
            description: request.description,
            callback_url: request.callback_url,
            cancel_url: request.cancel_url,
            success_url: request.success_url,
        };

        let created = self.gateway.create_order(&order).await.inspect_err(|e| {
            tracing::error!(order_id = %order.order_id, error = %e, "Order creation error");
        })?;
        tracing::info!(order_id = %order.order_id, coingate_id = %created.id, "CoinGate order created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::payment_provider::MockCoinGateGateway;
    use crate::shared::errors::{DomainError, ProviderError};
    use rust_decimal_macros::dec;

    fn request() -> CoinGateOrderRequest {
        CoinGateOrderRequest {
            amount: dec!(10),
            currency: "USD".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn should_generate_order_id_and_default_receive_currency() {
        let mut gateway = MockCoinGateGateway::new();
        gateway
            .expect_create_order()
            .withf(|order| {
                order.order_id.starts_with("order_")
                    && order.order_id["order_".len()..].parse::<i64>().is_ok()
                    && order.receive_currency == "BTC"
                    && order.price_amount == dec!(10)
            })
            .times(1)
            .returning(|order| {
                Ok(CoinGateOrder {
                    id: "1".to_string(),
                    order_id: Some(order.order_id.clone()),
                    ..Default::default()
                })
            });
        let use_case = CreateCoinGateOrderUseCase::new(Arc::new(gateway));

        let order = use_case.execute(request()).await.unwrap();

        assert_eq!(order.id, "1");
    }

    #[tokio::test]
    async fn should_keep_requested_receive_currency() {
        let mut gateway = MockCoinGateGateway::new();
        gateway
            .expect_create_order()
            .withf(|order| order.receive_currency == "ETH")
            .returning(|_| Ok(CoinGateOrder::default()));
        let use_case = CreateCoinGateOrderUseCase::new(Arc::new(gateway));

        let result = use_case
            .execute(CoinGateOrderRequest {
                receive_currency: Some("ETH".to_string()),
                ..request()
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_validate_before_calling_coingate() {
        let mut gateway = MockCoinGateGateway::new();
        gateway.expect_create_order().never();
        let use_case = CreateCoinGateOrderUseCase::new(Arc::new(gateway));

        let err = use_case
            .execute(CoinGateOrderRequest {
                amount: dec!(0),
                ..request()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::Domain(DomainError::InvalidAmount(_))));

        let err = use_case
            .execute(CoinGateOrderRequest {
                currency: " ".to_string(),
                ..request()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::Validation(_)));
    }

    #[tokio::test]
    async fn should_pass_provider_error_through() {
        let mut gateway = MockCoinGateGateway::new();
        gateway.expect_create_order().returning(|_| {
            Err(ProviderError::Upstream(
                "CoinGate order creation failed: Order is not valid".to_string(),
            ))
        });
        let use_case = CreateCoinGateOrderUseCase::new(Arc::new(gateway));

        let err = use_case.execute(request()).await.unwrap_err();

        assert_eq!(err.to_string(), "CoinGate order creation failed: Order is not valid");
    }
}
