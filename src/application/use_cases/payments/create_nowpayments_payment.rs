//! Create NowPayments Payment Use Case
//!
//! Creates a hosted invoice priced in USD. NowPayments reports back through
//! the IPN endpoint and redirects the payer to the frontend.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::gateways::NowPaymentsGateway;
use crate::domain::models::amount::require_positive;
use crate::domain::models::{Invoice, NewInvoice, PayCurrency};
use crate::shared::errors::UseCaseError;

const PRICE_CURRENCY: &str = "usd";

/// Use case for creating a NowPayments invoice
pub struct CreateNowPaymentsPaymentUseCase {
    gateway: Arc<dyn NowPaymentsGateway>,
    ipn_callback_url: String,
    frontend_url: String,
}

impl CreateNowPaymentsPaymentUseCase {
    #[must_use]
    pub fn new(gateway: Arc<dyn NowPaymentsGateway>, ipn_callback_url: String, frontend_url: &str) -> Self {
        Self {
            gateway,
            ipn_callback_url,
            frontend_url: frontend_url.trim_end_matches('/').to_string(),
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` for a non-positive amount or a currency
    /// outside BTC, ETH, USDT and USDC, before calling NowPayments.
    pub async fn execute(&self, amount: Decimal, currency: &str) -> Result<Invoice, UseCaseError> {
        let amount = require_positive(amount)?;
        let pay_currency: PayCurrency = currency.trim().parse()?;

        let invoice = NewInvoice {
            price_amount: amount,
            price_currency: PRICE_CURRENCY.to_string(),
            pay_currency,
            ipn_callback_url: self.ipn_callback_url.clone(),
            success_url: format!("{}/success", self.frontend_url),
            cancel_url: format!("{}/cancel", self.frontend_url),
        };

        let created = self.gateway.create_invoice(&invoice).await?;
        tracing::info!(payment_id = %created.id, %amount, currency = %pay_currency, "NowPayments invoice created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::payment_provider::MockNowPaymentsGateway;
    use crate::shared::errors::DomainError;
    use rust_decimal_macros::dec;

    fn use_case(gateway: MockNowPaymentsGateway) -> CreateNowPaymentsPaymentUseCase {
        CreateNowPaymentsPaymentUseCase::new(
            Arc::new(gateway),
            "http://localhost:3005/api/nowpayments/ipn".to_string(),
            "http://localhost:8080/",
        )
    }

    #[tokio::test]
    async fn should_create_usd_priced_invoice() {
        let mut gateway = MockNowPaymentsGateway::new();
        gateway
            .expect_create_invoice()
            .withf(|invoice| {
                invoice.price_currency == "usd"
                    && invoice.pay_currency == PayCurrency::Usdt
                    && invoice.success_url == "http://localhost:8080/success"
                    && invoice.cancel_url == "http://localhost:8080/cancel"
                    && invoice.ipn_callback_url == "http://localhost:3005/api/nowpayments/ipn"
            })
            .times(1)
            .returning(|_| {
                Ok(Invoice {
                    id: "4522625843".to_string(),
                    ..Default::default()
                })
            });

        let invoice = use_case(gateway).execute(dec!(20), "USDT").await.unwrap();

        assert_eq!(invoice.id, "4522625843");
    }

    #[tokio::test]
    async fn should_reject_unsupported_currency_before_calling_provider() {
        let mut gateway = MockNowPaymentsGateway::new();
        gateway.expect_create_invoice().never();

        let err = use_case(gateway).execute(dec!(20), "DOGE").await.unwrap_err();

        assert!(matches!(err, UseCaseError::Domain(DomainError::UnsupportedCurrency(_))));
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_reject_non_positive_amount_before_calling_provider() {
        let mut gateway = MockNowPaymentsGateway::new();
        gateway.expect_create_invoice().never();

        let err = use_case(gateway).execute(dec!(-3), "btc").await.unwrap_err();

        assert!(matches!(err, UseCaseError::Domain(DomainError::InvalidAmount(_))));
    }
}
