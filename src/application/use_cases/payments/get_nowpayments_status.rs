//! Get NowPayments Status Use Case

use std::sync::Arc;

use crate::domain::gateways::NowPaymentsGateway;
use crate::domain::models::PaymentStatus;
use crate::shared::errors::UseCaseError;

/// Use case for checking a NowPayments payment
pub struct GetNowPaymentsStatusUseCase {
    gateway: Arc<dyn NowPaymentsGateway>,
}

impl GetNowPaymentsStatusUseCase {
    #[must_use]
    pub fn new(gateway: Arc<dyn NowPaymentsGateway>) -> Self {
        Self { gateway }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` for a blank id, otherwise the provider error verbatim.
    pub async fn execute(&self, payment_id: &str) -> Result<PaymentStatus, UseCaseError> {
        let payment_id = payment_id.trim();
        if payment_id.is_empty() {
            return Err(UseCaseError::Validation(vec!["paymentId: Payment ID is required".to_string()]));
        }
        Ok(self.gateway.payment_status(payment_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::payment_provider::MockNowPaymentsGateway;
    use serde_json::json;

    #[tokio::test]
    async fn should_return_status_and_payload() {
        let mut gateway = MockNowPaymentsGateway::new();
        gateway
            .expect_payment_status()
            .withf(|id| id == "5524759814")
            .returning(|_| {
                Ok(PaymentStatus {
                    status: Some("finished".to_string()),
                    data: json!({"payment_status": "finished"}),
                })
            });
        let use_case = GetNowPaymentsStatusUseCase::new(Arc::new(gateway));

        let status = use_case.execute("5524759814").await.unwrap();

        assert_eq!(status.status.as_deref(), Some("finished"));
    }

    #[tokio::test]
    async fn should_require_payment_id() {
        let mut gateway = MockNowPaymentsGateway::new();
        gateway.expect_payment_status().never();
        let use_case = GetNowPaymentsStatusUseCase::new(Arc::new(gateway));

        assert!(matches!(use_case.execute(" ").await, Err(UseCaseError::Validation(_))));
    }
}
