//! Payment Processor Gateways

use async_trait::async_trait;

use crate::domain::models::payment::{
    CoinGateCurrency, CoinGateOrder, Invoice, NewCoinGateOrder, NewInvoice, PaymentStatus,
};
use crate::shared::errors::ProviderError;

/// CoinGate merchant API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoinGateGateway: Send + Sync {
    /// Create an order (invoice)
    async fn create_order(&self, order: &NewCoinGateOrder) -> Result<CoinGateOrder, ProviderError>;

    /// Fetch an order by CoinGate id
    async fn get_order(&self, id: &str) -> Result<CoinGateOrder, ProviderError>;

    /// List currencies CoinGate accepts
    async fn list_currencies(&self) -> Result<Vec<CoinGateCurrency>, ProviderError>;
}

/// NowPayments API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NowPaymentsGateway: Send + Sync {
    /// Create a hosted invoice
    async fn create_invoice(&self, invoice: &NewInvoice) -> Result<Invoice, ProviderError>;

    /// Fetch the status of a payment
    async fn payment_status(&self, payment_id: &str) -> Result<PaymentStatus, ProviderError>;
}
