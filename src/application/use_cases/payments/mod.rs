//! Payment Processor Use Cases
//!
//! CoinGate orders and NowPayments invoices. Input is validated before any
//! provider is called; provider errors are passed through verbatim.

mod create_coingate_order;
mod create_nowpayments_payment;
mod get_coingate_order;
mod get_nowpayments_status;
mod list_coingate_currencies;

pub use create_coingate_order::{CoinGateOrderRequest, CreateCoinGateOrderUseCase};
pub use create_nowpayments_payment::CreateNowPaymentsPaymentUseCase;
pub use get_coingate_order::{GetCoinGateOrderUseCase, PricedOrder};
pub use get_nowpayments_status::GetNowPaymentsStatusUseCase;
pub use list_coingate_currencies::ListCoinGateCurrenciesUseCase;
