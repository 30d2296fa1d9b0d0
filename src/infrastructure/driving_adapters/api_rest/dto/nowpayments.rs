//! NowPayments DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::domain::models::{Invoice, PaymentStatus};

/// DTO for creating a NowPayments payment
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePaymentDto {
    #[validate(required(message = "Amount and currency are required"))]
    pub amount: Option<Decimal>,

    #[validate(required(message = "Amount and currency are required"))]
    pub currency: Option<String>,
}

/// Response for `POST /nowpayments/create-payment`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentResponse {
    pub success: bool,
    pub payment_id: String,
    pub payment_url: Option<String>,
    pub pay_address: Option<String>,
    pub pay_amount: Option<String>,
    pub pay_currency: Option<String>,
}

impl From<Invoice> for CreatePaymentResponse {
    fn from(invoice: Invoice) -> Self {
        Self {
            success: true,
            payment_id: invoice.id,
            payment_url: invoice.invoice_url,
            pay_address: invoice.pay_address,
            pay_amount: invoice.pay_amount,
            pay_currency: invoice.pay_currency,
        }
    }
}

/// Response for `GET /nowpayments/status/{paymentId}`
#[derive(Debug, Serialize)]
pub struct PaymentStatusResponse {
    pub success: bool,
    pub status: Option<String>,
    pub data: Value,
}

impl From<PaymentStatus> for PaymentStatusResponse {
    fn from(status: PaymentStatus) -> Self {
        Self {
            success: true,
            status: status.status,
            data: status.data,
        }
    }
}
