//! CoinGate DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::application::use_cases::payments::{CoinGateOrderRequest, PricedOrder};
use crate::domain::models::{CoinGateCurrency, CoinGateOrder};

/// DTO for creating a CoinGate order
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderDto {
    #[validate(required(message = "Amount is required"))]
    pub amount: Option<Decimal>,

    #[validate(required(message = "Currency is required"))]
    #[validate(length(min = 1, max = 10, message = "currency must be between 1 and 10 characters"))]
    pub currency: Option<String>,

    pub receive_currency: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub callback_url: Option<String>,
    pub cancel_url: Option<String>,
    pub success_url: Option<String>,
}

impl From<CreateOrderDto> for CoinGateOrderRequest {
    fn from(dto: CreateOrderDto) -> Self {
        Self {
            amount: dto.amount.unwrap_or_default(),
            currency: dto.currency.unwrap_or_default(),
            receive_currency: dto.receive_currency,
            title: dto.title,
            description: dto.description,
            callback_url: dto.callback_url,
            cancel_url: dto.cancel_url,
            success_url: dto.success_url,
        }
    }
}

/// Order as returned right after creation
#[derive(Debug, Serialize)]
pub struct CreatedOrderDto {
    pub id: String,
    pub status: Option<String>,
    pub payment_url: Option<String>,
    pub receive_amount: Option<String>,
    pub receive_currency: Option<String>,
    /// QR images are not rendered; always null
    pub qr_code_url: Option<String>,
    pub created_at: Option<String>,
}

impl From<CoinGateOrder> for CreatedOrderDto {
    fn from(order: CoinGateOrder) -> Self {
        Self {
            id: order.id,
            status: order.status,
            payment_url: order.payment_url,
            receive_amount: order.receive_amount,
            receive_currency: order.receive_currency,
            qr_code_url: None,
            created_at: order.created_at,
        }
    }
}

/// Response for `POST /coingate/order`
#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    pub success: bool,
    pub order: CreatedOrderDto,
}

/// Order details with exchange figures
#[derive(Debug, Serialize)]
pub struct OrderDetailsDto {
    pub id: String,
    pub status: Option<String>,
    pub payment_url: Option<String>,
    pub price_amount: Option<String>,
    pub price_currency: Option<String>,
    pub receive_amount: Option<String>,
    pub qr_code_url: Option<String>,
    pub receive_currency: Option<String>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub conversion_rate: Option<Decimal>,
    pub usd_to_crypto: String,
    pub created_at: Option<String>,
}

impl From<PricedOrder> for OrderDetailsDto {
    fn from(priced: PricedOrder) -> Self {
        let order = priced.order;
        Self {
            id: order.id,
            status: order.status,
            payment_url: order.payment_url,
            // The price is what the payer is asked for
            price_amount: order.pay_amount,
            price_currency: order.pay_currency,
            receive_amount: order.receive_amount,
            qr_code_url: None,
            receive_currency: order.receive_currency,
            conversion_rate: priced.conversion_rate,
            usd_to_crypto: priced.exchange_summary,
            created_at: order.created_at,
        }
    }
}

/// Response for `GET /coingate/order/{id}`
#[derive(Debug, Serialize)]
pub struct OrderDetailsResponse {
    pub success: bool,
    pub order: OrderDetailsDto,
}

#[derive(Debug, Serialize)]
pub struct CurrencyDto {
    pub id: Option<String>,
    pub symbol: Option<String>,
    pub title: Option<String>,
    pub min_amount: Option<String>,
    pub is_crypto: Option<bool>,
}

impl From<CoinGateCurrency> for CurrencyDto {
    fn from(c: CoinGateCurrency) -> Self {
        Self {
            id: c.id,
            symbol: c.symbol,
            title: c.title,
            min_amount: c.min_amount,
            is_crypto: c.is_crypto,
        }
    }
}

/// Response for `GET /coingate/currencies`
#[derive(Debug, Serialize)]
pub struct CurrenciesResponse {
    pub success: bool,
    pub currencies: Vec<CurrencyDto>,
}

/// Callback CoinGate posts on order status changes. Unknown fields are kept.
#[derive(Debug, Deserialize)]
pub struct CoinGateWebhookDto {
    #[serde(default, deserialize_with = "crate::shared::serde_helpers::opt_string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, Value>,
}
