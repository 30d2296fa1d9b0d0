//! CoinGate Client
//!
//! REST client for the CoinGate v2 merchant API. Sandbox and production live
//! on different hosts; the key is sent as `Authorization: Token <key>`.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::http::{parse_response, prefixed, transport_error};
use crate::domain::gateways::CoinGateGateway;
use crate::domain::models::{CoinGateCurrency, CoinGateOrder, NewCoinGateOrder};
use crate::shared::errors::ProviderError;
use crate::shared::serde_helpers::{opt_string_or_number, string_or_number};
use crate::shared::SecretString;

pub const SANDBOX_BASE_URL: &str = "https://api-sandbox.coingate.com/v2";
pub const PRODUCTION_BASE_URL: &str = "https://api.coingate.com/v2";

#[derive(Debug, Serialize)]
struct CreateOrderBody<'a> {
    order_id: &'a str,
    price_amount: Decimal,
    price_currency: &'a str,
    receive_currency: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cancel_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    success_url: Option<&'a str>,
}

impl<'a> From<&'a NewCoinGateOrder> for CreateOrderBody<'a> {
    fn from(order: &'a NewCoinGateOrder) -> Self {
        Self {
            order_id: &order.order_id,
            price_amount: order.price_amount,
            price_currency: &order.price_currency,
            receive_currency: &order.receive_currency,
            title: order.title.as_deref(),
            description: order.description.as_deref(),
            callback_url: order.callback_url.as_deref(),
            cancel_url: order.cancel_url.as_deref(),
            success_url: order.success_url.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OrderResponse {
    #[serde(deserialize_with = "string_or_number")]
    id: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    order_id: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    payment_url: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pay_amount: Option<String>,
    #[serde(default)]
    pay_currency: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    receive_amount: Option<String>,
    #[serde(default)]
    receive_currency: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<OrderResponse> for CoinGateOrder {
    fn from(order: OrderResponse) -> Self {
        Self {
            id: order.id,
            order_id: order.order_id,
            status: order.status,
            payment_url: order.payment_url,
            pay_amount: order.pay_amount,
            pay_currency: order.pay_currency,
            receive_amount: order.receive_amount,
            receive_currency: order.receive_currency,
            created_at: order.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CurrencyResponse {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    id: Option<String>,
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    min_amount: Option<String>,
    #[serde(default)]
    is_crypto: Option<bool>,
}

impl From<CurrencyResponse> for CoinGateCurrency {
    fn from(c: CurrencyResponse) -> Self {
        Self {
            id: c.id,
            symbol: c.symbol,
            title: c.title,
            min_amount: c.min_amount,
            is_crypto: c.is_crypto,
        }
    }
}

/// CoinGate merchant API client
pub struct CoinGateClient {
    base_url: String,
    api_key: Option<SecretString>,
    http_client: reqwest::Client,
}

impl CoinGateClient {
    /// Build a client; `base_url` overrides the sandbox/production default
    #[must_use]
    pub fn new(api_key: Option<SecretString>, sandbox: bool, base_url: Option<String>) -> Self {
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| if sandbox { SANDBOX_BASE_URL } else { PRODUCTION_BASE_URL }.to_string());
        let api_key = api_key.filter(|key| !key.is_blank());
        if api_key.is_none() {
            tracing::error!("CoinGate API key is not configured");
        }
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            http_client: reqwest::Client::new(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_header(&self) -> Result<String, ProviderError> {
        let key = self.api_key.as_ref().ok_or(ProviderError::MissingApiKey("CoinGate"))?;
        Ok(format!("Token {}", key.expose()))
    }

    async fn send_order(&self, order: &NewCoinGateOrder) -> Result<CoinGateOrder, ProviderError> {
        let response = self
            .http_client
            .post(format!("{}/orders", self.base_url))
            .header(reqwest::header::AUTHORIZATION, self.auth_header()?)
            .json(&CreateOrderBody::from(order))
            .send()
            .await
            .map_err(transport_error)?;
        let order: OrderResponse = parse_response(response).await?;
        Ok(order.into())
    }

    async fn fetch_order(&self, id: &str) -> Result<CoinGateOrder, ProviderError> {
        let response = self
            .http_client
            .get(format!("{}/orders/{id}", self.base_url))
            .header(reqwest::header::AUTHORIZATION, self.auth_header()?)
            .send()
            .await
            .map_err(transport_error)?;
        let order: OrderResponse = parse_response(response).await?;
        Ok(order.into())
    }

    async fn fetch_currencies(&self) -> Result<Vec<CoinGateCurrency>, ProviderError> {
        let response = self
            .http_client
            .get(format!("{}/currencies", self.base_url))
            .header(reqwest::header::AUTHORIZATION, self.auth_header()?)
            .send()
            .await
            .map_err(transport_error)?;
        let currencies: Vec<CurrencyResponse> = parse_response(response).await?;
        Ok(currencies.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CoinGateGateway for CoinGateClient {
    async fn create_order(&self, order: &NewCoinGateOrder) -> Result<CoinGateOrder, ProviderError> {
        tracing::info!(order_id = %order.order_id, amount = %order.price_amount, currency = %order.price_currency, "Creating CoinGate order");
        self.send_order(order)
            .await
            .map_err(|e| prefixed("CoinGate order creation failed: ", e))
    }

    async fn get_order(&self, id: &str) -> Result<CoinGateOrder, ProviderError> {
        self.fetch_order(id)
            .await
            .map_err(|e| prefixed("Failed to get CoinGate order: ", e))
    }

    async fn list_currencies(&self) -> Result<Vec<CoinGateCurrency>, ProviderError> {
        self.fetch_currencies()
            .await
            .map_err(|e| prefixed("Failed to get currencies: ", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> CoinGateClient {
        CoinGateClient::new(Some(SecretString::from("test-token")), true, Some(server.uri()))
    }

    fn new_order() -> NewCoinGateOrder {
        NewCoinGateOrder {
            order_id: "order_1700000000000".to_string(),
            price_amount: dec!(25.5),
            price_currency: "USD".to_string(),
            receive_currency: "BTC".to_string(),
            title: Some("Coffee".to_string()),
            description: None,
            callback_url: None,
            cancel_url: None,
            success_url: None,
        }
    }

    #[test]
    fn test_default_base_urls() {
        assert_eq!(CoinGateClient::new(None, true, None).base_url(), SANDBOX_BASE_URL);
        assert_eq!(CoinGateClient::new(None, false, None).base_url(), PRODUCTION_BASE_URL);
    }

    #[tokio::test]
    async fn test_create_order_sends_token_header() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/orders"))
            .and(header("authorization", "Token test-token"))
            .and(body_partial_json(json!({
                "order_id": "order_1700000000000",
                "price_currency": "USD",
                "receive_currency": "BTC",
                "title": "Coffee",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1087999,
                "status": "new",
                "order_id": "order_1700000000000",
                "payment_url": "https://pay-sandbox.coingate.com/invoice/abc",
                "pay_amount": "25.5",
                "pay_currency": "USD",
                "receive_amount": 0.00061,
                "receive_currency": "BTC",
                "created_at": "2024-01-01T00:00:00+00:00",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let order = client(&server).create_order(&new_order()).await.unwrap();

        assert_eq!(order.id, "1087999");
        assert_eq!(order.status.as_deref(), Some("new"));
        assert_eq!(order.receive_amount.as_deref(), Some("0.00061"));
    }

    #[tokio::test]
    async fn test_create_order_error_is_prefixed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/orders"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "message": "Order is not valid",
                "reason": "OrderIsNotValid",
            })))
            .mount(&server)
            .await;

        let err = client(&server).create_order(&new_order()).await.unwrap_err();
        assert_eq!(err.to_string(), "CoinGate order creation failed: Order is not valid");
    }

    #[tokio::test]
    async fn test_get_order_error_is_prefixed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orders/42"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Order not found"})))
            .mount(&server)
            .await;

        let err = client(&server).get_order("42").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to get CoinGate order: Order not found");
    }

    #[tokio::test]
    async fn test_list_currencies() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/currencies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "symbol": "BTC", "title": "Bitcoin", "min_amount": "0.0001", "is_crypto": true, "native": false},
                {"id": 2, "symbol": "EUR", "title": "Euro", "is_crypto": false},
            ])))
            .mount(&server)
            .await;

        let currencies = client(&server).list_currencies().await.unwrap();

        assert_eq!(currencies.len(), 2);
        assert_eq!(currencies[0].id.as_deref(), Some("1"));
        assert_eq!(currencies[0].is_crypto, Some(true));
        assert_eq!(currencies[1].min_amount, None);
    }

    #[tokio::test]
    async fn test_missing_key_is_reported() {
        let server = MockServer::start().await;
        let client = CoinGateClient::new(None, true, Some(server.uri()));

        let err = client.list_currencies().await.unwrap_err();
        assert_eq!(err.to_string(), "CoinGate API key not configured");
    }
}
