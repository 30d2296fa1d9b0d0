//! NowPayments Client

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::http::{parse_response, transport_error};
use crate::domain::gateways::NowPaymentsGateway;
use crate::domain::models::{Invoice, NewInvoice, PaymentStatus};
use crate::shared::errors::ProviderError;
use crate::shared::serde_helpers::{opt_string_or_number, string_or_number};
use crate::shared::SecretString;

pub const DEFAULT_BASE_URL: &str = "https://api.nowpayments.io/v1";

#[derive(Debug, Serialize)]
struct InvoiceBody<'a> {
    price_amount: Decimal,
    price_currency: &'a str,
    pay_currency: &'static str,
    ipn_callback_url: &'a str,
    success_url: &'a str,
    cancel_url: &'a str,
}

#[derive(Debug, Deserialize)]
struct InvoiceResponse {
    #[serde(deserialize_with = "string_or_number")]
    id: String,
    #[serde(default)]
    invoice_url: Option<String>,
    #[serde(default)]
    pay_address: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pay_amount: Option<String>,
    #[serde(default)]
    pay_currency: Option<String>,
}

/// NowPayments API client, authenticated with `x-api-key`
pub struct NowPaymentsClient {
    base_url: String,
    api_key: Option<SecretString>,
    http_client: reqwest::Client,
}

impl NowPaymentsClient {
    #[must_use]
    pub fn new(api_key: Option<SecretString>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.is_blank()),
            http_client: reqwest::Client::new(),
        }
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_ref()
            .map(SecretString::expose)
            .ok_or(ProviderError::MissingApiKey("NowPayments"))
    }
}

#[async_trait]
impl NowPaymentsGateway for NowPaymentsClient {
    async fn create_invoice(&self, invoice: &NewInvoice) -> Result<Invoice, ProviderError> {
        let body = InvoiceBody {
            price_amount: invoice.price_amount,
            price_currency: &invoice.price_currency,
            pay_currency: invoice.pay_currency.code(),
            ipn_callback_url: &invoice.ipn_callback_url,
            success_url: &invoice.success_url,
            cancel_url: &invoice.cancel_url,
        };
        let response = self
            .http_client
            .post(format!("{}/invoice", self.base_url))
            .header("x-api-key", self.api_key()?)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let created: InvoiceResponse = parse_response(response).await.inspect_err(|e| {
            tracing::error!(error = %e, "NowPayments invoice creation failed");
        })?;
        Ok(Invoice {
            id: created.id,
            invoice_url: created.invoice_url,
            pay_address: created.pay_address,
            pay_amount: created.pay_amount,
            pay_currency: created.pay_currency,
        })
    }

    async fn payment_status(&self, payment_id: &str) -> Result<PaymentStatus, ProviderError> {
        let response = self
            .http_client
            .get(format!("{}/payment/{payment_id}", self.base_url))
            .header("x-api-key", self.api_key()?)
            .send()
            .await
            .map_err(transport_error)?;

        let data: Value = parse_response(response).await.inspect_err(|e| {
            tracing::error!(payment_id, error = %e, "NowPayments status check failed");
        })?;
        let status = data.get("payment_status").and_then(Value::as_str).map(str::to_string);
        Ok(PaymentStatus { status, data })
    }
}
