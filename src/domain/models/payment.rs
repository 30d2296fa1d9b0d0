//! Payment Processor Models
//!
//! Provider-agnostic shapes for CoinGate orders and NowPayments invoices.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::shared::errors::DomainError;

/// Order to be created at CoinGate
#[derive(Debug, Clone, PartialEq)]
pub struct NewCoinGateOrder {
    pub order_id: String,
    pub price_amount: Decimal,
    pub price_currency: String,
    pub receive_currency: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub callback_url: Option<String>,
    pub cancel_url: Option<String>,
    pub success_url: Option<String>,
}

/// A CoinGate order as returned by the provider
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinGateOrder {
    pub id: String,
    pub order_id: Option<String>,
    pub status: Option<String>,
    pub payment_url: Option<String>,
    pub pay_amount: Option<String>,
    pub pay_currency: Option<String>,
    pub receive_amount: Option<String>,
    pub receive_currency: Option<String>,
    pub created_at: Option<String>,
}

impl CoinGateOrder {
    /// `receive_amount / pay_amount`, when both are present and parseable
    #[must_use]
    pub fn conversion_rate(&self) -> Option<Decimal> {
        let receive = Decimal::from_str(self.receive_amount.as_deref()?).ok()?;
        let pay = Decimal::from_str(self.pay_amount.as_deref()?).ok()?;
        receive.checked_div(pay)
    }

    /// Human readable rate, e.g. `"100 USD = 0.0021 BTC"`
    #[must_use]
    pub fn exchange_summary(&self) -> String {
        let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "undefined".to_string());
        format!(
            "{} {} = {} {}",
            show(&self.pay_amount),
            show(&self.pay_currency),
            show(&self.receive_amount),
            show(&self.receive_currency)
        )
    }
}

/// A currency supported by CoinGate
#[derive(Debug, Clone, PartialEq)]
pub struct CoinGateCurrency {
    pub id: Option<String>,
    pub symbol: Option<String>,
    pub title: Option<String>,
    pub min_amount: Option<String>,
    pub is_crypto: Option<bool>,
}

/// Currencies accepted for NowPayments invoices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayCurrency {
    Btc,
    Eth,
    Usdt,
    Usdc,
}

impl PayCurrency {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Btc => "btc",
            Self::Eth => "eth",
            Self::Usdt => "usdt",
            Self::Usdc => "usdc",
        }
    }
}

impl FromStr for PayCurrency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "btc" => Ok(Self::Btc),
            "eth" => Ok(Self::Eth),
            "usdt" => Ok(Self::Usdt),
            "usdc" => Ok(Self::Usdc),
            _ => Err(DomainError::UnsupportedCurrency(s.to_string())),
        }
    }
}

impl fmt::Display for PayCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Invoice to be created at NowPayments
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub price_amount: Decimal,
    pub price_currency: String,
    pub pay_currency: PayCurrency,
    pub ipn_callback_url: String,
    pub success_url: String,
    pub cancel_url: String,
}

/// A NowPayments invoice
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invoice {
    pub id: String,
    pub invoice_url: Option<String>,
    pub pay_address: Option<String>,
    pub pay_amount: Option<String>,
    pub pay_currency: Option<String>,
}

/// Status of a NowPayments payment, with the provider's full payload
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentStatus {
    pub status: Option<String>,
    pub data: Value,
}
