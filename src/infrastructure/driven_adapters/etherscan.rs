//! Etherscan Explorer Client
//!
//! Transaction history for public test networks, which unlike the local
//! development chain have a hosted index.

use std::collections::HashMap;
use std::str::FromStr;

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::http::{parse_response, transport_error};
use crate::domain::gateways::TransactionExplorer;
use crate::domain::models::{NetworkName, TransactionSummary};
use crate::shared::errors::ProviderError;
use crate::shared::SecretString;

const NO_TRANSACTIONS: &str = "No transactions found";

#[derive(Debug, Deserialize)]
struct EtherscanResponse {
    status: String,
    message: String,
    #[serde(default)]
    result: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EtherscanTransaction {
    hash: String,
    from: String,
    #[serde(default)]
    to: String,
    value: String,
    block_number: String,
    time_stamp: String,
}

impl TryFrom<EtherscanTransaction> for TransactionSummary {
    type Error = ProviderError;

    fn try_from(tx: EtherscanTransaction) -> Result<Self, Self::Error> {
        let bad = |field: &str, value: &str| ProviderError::Decode(format!("{field} {value:?}"));
        Ok(Self {
            hash: TxHash::from_str(&tx.hash).map_err(|_| bad("hash", &tx.hash))?,
            from: Address::from_str(&tx.from).map_err(|_| bad("from", &tx.from))?,
            // Contract creations have an empty `to`
            to: if tx.to.is_empty() {
                None
            } else {
                Some(Address::from_str(&tx.to).map_err(|_| bad("to", &tx.to))?)
            },
            value: U256::from_str(&tx.value).map_err(|_| bad("value", &tx.value))?,
            block_number: tx.block_number.parse().map_err(|_| bad("blockNumber", &tx.block_number))?,
            timestamp: tx.time_stamp.parse().map_err(|_| bad("timeStamp", &tx.time_stamp))?,
        })
    }
}

/// Etherscan-compatible `account/txlist` client
pub struct EtherscanExplorer {
    api_key: Option<SecretString>,
    base_urls: HashMap<NetworkName, String>,
    http_client: reqwest::Client,
}

impl EtherscanExplorer {
    #[must_use]
    pub fn new(api_key: Option<SecretString>, base_urls: HashMap<NetworkName, String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.is_blank()),
            base_urls,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TransactionExplorer for EtherscanExplorer {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn recent_transactions(
        &self,
        network: NetworkName,
        address: Address,
        limit: usize,
    ) -> Result<Vec<TransactionSummary>, ProviderError> {
        let api_key = self.api_key.as_ref().ok_or(ProviderError::MissingApiKey("Etherscan"))?;
        let base_url = self
            .base_urls
            .get(&network)
            .ok_or_else(|| ProviderError::Upstream(format!("No block explorer configured for {network}")))?;

        let address = address.to_string();
        let response = self
            .http_client
            .get(format!("{}/api", base_url.trim_end_matches('/')))
            .query(&[
                ("module", "account"),
                ("action", "txlist"),
                ("address", address.as_str()),
                ("startblock", "0"),
                ("endblock", "99999999"),
                ("sort", "desc"),
                ("apikey", api_key.expose()),
            ])
            .send()
            .await
            .map_err(transport_error)?;
        let response: EtherscanResponse = parse_response(response).await?;

        if response.status != "1" {
            if response.message == NO_TRANSACTIONS {
                return Ok(Vec::new());
            }
            tracing::warn!(%network, message = %response.message, "Explorer rejected txlist request");
            return Err(ProviderError::Upstream(response.message));
        }

        let items: Vec<EtherscanTransaction> =
            serde_json::from_value(response.result).map_err(|e| ProviderError::Decode(e.to_string()))?;
        items.into_iter().take(limit).map(TransactionSummary::try_from).collect()
    }
}
