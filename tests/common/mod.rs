//! Common test utilities for e2e tests
//!
//! Builds the full router over the in-memory chain, with the payment
//! processors and block explorer replaced by wiremock servers.

#![allow(dead_code)]

use std::sync::Arc;

use alloy_primitives::Bytes;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use config::{Config, File, FileFormat};
use serde_json::{json, Value};
use tower::util::ServiceExt;
use wiremock::MockServer;

use chain_payments_gateway::domain::gateways::ContractArtifactSource;
use chain_payments_gateway::domain::models::ContractArtifact;
use chain_payments_gateway::infrastructure::driven_adapters::{
    AppConfig, CoinGateClient, EtherscanExplorer, InMemoryChain, NowPaymentsClient,
};
use chain_payments_gateway::infrastructure::driving_adapters::api_rest::{self, Adapters, AppState};
use chain_payments_gateway::shared::errors::ArtifactError;

/// Hardhat account #0
pub const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const DEV_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
pub const RECIPIENT: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

/// Artifact served from memory so tests do not depend on a compiled contract
struct StaticArtifact;

#[async_trait]
impl ContractArtifactSource for StaticArtifact {
    async fn load(&self) -> Result<ContractArtifact, ArtifactError> {
        Ok(ContractArtifact {
            abi: json!([
                {"type": "function", "name": "owner", "inputs": [], "outputs": [{"type": "address"}]},
                {"type": "function", "name": "secureTransfer", "inputs": [
                    {"name": "to", "type": "address"}, {"name": "amount", "type": "uint256"}
                ], "outputs": []}
            ]),
            bytecode: Bytes::from_static(&[0x60, 0x80, 0x60, 0x40, 0x52]),
        })
    }
}

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub chain: InMemoryChain,
    pub coingate: MockServer,
    pub nowpayments: MockServer,
    pub etherscan: MockServer,
}

impl TestApp {
    pub async fn new() -> Self {
        let coingate = MockServer::start().await;
        let nowpayments = MockServer::start().await;
        let etherscan = MockServer::start().await;
        let chain = InMemoryChain::new();

        let config = test_config(&etherscan.uri());
        let adapters = Adapters {
            connector: Arc::new(chain.clone()),
            artifacts: Arc::new(StaticArtifact),
            explorer: Arc::new(EtherscanExplorer::new(
                config.etherscan.api_key.clone(),
                config.etherscan.base_urls(),
            )),
            coingate: Arc::new(CoinGateClient::new(
                config.coingate.api_key.clone(),
                true,
                Some(coingate.uri()),
            )),
            nowpayments: Arc::new(NowPaymentsClient::new(config.nowpayments.api_key.clone(), nowpayments.uri())),
        };
        let state = AppState::new(config, adapters).expect("Failed to build application state");

        Self {
            router: api_rest::router(state),
            chain,
            coingate,
            nowpayments,
            etherscan,
        }
    }

    /// Send a request and return the status with the decoded JSON body
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }
}

/// Localhost and Sepolia can sign; Holesky has an RPC URL but no key
fn test_config(etherscan_url: &str) -> AppConfig {
    let config_str = format!(
        r#"
[server]
host = "127.0.0.1"
port = 0

[networks.localhost]
rpc_url = "memory://localhost"
private_key = "{DEV_KEY}"

[networks.sepolia]
rpc_url = "memory://sepolia"
private_key = "{DEV_KEY}"

[networks.holesky]
rpc_url = "memory://holesky"

[contract]
artifact_path = "unused.json"
default_network = "localhost"
initial_supply = "1000000"

[etherscan]
api_key = "etherscan-key"
sepolia_url = "{etherscan_url}"
holesky_url = "{etherscan_url}"
history_limit = 10

[coingate]
api_key = "coingate-key"
sandbox = true

[nowpayments]
api_key = "nowpayments-key"
base_url = "http://unused"
ipn_base_url = "http://localhost:3005"
frontend_url = "http://localhost:8080"
"#
    );

    Config::builder()
        .add_source(File::from_str(&config_str, FileFormat::Toml))
        .build()
        .expect("Failed to build test config")
        .try_deserialize()
        .expect("Failed to deserialize test config")
}
