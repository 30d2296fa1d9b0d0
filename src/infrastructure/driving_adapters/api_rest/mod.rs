//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API, plus the
//! wiring of adapters into use cases.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::{
    CreateCoinGateOrderUseCase, CreateNowPaymentsPaymentUseCase, DeployTokenUseCase, GetCoinGateOrderUseCase,
    GetContractInfoUseCase, GetContractOwnerUseCase, GetHealthUseCase, GetNativeBalanceUseCase,
    GetNowPaymentsStatusUseCase, GetTokenBalanceUseCase, GetTransactionHistoryUseCase, ListCoinGateCurrenciesUseCase,
    ListDeployedTokensUseCase, RelaySignedTransactionUseCase, SendEtherUseCase, TransferToUserUseCase,
};
use crate::application::NetworkContractRegistry;
use crate::domain::gateways::{
    ChainConnector, CoinGateGateway, ContractArtifactSource, NowPaymentsGateway, TransactionExplorer,
};
use crate::domain::models::amount::ether_to_wei;
use crate::infrastructure::driven_adapters::{
    AlloyChainConnector, AppConfig, CoinGateClient, EtherscanExplorer, FileContractArtifactSource, NowPaymentsClient,
};
use crate::shared::errors::DomainError;

/// Outbound ports the application is wired against
#[derive(Clone)]
pub struct Adapters {
    pub connector: Arc<dyn ChainConnector>,
    pub artifacts: Arc<dyn ContractArtifactSource>,
    pub explorer: Arc<dyn TransactionExplorer>,
    pub coingate: Arc<dyn CoinGateGateway>,
    pub nowpayments: Arc<dyn NowPaymentsGateway>,
}

impl Adapters {
    /// Production adapters: alloy HTTP providers, the artifact on disk and the
    /// real provider APIs
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            connector: Arc::new(AlloyChainConnector::new()),
            artifacts: Arc::new(FileContractArtifactSource::new(&config.contract.artifact_path)),
            explorer: Arc::new(EtherscanExplorer::new(
                config.etherscan.api_key.clone(),
                config.etherscan.base_urls(),
            )),
            coingate: Arc::new(CoinGateClient::new(
                config.coingate.api_key.clone(),
                config.coingate.sandbox,
                config.coingate.base_url.clone(),
            )),
            nowpayments: Arc::new(NowPaymentsClient::new(
                config.nowpayments.api_key.clone(),
                config.nowpayments.base_url.clone(),
            )),
        }
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub registry: Arc<NetworkContractRegistry>,
    pub get_contract_info_use_case: Arc<GetContractInfoUseCase>,
    pub deploy_token_use_case: Arc<DeployTokenUseCase>,
    pub list_deployed_tokens_use_case: Arc<ListDeployedTokensUseCase>,
    pub get_token_balance_use_case: Arc<GetTokenBalanceUseCase>,
    pub get_contract_owner_use_case: Arc<GetContractOwnerUseCase>,
    pub transfer_to_user_use_case: Arc<TransferToUserUseCase>,
    pub relay_signed_transaction_use_case: Arc<RelaySignedTransactionUseCase>,
    pub get_health_use_case: Arc<GetHealthUseCase>,
    pub get_native_balance_use_case: Arc<GetNativeBalanceUseCase>,
    pub get_transaction_history_use_case: Arc<GetTransactionHistoryUseCase>,
    pub send_ether_use_case: Arc<SendEtherUseCase>,
    pub create_coingate_order_use_case: Arc<CreateCoinGateOrderUseCase>,
    pub get_coingate_order_use_case: Arc<GetCoinGateOrderUseCase>,
    pub list_coingate_currencies_use_case: Arc<ListCoinGateCurrenciesUseCase>,
    pub create_nowpayments_payment_use_case: Arc<CreateNowPaymentsPaymentUseCase>,
    pub get_nowpayments_status_use_case: Arc<GetNowPaymentsStatusUseCase>,
}

impl AppState {
    /// Build the registry and every use case from configuration and adapters
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if `contract.initial_supply` cannot
    /// be expressed in base units.
    pub fn new(config: AppConfig, adapters: Adapters) -> Result<Self, DomainError> {
        let initial_supply = ether_to_wei(config.contract.initial_supply)?;
        let registry = Arc::new(
            NetworkContractRegistry::new(
                config.network_configs(),
                adapters.connector.clone(),
                adapters.artifacts.clone(),
            )
            .with_initial_supply(initial_supply)
            .with_default_network(config.contract.default_network),
        );

        Ok(Self {
            get_contract_info_use_case: Arc::new(GetContractInfoUseCase::new(
                registry.clone(),
                adapters.artifacts.clone(),
            )),
            deploy_token_use_case: Arc::new(DeployTokenUseCase::new(registry.clone(), adapters.artifacts.clone())),
            list_deployed_tokens_use_case: Arc::new(ListDeployedTokensUseCase::new(registry.clone())),
            get_token_balance_use_case: Arc::new(GetTokenBalanceUseCase::new(registry.clone())),
            get_contract_owner_use_case: Arc::new(GetContractOwnerUseCase::new(registry.clone())),
            transfer_to_user_use_case: Arc::new(TransferToUserUseCase::new(registry.clone())),
            relay_signed_transaction_use_case: Arc::new(RelaySignedTransactionUseCase::new(registry.clone())),
            get_health_use_case: Arc::new(GetHealthUseCase::new(registry.clone())),
            get_native_balance_use_case: Arc::new(GetNativeBalanceUseCase::new(registry.clone())),
            get_transaction_history_use_case: Arc::new(GetTransactionHistoryUseCase::new(
                registry.clone(),
                adapters.explorer,
                config.etherscan.history_limit,
            )),
            send_ether_use_case: Arc::new(SendEtherUseCase::new(registry.clone())),
            create_coingate_order_use_case: Arc::new(CreateCoinGateOrderUseCase::new(adapters.coingate.clone())),
            get_coingate_order_use_case: Arc::new(GetCoinGateOrderUseCase::new(adapters.coingate.clone())),
            list_coingate_currencies_use_case: Arc::new(ListCoinGateCurrenciesUseCase::new(adapters.coingate)),
            create_nowpayments_payment_use_case: Arc::new(CreateNowPaymentsPaymentUseCase::new(
                adapters.nowpayments.clone(),
                config.ipn_callback_url(),
                &config.nowpayments.frontend_url,
            )),
            get_nowpayments_status_use_case: Arc::new(GetNowPaymentsStatusUseCase::new(adapters.nowpayments)),
            registry,
            config: Arc::new(config),
        })
    }
}

/// Assemble every route under `/api` with request ids, tracing and open CORS
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .merge(handlers::contracts::router())
        .merge(handlers::balances::router())
        .merge(handlers::health::router())
        .nest("/eth-transfer", handlers::eth_transfer::router())
        .nest("/coingate", handlers::coingate::router())
        .nest("/nowpayments", handlers::nowpayments::router());

    Router::new()
        .nest("/api", api)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(state)
}
