//! Token Contract Handlers
//!
//! The per-network registry contract, explicit token deployments and
//! transactions against the contract. Every route takes an optional
//! `?network=` query parameter defaulting to `localhost`.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use crate::domain::models::NetworkName;
use crate::infrastructure::driving_adapters::api_rest::dto::common::parse_address;
use crate::infrastructure::driving_adapters::api_rest::dto::contract::{
    BalanceResponse, ContractInfoResponse, DeployTokenDto, DeployTokenResponse, DeployedTokenDto,
    DeployedTokensResponse, OwnerResponse, RelayTransactionDto, RelayTransactionResponse, TransferToUserDto,
    TransferToUserResponse,
};
use crate::infrastructure::driving_adapters::api_rest::dto::NetworkQuery;
use crate::infrastructure::driving_adapters::api_rest::extract::JsonBody;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for token contract endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contract", get(get_contract))
        .route("/balance/{address}", get(get_token_balance))
        .route("/owner", get(get_owner))
        .route("/deploy-token", post(deploy_token))
        .route("/deployed-tokens", get(list_deployed_tokens))
        .route("/transfer-to-user", post(transfer_to_user))
        .route("/transfer", post(relay_transaction))
}

/// GET /contract - Address and ABI of the network's token contract
///
/// Deploys the contract first if the network has none yet.
///
/// # Responses
///
/// * 200 OK - Contract info
/// * 500 Internal Server Error - Unknown network, missing credentials or failed deployment
#[axum::debug_handler]
async fn get_contract(
    State(state): State<AppState>,
    Query(query): Query<NetworkQuery>,
) -> Result<Json<ContractInfoResponse>, ApiError> {
    let network = query.network_or(NetworkName::Localhost)?;

    let info = state.get_contract_info_use_case.execute(network).await?;

    Ok(Json(ContractInfoResponse::from(info)))
}

/// GET /balance/{address} - Token balance of an account
///
/// # Responses
///
/// * 200 OK - Balance in whole tokens
/// * 400 Bad Request - Malformed address
#[axum::debug_handler]
async fn get_token_balance(
    State(state): State<AppState>,
    Path(address): Path<String>,
    Query(query): Query<NetworkQuery>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let network = query.network_or(NetworkName::Localhost)?;
    let account = parse_address(&address)?;

    let balance = state.get_token_balance_use_case.execute(network, account).await?;

    Ok(Json(BalanceResponse { balance }))
}

/// GET /owner - Owner of the network's token contract
#[axum::debug_handler]
async fn get_owner(
    State(state): State<AppState>,
    Query(query): Query<NetworkQuery>,
) -> Result<Json<OwnerResponse>, ApiError> {
    let network = query.network_or(NetworkName::Localhost)?;

    let owner = state.get_contract_owner_use_case.execute(network).await?;

    Ok(Json(OwnerResponse {
        owner: owner.to_string(),
    }))
}

/// POST /deploy-token - Deploy a new token and record it
///
/// # Responses
///
/// * 200 OK - Token deployed
/// * 400 Bad Request - Missing name, symbol or a non-positive supply
/// * 500 Internal Server Error - Missing credentials or failed deployment
#[axum::debug_handler]
async fn deploy_token(
    State(state): State<AppState>,
    Query(query): Query<NetworkQuery>,
    JsonBody(dto): JsonBody<DeployTokenDto>,
) -> Result<Json<DeployTokenResponse>, ApiError> {
    dto.validate()?;
    let network = query.network_or(NetworkName::Localhost)?;

    let deployed = state.deploy_token_use_case.execute(network, dto.into()).await?;

    Ok(Json(DeployTokenResponse::from(deployed)))
}

/// GET /deployed-tokens - Tokens deployed on a network, oldest first
#[axum::debug_handler]
async fn list_deployed_tokens(
    State(state): State<AppState>,
    Query(query): Query<NetworkQuery>,
) -> Result<Json<DeployedTokensResponse>, ApiError> {
    let network = query.network_or(NetworkName::Localhost)?;

    let tokens = state.list_deployed_tokens_use_case.execute(network).await;

    Ok(Json(DeployedTokensResponse {
        tokens: tokens.into_iter().map(DeployedTokenDto::from).collect(),
    }))
}

/// POST /transfer-to-user - Owner push transfer of tokens
///
/// # Responses
///
/// * 200 OK - Transfer confirmed
/// * 400 Bad Request - Missing or malformed recipient, non-positive amount
/// * 500 Internal Server Error - Transfer reverted or chain unavailable
#[axum::debug_handler]
async fn transfer_to_user(
    State(state): State<AppState>,
    Query(query): Query<NetworkQuery>,
    JsonBody(dto): JsonBody<TransferToUserDto>,
) -> Result<Json<TransferToUserResponse>, ApiError> {
    dto.validate()?;
    let network = query.network_or(NetworkName::Localhost)?;
    let recipient = parse_address(dto.recipient_address.as_deref().unwrap_or_default())?;

    let transfer = state
        .transfer_to_user_use_case
        .execute(network, recipient, dto.amount.unwrap_or_default())
        .await?;

    Ok(Json(TransferToUserResponse::from(transfer)))
}

/// POST /transfer - Relay a transaction signed by the caller
///
/// The blob is forwarded unmodified; the response arrives after confirmation.
#[axum::debug_handler]
async fn relay_transaction(
    State(state): State<AppState>,
    Query(query): Query<NetworkQuery>,
    JsonBody(dto): JsonBody<RelayTransactionDto>,
) -> Result<Json<RelayTransactionResponse>, ApiError> {
    dto.validate()?;
    let network = query.network_or(NetworkName::Localhost)?;

    let outcome = state
        .relay_signed_transaction_use_case
        .execute(network, dto.signed_tx.as_deref().unwrap_or_default())
        .await?;

    Ok(Json(RelayTransactionResponse::from(outcome)))
}
