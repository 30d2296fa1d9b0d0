//! Balance & History Handlers

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::domain::models::NetworkName;
use crate::infrastructure::driving_adapters::api_rest::dto::balance::TransactionsResponse;
use crate::infrastructure::driving_adapters::api_rest::dto::common::parse_address;
use crate::infrastructure::driving_adapters::api_rest::dto::contract::BalanceResponse;
use crate::infrastructure::driving_adapters::api_rest::dto::NetworkQuery;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/native-balance/{address}", get(get_native_balance))
        .route("/transactions/{address}", get(get_transactions))
}

/// GET /native-balance/{address} - Ether balance of an account
///
/// `?network=` defaults to `localhost`.
#[axum::debug_handler]
async fn get_native_balance(
    State(state): State<AppState>,
    Path(address): Path<String>,
    Query(query): Query<NetworkQuery>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let network = query.network_or(NetworkName::Localhost)?;
    let account = parse_address(&address)?;

    let balance = state.get_native_balance_use_case.execute(network, account).await?;

    Ok(Json(BalanceResponse { balance }))
}

/// GET /transactions/{address} - Recent transactions of an account
///
/// `?network=` defaults to `sepolia`. The local network is scanned directly;
/// test networks go through the block explorer.
///
/// # Responses
///
/// * 200 OK - Transactions, newest first
/// * 400 Bad Request - Malformed address
/// * 500 Internal Server Error - Explorer key missing or explorer failure
#[axum::debug_handler]
async fn get_transactions(
    State(state): State<AppState>,
    Path(address): Path<String>,
    Query(query): Query<NetworkQuery>,
) -> Result<Json<TransactionsResponse>, ApiError> {
    let network = query.network_or(NetworkName::Sepolia)?;
    let account = parse_address(&address)?;

    let transactions = state.get_transaction_history_use_case.execute(network, account).await?;

    Ok(Json(TransactionsResponse::from(transactions)))
}
