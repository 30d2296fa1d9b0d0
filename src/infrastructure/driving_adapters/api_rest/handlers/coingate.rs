//! CoinGate Handlers

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::dto::coingate::{
    CoinGateWebhookDto, CreateOrderDto, CreateOrderResponse, CurrenciesResponse, CurrencyDto, OrderDetailsResponse,
};
use crate::infrastructure::driving_adapters::api_rest::dto::AckResponse;
use crate::infrastructure::driving_adapters::api_rest::extract::JsonBody;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for `/coingate`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/order", post(create_order))
        .route("/order/{id}", get(get_order))
        .route("/currencies", get(list_currencies))
        .route("/webhook", post(webhook))
}

/// POST /coingate/order - Create a payment order
///
/// # Responses
///
/// * 200 OK - Order created
/// * 400 Bad Request - Missing amount or currency
/// * 500 Internal Server Error - CoinGate rejected the order
#[axum::debug_handler]
async fn create_order(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreateOrderDto>,
) -> Result<Json<CreateOrderResponse>, ApiError> {
    dto.validate()?;

    let order = state.create_coingate_order_use_case.execute(dto.into()).await?;

    Ok(Json(CreateOrderResponse {
        success: true,
        order: order.into(),
    }))
}

/// GET /coingate/order/{id} - Order details with conversion figures
#[axum::debug_handler]
async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderDetailsResponse>, ApiError> {
    let priced = state.get_coingate_order_use_case.execute(&id).await?;

    Ok(Json(OrderDetailsResponse {
        success: true,
        order: priced.into(),
    }))
}

/// GET /coingate/currencies - Currencies CoinGate accepts
#[axum::debug_handler]
async fn list_currencies(State(state): State<AppState>) -> Result<Json<CurrenciesResponse>, ApiError> {
    let currencies = state.list_coingate_currencies_use_case.execute().await?;

    Ok(Json(CurrenciesResponse {
        success: true,
        currencies: currencies.into_iter().map(CurrencyDto::from).collect(),
    }))
}

/// POST /coingate/webhook - Order status callback
///
/// The payload is logged and acknowledged. It is not authenticated.
#[axum::debug_handler]
async fn webhook(JsonBody(payload): JsonBody<CoinGateWebhookDto>) -> Json<AckResponse> {
    tracing::info!(
        order_id = payload.id.as_deref().unwrap_or("unknown"),
        status = payload.status.as_deref().unwrap_or("unknown"),
        fields = payload.rest.len(),
        "CoinGate webhook received"
    );

    Json(AckResponse::ok())
}
