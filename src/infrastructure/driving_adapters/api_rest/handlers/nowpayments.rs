//! NowPayments Handlers

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::dto::nowpayments::{
    CreatePaymentDto, CreatePaymentResponse, PaymentStatusResponse,
};
use crate::infrastructure::driving_adapters::api_rest::dto::AckResponse;
use crate::infrastructure::driving_adapters::api_rest::extract::JsonBody;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for `/nowpayments`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-payment", post(create_payment))
        .route("/status/{payment_id}", get(get_status))
        .route("/ipn", post(ipn))
}

/// POST /nowpayments/create-payment - Create a hosted invoice
///
/// # Responses
///
/// * 200 OK - Invoice created
/// * 400 Bad Request - Missing fields, non-positive amount or unsupported currency
/// * 500 Internal Server Error - NowPayments rejected the invoice
#[axum::debug_handler]
async fn create_payment(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreatePaymentDto>,
) -> Result<Json<CreatePaymentResponse>, ApiError> {
    dto.validate()?;

    let invoice = state
        .create_nowpayments_payment_use_case
        .execute(dto.amount.unwrap_or_default(), dto.currency.as_deref().unwrap_or_default())
        .await?;

    Ok(Json(CreatePaymentResponse::from(invoice)))
}

/// GET /nowpayments/status/{payment_id} - Payment status and full payload
#[axum::debug_handler]
async fn get_status(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
) -> Result<Json<PaymentStatusResponse>, ApiError> {
    let status = state.get_nowpayments_status_use_case.execute(&payment_id).await?;

    Ok(Json(PaymentStatusResponse::from(status)))
}

/// POST /nowpayments/ipn - Instant payment notification
///
/// Logged and acknowledged; the `x-nowpayments-sig` header is not checked.
#[axum::debug_handler]
async fn ipn(JsonBody(payload): JsonBody<Value>) -> Json<AckResponse> {
    let payment_id = payload.get("payment_id").map(ToString::to_string);
    let status = payload.get("payment_status").and_then(Value::as_str);
    tracing::info!(
        payment_id = payment_id.as_deref().unwrap_or("unknown"),
        status = status.unwrap_or("unknown"),
        "NowPayments IPN received"
    );
    tracing::debug!(%payload, "NowPayments IPN payload");

    Json(AckResponse::ok())
}
