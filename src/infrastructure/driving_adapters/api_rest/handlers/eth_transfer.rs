//! Native Transfer Handlers

use axum::{
    extract::{Query, State},
    routing::post,
    Json, Router,
};
use validator::Validate;

use crate::domain::models::NetworkName;
use crate::infrastructure::driving_adapters::api_rest::dto::transfer::{SendEtherDto, SendEtherResponse};
use crate::infrastructure::driving_adapters::api_rest::dto::NetworkQuery;
use crate::infrastructure::driving_adapters::api_rest::extract::JsonBody;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for `/eth-transfer`
pub fn router() -> Router<AppState> {
    Router::new().route("/send", post(send_ether))
}

/// POST /eth-transfer/send - Send ether from the network's signer
///
/// # Responses
///
/// * 200 OK - Transfer confirmed
/// * 400 Bad Request - Missing fields, non-positive amount or malformed recipient
/// * 500 Internal Server Error - Missing signer, insufficient balance or chain failure
#[axum::debug_handler]
async fn send_ether(
    State(state): State<AppState>,
    Query(query): Query<NetworkQuery>,
    JsonBody(dto): JsonBody<SendEtherDto>,
) -> Result<Json<SendEtherResponse>, ApiError> {
    dto.validate()?;
    let network = query.network_or(NetworkName::Localhost)?;

    let transfer = state
        .send_ether_use_case
        .execute(
            network,
            dto.recipient.as_deref().unwrap_or_default(),
            dto.amount.unwrap_or_default(),
        )
        .await?;

    Ok(Json(SendEtherResponse::from(transfer)))
}
