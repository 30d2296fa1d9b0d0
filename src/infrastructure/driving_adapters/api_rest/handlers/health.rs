//! Health Handler

use axum::{extract::State, routing::get, Json, Router};

use crate::infrastructure::driving_adapters::api_rest::dto::contract::HealthResponse;
use crate::infrastructure::driving_adapters::api_rest::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// GET /health - Liveness plus whether the default network has a contract
#[axum::debug_handler]
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::from(state.get_health_use_case.execute().await))
}
