//! Error Types
//!
//! Layered error types with HTTP status code mapping at the API boundary.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Domain-level errors for rejected input values
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unsupported network: {0}")]
    UnsupportedNetwork(String),

    #[error("{0}")]
    InvalidAmount(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid currency {0}. Supported: BTC, ETH, USDT, USDC")]
    UnsupportedCurrency(String),
}

/// Errors raised while talking to an EVM node
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("{0}")]
    Rpc(String),

    #[error("Transaction {0} reverted")]
    Reverted(String),

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Deployment receipt carries no contract address")]
    MissingContractAddress,

    #[error("Invalid signing key: {0}")]
    InvalidKey(String),

    #[error("Invalid RPC URL: {0}")]
    InvalidUrl(String),
}

/// Errors returned by third-party HTTP APIs (payment processors, block explorer)
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered with an error; the message is passed through verbatim
    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("{0} API key not configured")]
    MissingApiKey(&'static str),
}

/// Errors reading the compiled contract artifact
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Contract artifact not readable at {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Contract artifact malformed: {0}")]
    Malformed(String),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    ContractUnavailable(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::Domain(
                DomainError::InvalidAmount(_)
                | DomainError::InvalidAddress(_)
                | DomainError::UnsupportedCurrency(_),
            ) => {
                StatusCode::BAD_REQUEST
            }
            Self::Configuration(_)
            | Self::ContractUnavailable(_)
            | Self::Domain(DomainError::UnsupportedNetwork(_))
            | Self::Chain(_)
            | Self::Provider(_)
            | Self::Artifact(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Domain(DomainError::InvalidAmount(_)) => "INVALID_AMOUNT",
            Self::Domain(DomainError::InvalidAddress(_)) => "INVALID_ADDRESS",
            Self::Domain(DomainError::UnsupportedCurrency(_)) => "INVALID_CURRENCY",
            Self::Configuration(_) | Self::Domain(DomainError::UnsupportedNetwork(_)) => {
                "CONFIGURATION_ERROR"
            }
            Self::ContractUnavailable(_) => "CONTRACT_UNAVAILABLE",
            Self::Chain(_) => "CHAIN_ERROR",
            Self::Provider(_) => "PROVIDER_ERROR",
            Self::Artifact(_) => "ARTIFACT_ERROR",
        }
    }

    /// Human readable message; upstream messages are kept verbatim
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Validation(errors) => errors.join("; "),
            other => other.to_string(),
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            ApiError::UseCase(uc_error) => {
                let details = if let UseCaseError::Validation(errors) = uc_error {
                    Some(
                        errors
                            .iter()
                            .map(|e| {
                                let (field, message) = e.split_once(": ").unwrap_or(("", e.as_str()));
                                FieldError {
                                    field: field.to_string(),
                                    message: message.to_string(),
                                }
                            })
                            .collect(),
                    )
                } else {
                    None
                };
                if uc_error.status_code().is_server_error() {
                    tracing::error!(code = uc_error.error_code(), error = %uc_error, "Request failed");
                }
                (uc_error.status_code(), uc_error.error_code().to_string(), uc_error.message(), details)
            }
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Unexpected internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR".to_string(),
                    "An unexpected error occurred".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            success: false,
            error: ErrorDetail { code, message, details },
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        messages.sort();
        ApiError::UseCase(UseCaseError::Validation(messages))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::UseCase(UseCaseError::Validation(vec![format!("body: {}", rejection.body_text())]))
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::UseCase(UseCaseError::Domain(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_map_to_bad_request() {
        assert_eq!(
            UseCaseError::Validation(vec!["amount: required".to_string()]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            UseCaseError::Domain(DomainError::InvalidAmount("Amount must be positive".to_string())).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_configuration_and_upstream_errors_map_to_internal() {
        let unsupported = UseCaseError::Domain(DomainError::UnsupportedNetwork("mainnet".to_string()));
        assert_eq!(unsupported.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(unsupported.error_code(), "CONFIGURATION_ERROR");

        let upstream = UseCaseError::Provider(ProviderError::Upstream("Invalid api key".to_string()));
        assert_eq!(upstream.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(upstream.message(), "Invalid api key");
    }

    #[test]
    fn test_chain_error_message_is_verbatim() {
        let err = UseCaseError::Chain(ChainError::Rpc("insufficient funds for gas".to_string()));
        assert_eq!(err.message(), "insufficient funds for gas");
        assert_eq!(err.error_code(), "CHAIN_ERROR");
    }

    #[tokio::test]
    async fn test_rejected_json_body_maps_to_validation_error() {
        use axum::extract::FromRequest;
        use std::collections::HashMap;

        let request = axum::http::Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(axum::body::Body::from(r#"{"amount":"abc"}"#))
            .unwrap();
        let rejection = Json::<HashMap<String, u64>>::from_request(request, &()).await.unwrap_err();

        match ApiError::from(rejection) {
            ApiError::UseCase(err) => {
                assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
                assert_eq!(err.error_code(), "VALIDATION_ERROR");
                assert!(err.message().starts_with("body: "));
            }
            ApiError::Internal(err) => panic!("expected validation error, got {err}"),
        }
    }
}
