//! Request Extractors

use axum::extract::FromRequest;

use crate::shared::errors::ApiError;

/// JSON request body whose rejections are reported in the API error envelope
///
/// Malformed JSON, a wrong field type or a missing content type answer with
/// `400 VALIDATION_ERROR` instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
