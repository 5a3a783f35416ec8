//! Error types for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::store::StoreError;

/// API error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A request parameter is outside its declared bounds.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Building, validating or executing the circuit failed.
    #[error("Circuit error: {0}")]
    Circuit(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            ApiError::Circuit(_) => (StatusCode::BAD_REQUEST, "circuit_error"),
            ApiError::Storage(_) => (StatusCode::SERVICE_UNAVAILABLE, "storage_error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<entangle_ir::IrError> for ApiError {
    fn from(e: entangle_ir::IrError) -> Self {
        ApiError::Circuit(e.to_string())
    }
}

impl From<entangle_hal::HalError> for ApiError {
    fn from(e: entangle_hal::HalError) -> Self {
        ApiError::Circuit(e.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Storage(e.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("rendering task failed: {e}"))
    }
}
