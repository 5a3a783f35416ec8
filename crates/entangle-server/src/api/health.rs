//! Health check endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::dto::HealthResponse;
use crate::state::AppState;

/// GET /api/health - Health check endpoint.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        backend: state.backend.name().to_string(),
    })
}
