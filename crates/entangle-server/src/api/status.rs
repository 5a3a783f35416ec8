//! Status-check log endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::dto::StatusCheckCreate;
use crate::error::ApiError;
use crate::state::AppState;
use crate::store::StatusCheck;

/// POST /api/status - Record a status check.
pub async fn create_status_check(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StatusCheckCreate>,
) -> Result<Json<StatusCheck>, ApiError> {
    let check = StatusCheck::new(req.client_name);
    state.store.insert(&check).await?;
    tracing::debug!(id = %check.id, client = %check.client_name, "Recorded status check");
    Ok(Json(check))
}

/// GET /api/status - List recorded status checks, oldest first.
pub async fn list_status_checks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    let checks = state.store.list(state.config.status_list_limit).await?;
    Ok(Json(checks))
}
