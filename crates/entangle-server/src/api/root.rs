//! Root greeting.

use axum::Json;

use crate::dto::RootResponse;

/// GET /api/ - Service greeting.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Quantum Entanglement API",
    })
}
