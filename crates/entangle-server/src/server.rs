//! Axum server setup and routing.

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/", get(api::root::root))
        .route("/health", get(api::health::health))
        .route(
            "/status",
            get(api::status::list_status_checks).post(api::status::create_status_check),
        )
        // Quantum routes
        .route("/quantum/simulate", post(api::quantum::simulate))
        .route("/quantum/state-vector", post(api::quantum::state_vector))
        .route("/quantum/bell/histogram", get(api::quantum::bell_histogram));

    let cors = build_cors_layer(&state.config.cors_origins);

    Router::new()
        .nest("/api", api_routes)
        // Nested "/" only matches "/api"
        .route("/api/", get(api::root::root))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `origins` is a comma-separated list of allowed origins. A `*` entry
/// anywhere in the list allows every origin.
fn build_cors_layer(origins: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let entries: Vec<&str> = origins
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .collect();

    // AllowOrigin::list panics on a wildcard entry
    if entries.contains(&"*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = entries.iter().filter_map(|o| o.parse().ok()).collect();
    layer.allow_origin(allowed)
}
