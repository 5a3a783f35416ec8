//! Entangle Server - HTTP API for simulating small quantum circuits.
//!
//! Clients describe a circuit as a qubit count plus a list of gates. The server
//! builds it, runs it on an [`entangle_hal::Backend`] (the local state-vector
//! simulator by default), and answers with JSON carrying rendered SVG figures:
//!
//! - `POST /api/quantum/simulate`: sampled counts, circuit diagram, histogram
//! - `POST /api/quantum/state-vector`: amplitude records and Bloch spheres
//! - `GET /api/quantum/bell/histogram`: a Bell-pair histogram as raw SVG
//! - `GET|POST /api/status`: a small status-check log
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use entangle_server::{AppState, ServerConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::default();
//!     let addr = config.bind_addr()?;
//!     let state = Arc::new(AppState::with_config(config));
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(addr).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dto;
pub mod error;
pub mod server;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::{CircuitLimits, ConfigError, ServerConfig};
pub use dto::{
    HealthResponse, SimulateRequest, SimulateResponse, StateVectorRequest, StateVectorResponse,
};
pub use error::ApiError;
pub use server::create_router;
pub use state::AppState;
pub use store::{MemoryStatusStore, StatusCheck, StatusStore, StoreError};

#[cfg(feature = "sqlite")]
pub use store::SqliteStatusStore;
