//! Data Transfer Objects for the HTTP API.
//!
//! These types bridge circuit, backend and rendering types to JSON request and
//! response bodies.

use serde::{Deserialize, Serialize};

use entangle_hal::Counts;
use entangle_ir::GateSpec;
use entangle_viz::{AmplitudeRecord, Image};

// ============================================================================
// Quantum DTOs
// ============================================================================

/// Request to sample a circuit.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulateRequest {
    /// Register width.
    pub num_qubits: u32,
    /// Gates in application order.
    pub gates: Vec<GateSpec>,
    /// Number of shots.
    pub shots: u32,
}

/// Response from the simulate endpoint.
#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    /// Diagram of the measured circuit.
    pub circuit_diagram: Image,
    /// Bar chart of the counts.
    pub histogram: Image,
    /// Realized outcomes only.
    pub counts: Counts,
    /// Shots requested.
    pub total_shots: u32,
    /// Encoding of the image payloads (`svg`).
    pub image_format: &'static str,
}

/// Request for the exact final state.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StateVectorRequest {
    /// Register width.
    pub num_qubits: u32,
    /// Gates in application order.
    pub gates: Vec<GateSpec>,
}

/// Response from the state-vector endpoint.
#[derive(Debug, Serialize)]
pub struct StateVectorResponse {
    /// Non-negligible amplitudes, most probable first.
    pub state_vector: Vec<AmplitudeRecord>,
    /// Number of entries in `state_vector`.
    pub num_states: usize,
    /// Zero or one Bloch-sphere figure.
    pub bloch_spheres: Vec<Image>,
    /// Encoding of the image payloads (`svg`).
    pub image_format: &'static str,
}

/// Query for the Bell histogram.
///
/// `shots` is kept raw so that a value which is not an integer falls back to
/// the default instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct HistogramQuery {
    #[serde(alias = "s")]
    pub shots: Option<String>,
}

impl HistogramQuery {
    /// Parsed shot count, or `default` when absent or not an integer.
    pub fn shots_or(&self, default: i64) -> i64 {
        self.shots
            .as_deref()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(default)
    }
}

// ============================================================================
// Status DTOs
// ============================================================================

/// Request to record a status check.
#[derive(Debug, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

// ============================================================================
// Misc DTOs
// ============================================================================

/// Root greeting.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Name of the execution backend.
    pub backend: String,
}
