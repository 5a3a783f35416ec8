//! Circuit simulation endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use tokio::task;

use entangle_ir::Circuit;
use entangle_viz::{
    Image, SVG_FORMAT, SVG_MIME, format_counts, format_state, render_bloch_multivector,
    render_circuit, render_histogram,
};

use crate::dto::{
    HistogramQuery, SimulateRequest, SimulateResponse, StateVectorRequest, StateVectorResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_BELL_SHOTS: i64 = 100;

/// POST /api/quantum/simulate - Sample a circuit and render its diagram and histogram.
pub async fn simulate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SimulateRequest>,
) -> Result<Json<SimulateResponse>, ApiError> {
    state.check_qubits(req.num_qubits)?;
    state.check_shots(req.shots)?;

    let circuit = state.build_circuit(req.num_qubits, &req.gates)?;
    let result = state.backend.sample(&circuit, req.shots).await?;

    tracing::info!(
        qubits = req.num_qubits,
        ops = circuit.num_ops(),
        shots = req.shots,
        outcomes = result.counts.len(),
        "Simulated circuit"
    );

    let palette = state.palette;
    let measured = circuit.with_measurements();
    let (circuit_diagram, view) = task::spawn_blocking(move || {
        let diagram = Image::svg(&render_circuit(&measured, &palette));
        (diagram, format_counts(&result.counts, &palette))
    })
    .await?;

    Ok(Json(SimulateResponse {
        circuit_diagram,
        histogram: view.histogram,
        counts: view.counts,
        total_shots: req.shots,
        image_format: SVG_FORMAT,
    }))
}

/// POST /api/quantum/state-vector - Exact final state of a circuit.
pub async fn state_vector(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StateVectorRequest>,
) -> Result<Json<StateVectorResponse>, ApiError> {
    state.check_qubits(req.num_qubits)?;

    let circuit = state.build_circuit(req.num_qubits, &req.gates)?;
    let sv = state.backend.state(&circuit).await?;

    let palette = state.palette;
    let bloch_max = state.config.limits.bloch_max_qubits as usize;
    let (records, bloch) = task::spawn_blocking(move || {
        let records = format_state(&sv);
        let bloch = if sv.num_qubits() <= bloch_max {
            match render_bloch_multivector(&sv, bloch_max, &palette) {
                Ok(svg) => Some(Image::svg(&svg)),
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping Bloch rendering");
                    None
                }
            }
        } else {
            None
        };
        (records, bloch)
    })
    .await?;

    Ok(Json(StateVectorResponse {
        num_states: records.len(),
        state_vector: records,
        bloch_spheres: bloch.into_iter().collect(),
        image_format: SVG_FORMAT,
    }))
}

/// GET /api/quantum/bell/histogram - Histogram of a fresh Bell circuit as SVG.
pub async fn bell_histogram(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistogramQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let requested = query.shots_or(DEFAULT_BELL_SHOTS);
    let max = state.config.limits.shots_max;
    let shots = u32::try_from(requested)
        .ok()
        .filter(|s| (1..=max).contains(s))
        .ok_or_else(|| {
            ApiError::Validation(format!(
                "shots must be between 1 and {max}, got {requested}"
            ))
        })?;

    let result = state.backend.sample(&Circuit::bell(), shots).await?;

    let palette = state.palette;
    let svg = task::spawn_blocking(move || {
        render_histogram(&result.counts, "Measurement Results", &palette)
    })
    .await?;

    Ok(([(header::CONTENT_TYPE, SVG_MIME)], svg))
}
