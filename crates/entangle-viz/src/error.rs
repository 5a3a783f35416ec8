//! Error types for rendering.

use entangle_hal::HalError;
use thiserror::Error;

/// Errors raised while rendering a visual.
#[derive(Debug, Error)]
pub enum VizError {
    /// Too many qubits for a per-qubit rendering.
    #[error("cannot render {qubits} qubits, limit is {max}")]
    TooManyQubits { qubits: usize, max: usize },

    /// A derived quantity was NaN or infinite.
    #[error("state of qubit {qubit} is not finite")]
    NonFiniteState { qubit: usize },

    /// The state could not be reduced.
    #[error(transparent)]
    State(#[from] HalError),
}

/// Result type for rendering.
pub type VizResult<T> = Result<T, VizError>;
