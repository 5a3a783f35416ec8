//! Error types for the HAL crate.

use thiserror::Error;

/// Errors that can occur while validating or executing a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// Circuit is malformed for execution (bad operand, repeated qubit).
    #[error("Invalid circuit: {0}")]
    InvalidCircuit(String),

    /// Circuit exceeds backend capabilities.
    #[error("Circuit exceeds backend capabilities: {0}")]
    CircuitTooLarge(String),

    /// Shot count outside what the backend accepts.
    #[error("Invalid shot count: {0}")]
    InvalidShots(String),

    /// Amplitude data does not describe a valid state.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Simulation failed internally.
    #[error("Simulation failed: {0}")]
    SimulationFailed(String),
}

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;
