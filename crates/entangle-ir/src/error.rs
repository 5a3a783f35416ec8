//! Error types for the IR crate.

use thiserror::Error;

/// Errors raised when a gate list is built in strict mode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IrError {
    /// Gate type is not part of the supported gate set.
    #[error("Unknown gate type '{name}' at position {index}")]
    UnknownGate {
        /// The gate name as submitted.
        name: String,
        /// Position in the gate list.
        index: usize,
    },

    /// Two-qubit gate submitted without a control qubit.
    #[error("Gate '{gate_name}' at position {index} requires a control qubit")]
    MissingControl {
        /// Name of the gate.
        gate_name: String,
        /// Position in the gate list.
        index: usize,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
