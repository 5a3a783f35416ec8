//! Application state for the server.

use std::sync::Arc;

use entangle_adapter_sim::SimulatorBackend;
use entangle_hal::Backend;
use entangle_ir::{Circuit, GateSpec, IrResult};
use entangle_viz::{DARK, Palette};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::store::{MemoryStatusStore, StatusStore};

/// Shared application state.
pub struct AppState {
    /// Server configuration.
    pub config: ServerConfig,
    /// Execution backend.
    pub backend: Arc<dyn Backend>,
    /// Status-check log.
    pub store: Arc<dyn StatusStore>,
    /// Figure colours.
    pub palette: Palette,
}

impl AppState {
    /// State with the local simulator and an in-memory status log.
    pub fn with_config(config: ServerConfig) -> Self {
        let backend = SimulatorBackend::new().with_max_shots(config.limits.shots_max.max(1));
        Self {
            config,
            backend: Arc::new(backend),
            store: Arc::new(MemoryStatusStore::new()),
            palette: DARK,
        }
    }

    /// Replace the execution backend.
    pub fn with_backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = backend;
        self
    }

    /// Replace the status-check store.
    pub fn with_store(mut self, store: Arc<dyn StatusStore>) -> Self {
        self.store = store;
        self
    }

    /// Build a circuit from a gate list, honouring `strict_gates`.
    pub fn build_circuit(&self, num_qubits: u32, gates: &[GateSpec]) -> IrResult<Circuit> {
        if self.config.strict_gates {
            entangle_ir::build_strict(num_qubits, gates)
        } else {
            Ok(entangle_ir::build(num_qubits, gates))
        }
    }

    /// Reject a register width outside the configured bounds.
    pub fn check_qubits(&self, num_qubits: u32) -> Result<(), ApiError> {
        let l = &self.config.limits;
        if !(l.qubits_min..=l.qubits_max).contains(&num_qubits) {
            return Err(ApiError::Validation(format!(
                "num_qubits must be between {} and {}, got {num_qubits}",
                l.qubits_min, l.qubits_max
            )));
        }
        Ok(())
    }

    /// Reject a shot count outside the configured bounds.
    pub fn check_shots(&self, shots: u32) -> Result<(), ApiError> {
        let l = &self.config.limits;
        if !(l.shots_min..=l.shots_max).contains(&shots) {
            return Err(ApiError::Validation(format!(
                "shots must be between {} and {}, got {shots}",
                l.shots_min, l.shots_max
            )));
        }
        Ok(())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(ServerConfig::default())
    }
}
