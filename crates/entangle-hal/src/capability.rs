//! Backend capability descriptions.

use serde::{Deserialize, Serialize};

/// Limits and features a backend reports at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Backend name.
    pub name: String,
    /// Maximum register width.
    pub num_qubits: u32,
    /// Maximum shots per run.
    pub max_shots: u32,
    /// Whether this is a simulator.
    pub is_simulator: bool,
    /// Gate names the backend executes natively.
    pub gate_set: Vec<String>,
    /// Supported features (e.g. "statevector").
    pub features: Vec<String>,
}

impl Capabilities {
    /// Create capabilities for a statevector simulator.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            name: "simulator".into(),
            num_qubits,
            max_shots: 100_000,
            is_simulator: true,
            gate_set: ["h", "x", "y", "z", "cx", "cz", "swap"]
                .into_iter()
                .map(String::from)
                .collect(),
            features: vec!["statevector".into(), "sampling".into()],
        }
    }

    /// Set the maximum shot count.
    pub fn with_max_shots(mut self, max_shots: u32) -> Self {
        self.max_shots = max_shots;
        self
    }

    /// Whether a gate name is in the native set.
    pub fn supports_gate(&self, name: &str) -> bool {
        self.gate_set.iter().any(|g| g == name)
    }

    /// Whether a feature is advertised.
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}
