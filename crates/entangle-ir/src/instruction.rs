//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};

use crate::gate::StandardGate;
use crate::qubit::QubitId;

/// The kind of instruction in a circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstructionKind {
    /// A unitary gate.
    Gate(StandardGate),
    /// Computational-basis measurement of a single qubit.
    Measure,
}

/// A complete instruction with operands.
///
/// For two-qubit gates `qubits[0]` is the control (or first swap operand) and
/// `qubits[1]` the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// The kind of instruction.
    pub kind: InstructionKind,
    /// Qubits this instruction operates on.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: StandardGate, qubit: QubitId) -> Self {
        Self {
            kind: InstructionKind::Gate(gate),
            qubits: vec![qubit],
        }
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit_gate(gate: StandardGate, q1: QubitId, q2: QubitId) -> Self {
        Self {
            kind: InstructionKind::Gate(gate),
            qubits: vec![q1, q2],
        }
    }

    /// Create a measurement instruction.
    pub fn measure(qubit: QubitId) -> Self {
        Self {
            kind: InstructionKind::Measure,
            qubits: vec![qubit],
        }
    }

    /// Check if this is a gate.
    pub fn is_gate(&self) -> bool {
        matches!(self.kind, InstructionKind::Gate(_))
    }

    /// Check if this is a measurement.
    pub fn is_measure(&self) -> bool {
        matches!(self.kind, InstructionKind::Measure)
    }

    /// Get the gate if this is a gate instruction.
    pub fn as_gate(&self) -> Option<StandardGate> {
        match self.kind {
            InstructionKind::Gate(gate) => Some(gate),
            InstructionKind::Measure => None,
        }
    }

    /// Get the instruction name.
    pub fn name(&self) -> &str {
        match &self.kind {
            InstructionKind::Gate(gate) => gate.name(),
            InstructionKind::Measure => "measure",
        }
    }

    /// Lowest and highest qubit touched, inclusive.
    pub fn span(&self) -> (u32, u32) {
        let lo = self.qubits.iter().map(|q| q.0).min().unwrap_or(0);
        let hi = self.qubits.iter().map(|q| q.0).max().unwrap_or(0);
        (lo, hi)
    }
}
