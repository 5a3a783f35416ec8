//! High-level circuit builder API.

use serde::{Deserialize, Serialize};

use crate::gate::StandardGate;
use crate::instruction::Instruction;
use crate::qubit::QubitId;

/// A quantum circuit.
///
/// An ordered list of instructions over a fixed register of qubits, all starting
/// in |0⟩. Order is the temporal order of application. The builder methods do not
/// check qubit indices against the register width; backends reject out-of-range
/// operands when the circuit is validated for execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Register width.
    num_qubits: u32,
    /// Instructions in application order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a circuit with a given number of qubits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            instructions: vec![],
        }
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> &mut Self {
        self.push(Instruction::single_qubit_gate(StandardGate::H, qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> &mut Self {
        self.push(Instruction::single_qubit_gate(StandardGate::X, qubit))
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> &mut Self {
        self.push(Instruction::single_qubit_gate(StandardGate::Y, qubit))
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> &mut Self {
        self.push(Instruction::single_qubit_gate(StandardGate::Z, qubit))
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> &mut Self {
        self.push(Instruction::two_qubit_gate(StandardGate::CX, control, target))
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> &mut Self {
        self.push(Instruction::two_qubit_gate(StandardGate::CZ, control, target))
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> &mut Self {
        self.push(Instruction::two_qubit_gate(StandardGate::Swap, q1, q2))
    }

    /// Apply a gate by kind. `qubits` must hold as many operands as the gate's arity.
    pub fn apply(&mut self, gate: StandardGate, qubits: &[QubitId]) -> &mut Self {
        match (gate.num_qubits(), qubits) {
            (1, [q]) => self.push(Instruction::single_qubit_gate(gate, *q)),
            (2, [a, b]) => self.push(Instruction::two_qubit_gate(gate, *a, *b)),
            _ => self,
        }
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Measure a single qubit.
    pub fn measure(&mut self, qubit: QubitId) -> &mut Self {
        self.push(Instruction::measure(qubit))
    }

    /// Measure every qubit of the register.
    pub fn measure_all(&mut self) -> &mut Self {
        for i in 0..self.num_qubits {
            self.instructions.push(Instruction::measure(QubitId(i)));
        }
        self
    }

    /// Copy of this circuit with a full measurement appended.
    pub fn with_measurements(&self) -> Self {
        let mut measured = self.clone();
        measured.measure_all();
        measured
    }

    fn push(&mut self, instruction: Instruction) -> &mut Self {
        self.instructions.push(instruction);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Instructions in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Total number of instructions, measurements included.
    pub fn num_ops(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the circuit contains any measurement.
    pub fn has_measurements(&self) -> bool {
        self.instructions.iter().any(Instruction::is_measure)
    }

    /// Circuit depth: length of the longest chain of instructions sharing a qubit.
    ///
    /// Out-of-range operands are ignored here.
    pub fn depth(&self) -> usize {
        let mut frontier = vec![0usize; self.num_qubits()];
        for inst in &self.instructions {
            let level = inst
                .qubits
                .iter()
                .filter_map(|q| frontier.get(q.index()))
                .max()
                .copied()
                .unwrap_or(0)
                + 1;
            for q in &inst.qubits {
                if let Some(slot) = frontier.get_mut(q.index()) {
                    *slot = level;
                }
            }
        }
        frontier.into_iter().max().unwrap_or(0)
    }

    /// Group instruction indices into drawing columns.
    ///
    /// Like [`Circuit::depth`], but a multi-qubit instruction blocks every wire
    /// between its lowest and highest operand, so connectors never cross another
    /// gate in the same column. Operands past the register are clamped to the last wire.
    pub fn layers(&self) -> Vec<Vec<usize>> {
        let width = self.num_qubits();
        let mut frontier = vec![0usize; width];
        let mut layers: Vec<Vec<usize>> = Vec::new();
        if width == 0 {
            return layers;
        }

        for (idx, inst) in self.instructions.iter().enumerate() {
            let (lo, hi) = inst.span();
            let lo = (lo as usize).min(width - 1);
            let hi = (hi as usize).min(width - 1);
            let level = frontier[lo..=hi].iter().max().copied().unwrap_or(0);
            for slot in &mut frontier[lo..=hi] {
                *slot = level + 1;
            }
            if layers.len() <= level {
                layers.resize_with(level + 1, Vec::new);
            }
            layers[level].push(idx);
        }
        layers
    }

    // =========================================================================
    // Named circuits
    // =========================================================================

    /// Create a Bell state circuit (no measurement).
    pub fn bell() -> Self {
        let mut circuit = Self::with_size("bell", 2);
        circuit.h(QubitId(0)).cx(QubitId(0), QubitId(1));
        circuit
    }

    /// Create a GHZ state circuit (no measurement).
    pub fn ghz(n: u32) -> Self {
        let mut circuit = Self::with_size("ghz", n);
        if n == 0 {
            return circuit;
        }

        circuit.h(QubitId(0));
        for i in 0..n - 1 {
            circuit.cx(QubitId(i), QubitId(i + 1));
        }
        circuit
    }
}
