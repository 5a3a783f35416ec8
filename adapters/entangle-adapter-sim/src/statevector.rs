//! Statevector simulation engine.

use num_complex::Complex64;
use rand::Rng;

use entangle_hal::{HalResult, StateVector};
use entangle_ir::{Instruction, InstructionKind, StandardGate};

/// A statevector representing a quantum state.
///
/// Operands are assumed to be validated against the register width before any
/// instruction is applied.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Apply an instruction to the statevector.
    pub fn apply(&mut self, instruction: &Instruction) {
        match instruction.kind {
            InstructionKind::Gate(gate) => {
                let qubits: Vec<_> = instruction.qubits.iter().map(|q| q.index()).collect();
                self.apply_gate(gate, &qubits);
            }
            // Sampling reads the final distribution; measurement never alters it.
            InstructionKind::Measure => {}
        }
    }

    fn apply_gate(&mut self, gate: StandardGate, qubits: &[usize]) {
        match (gate, qubits) {
            (StandardGate::H, &[q]) => self.apply_h(q),
            (StandardGate::X, &[q]) => self.apply_x(q),
            (StandardGate::Y, &[q]) => self.apply_y(q),
            (StandardGate::Z, &[q]) => self.apply_z(q),
            (StandardGate::CX, &[c, t]) => self.apply_cx(c, t),
            (StandardGate::CZ, &[c, t]) => self.apply_cz(c, t),
            (StandardGate::Swap, &[a, b]) => self.apply_swap(a, b),
            _ => {}
        }
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_z(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask != 0 {
                *amp = -*amp;
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = std::f64::consts::FRAC_1_SQRT_2;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    // =========================================================================
    // Two-qubit gate implementations
    // =========================================================================

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i | tgt_mask);
            }
        }
    }

    fn apply_cz(&mut self, control: usize, target: usize) {
        let both = (1 << control) | (1 << target);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & both == both {
                *amp = -*amp;
            }
        }
    }

    fn apply_swap(&mut self, q1: usize, q2: usize) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..self.amplitudes.len() {
            if (i & mask1 != 0) && (i & mask2 == 0) {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }

    // =========================================================================
    // Readout
    // =========================================================================

    /// Cumulative Born distribution, one entry per basis state.
    pub fn cumulative(&self) -> Vec<f64> {
        self.amplitudes
            .iter()
            .scan(0.0, |acc, amp| {
                *acc += amp.norm_sqr();
                Some(*acc)
            })
            .collect()
    }

    /// Hand the final amplitudes over as a HAL state.
    pub fn into_state(self) -> HalResult<StateVector> {
        StateVector::new(self.num_qubits, self.amplitudes)
    }
}

/// Draw one basis-state index from a cumulative distribution.
///
/// The draw is scaled by the final cumulative weight, so a distribution whose
/// total drifted below 1 never yields a zero-probability trailing state.
pub fn sample<R: Rng + ?Sized>(cumulative: &[f64], rng: &mut R) -> usize {
    let total = cumulative.last().copied().unwrap_or(0.0);
    let r = rng.r#gen::<f64>() * total;
    let idx = cumulative.partition_point(|&c| c <= r);
    // r can round up to total; cap at the first state that reaches it.
    idx.min(cumulative.partition_point(|&c| c < total))
}
