//! Exact final states reported by backends.

use std::collections::BTreeMap;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{HalError, HalResult};

/// The full amplitude vector of an `n`-qubit state.
///
/// Amplitude `i` belongs to the basis state whose bit `k` is the value of qubit `k`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Wrap an amplitude vector. Its length must be `2^num_qubits`.
    pub fn new(num_qubits: usize, amplitudes: Vec<Complex64>) -> HalResult<Self> {
        let expected = 1usize
            .checked_shl(num_qubits as u32)
            .ok_or_else(|| HalError::InvalidState(format!("{num_qubits} qubits is too wide")))?;
        if amplitudes.len() != expected {
            return Err(HalError::InvalidState(format!(
                "expected {expected} amplitudes for {num_qubits} qubits, got {}",
                amplitudes.len()
            )));
        }
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// The |0…0⟩ state.
    pub fn zero(num_qubits: usize) -> Self {
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            num_qubits,
            amplitudes,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of basis states, `2^num_qubits`.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Raw amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Bitstring label of a basis state (rightmost character is qubit 0).
    pub fn bitstring(&self, index: usize) -> String {
        format!("{:0width$b}", index, width = self.num_qubits)
    }

    /// Map from bitstring to amplitude, with exact zeros omitted.
    pub fn to_dict(&self) -> BTreeMap<String, Complex64> {
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(_, amp)| amp.re != 0.0 || amp.im != 0.0)
            .map(|(i, amp)| (self.bitstring(i), *amp))
            .collect()
    }

    /// Born-rule probability of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Bloch vector `[x, y, z]` of one qubit's reduced density matrix.
    ///
    /// The length is 1 for a qubit in a pure product state and shrinks toward 0
    /// as the qubit becomes entangled with the rest of the register.
    pub fn reduced_bloch(&self, qubit: usize) -> HalResult<[f64; 3]> {
        if qubit >= self.num_qubits {
            return Err(HalError::InvalidState(format!(
                "qubit {qubit} outside {}-qubit state",
                self.num_qubits
            )));
        }
        let mask = 1usize << qubit;
        let mut p0 = 0.0;
        let mut p1 = 0.0;
        let mut rho10 = Complex64::new(0.0, 0.0);
        for i in (0..self.dim()).filter(|i| i & mask == 0) {
            let a0 = self.amplitudes[i];
            let a1 = self.amplitudes[i | mask];
            p0 += a0.norm_sqr();
            p1 += a1.norm_sqr();
            rho10 += a1 * a0.conj();
        }
        Ok([2.0 * rho10.re, 2.0 * rho10.im, p0 - p1])
    }

    /// Squared norm of the whole vector; 1.0 for a valid state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }
}
