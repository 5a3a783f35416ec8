//! The supported gate set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gates that can appear in an Entangle circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandardGate {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Controlled-NOT gate (control, target).
    CX,
    /// Controlled-Z gate (control, target).
    CZ,
    /// SWAP gate.
    Swap,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::H => "h",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::CX => "cx",
            StandardGate::CZ => "cz",
            StandardGate::Swap => "swap",
        }
    }

    /// Look up a gate by its lowercase name.
    ///
    /// Names are matched exactly; `"H"` is not a gate.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "h" => Some(StandardGate::H),
            "x" => Some(StandardGate::X),
            "y" => Some(StandardGate::Y),
            "z" => Some(StandardGate::Z),
            "cx" => Some(StandardGate::CX),
            "cz" => Some(StandardGate::CZ),
            "swap" => Some(StandardGate::Swap),
            _ => None,
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::H | StandardGate::X | StandardGate::Y | StandardGate::Z => 1,
            StandardGate::CX | StandardGate::CZ | StandardGate::Swap => 2,
        }
    }

    /// Display label used by the circuit renderer.
    pub fn label(&self) -> &'static str {
        match self {
            StandardGate::H => "H",
            StandardGate::X | StandardGate::CX => "X",
            StandardGate::Y => "Y",
            StandardGate::Z | StandardGate::CZ => "Z",
            StandardGate::Swap => "SWAP",
        }
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for gate in [
            StandardGate::H,
            StandardGate::X,
            StandardGate::Y,
            StandardGate::Z,
            StandardGate::CX,
            StandardGate::CZ,
            StandardGate::Swap,
        ] {
            assert_eq!(StandardGate::from_name(gate.name()), Some(gate));
        }
    }

    #[test]
    fn test_unknown_and_uppercase_names() {
        assert_eq!(StandardGate::from_name("t"), None);
        assert_eq!(StandardGate::from_name("H"), None);
        assert_eq!(StandardGate::from_name(""), None);
    }

    #[test]
    fn test_arity() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::Swap.num_qubits(), 2);
    }
}
