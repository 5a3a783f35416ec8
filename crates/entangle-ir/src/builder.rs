//! Circuit construction from a declarative gate list.
//!
//! Clients describe circuits as an ordered list of `{type, target, control?}`
//! records. [`build`] applies them in order onto a fresh |0…0⟩ circuit.
//! Entries the builder cannot interpret are skipped; [`build_strict`] turns the
//! same entries into errors instead.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::circuit::Circuit;
use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::qubit::QubitId;

/// One entry of a declarative gate list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateSpec {
    /// Gate name as submitted (`h`, `x`, `y`, `z`, `cx`, `cz`, `swap`).
    #[serde(rename = "type")]
    pub gate: String,
    /// Target qubit (second operand for two-qubit gates).
    pub target: u32,
    /// Control qubit (first operand) for two-qubit gates; ignored otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<u32>,
}

impl GateSpec {
    /// A single-qubit entry.
    pub fn single(gate: impl Into<String>, target: u32) -> Self {
        Self {
            gate: gate.into(),
            target,
            control: None,
        }
    }

    /// A two-qubit entry with `control` as the first operand.
    pub fn controlled(gate: impl Into<String>, control: u32, target: u32) -> Self {
        Self {
            gate: gate.into(),
            target,
            control: Some(control),
        }
    }

    /// The gate this entry names, if it is in the supported set.
    pub fn kind(&self) -> Option<StandardGate> {
        StandardGate::from_name(&self.gate)
    }
}

/// Why an entry was not applied.
enum Skip {
    Unknown,
    MissingControl,
}

/// Resolve one entry into a gate and its operands.
fn resolve(spec: &GateSpec) -> Result<(StandardGate, Vec<QubitId>), Skip> {
    let gate = spec.kind().ok_or(Skip::Unknown)?;
    let target = QubitId(spec.target);
    if gate.num_qubits() == 1 {
        return Ok((gate, vec![target]));
    }
    let control = spec.control.ok_or(Skip::MissingControl)?;
    Ok((gate, vec![QubitId(control), target]))
}

/// Build a circuit from a gate list, skipping entries it cannot interpret.
///
/// Unknown gate types and two-qubit entries without a control are ignored.
/// Qubit indices are not checked here.
pub fn build(num_qubits: u32, gates: &[GateSpec]) -> Circuit {
    let mut circuit = Circuit::with_size("circuit", num_qubits);
    for (index, spec) in gates.iter().enumerate() {
        match resolve(spec) {
            Ok((gate, qubits)) => {
                circuit.apply(gate, &qubits);
            }
            Err(Skip::Unknown) => {
                debug!(index, gate = %spec.gate, "skipping unknown gate type");
            }
            Err(Skip::MissingControl) => {
                debug!(index, gate = %spec.gate, "skipping two-qubit gate without control");
            }
        }
    }
    circuit
}

/// Build a circuit from a gate list, rejecting entries [`build`] would skip.
pub fn build_strict(num_qubits: u32, gates: &[GateSpec]) -> IrResult<Circuit> {
    let mut circuit = Circuit::with_size("circuit", num_qubits);
    for (index, spec) in gates.iter().enumerate() {
        match resolve(spec) {
            Ok((gate, qubits)) => {
                circuit.apply(gate, &qubits);
            }
            Err(Skip::Unknown) => {
                return Err(IrError::UnknownGate {
                    name: spec.gate.clone(),
                    index,
                });
            }
            Err(Skip::MissingControl) => {
                return Err(IrError::MissingControl {
                    gate_name: spec.gate.clone(),
                    index,
                });
            }
        }
    }
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::InstructionKind;

    #[test]
    fn test_empty_gate_list() {
        let circuit = build(3, &[]);
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_ops(), 0);
    }

    #[test]
    fn test_order_is_preserved() {
        let gates = vec![
            GateSpec::single("x", 1),
            GateSpec::single("h", 0),
            GateSpec::controlled("swap", 0, 1),
        ];
        let circuit = build(2, &gates);
        let names: Vec<_> = circuit.instructions().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["x", "h", "swap"]);
    }

    #[test]
    fn test_control_is_first_operand() {
        let circuit = build(3, &[GateSpec::controlled("cx", 2, 0)]);
        let inst = &circuit.instructions()[0];
        assert_eq!(inst.kind, InstructionKind::Gate(StandardGate::CX));
        assert_eq!(inst.qubits, vec![QubitId(2), QubitId(0)]);
    }

    #[test]
    fn test_single_qubit_ignores_control() {
        let spec = GateSpec {
            gate: "h".into(),
            target: 1,
            control: Some(0),
        };
        let circuit = build(2, &[spec]);
        assert_eq!(circuit.instructions()[0].qubits, vec![QubitId(1)]);
    }

    #[test]
    fn test_permissive_skips() {
        let gates = vec![
            GateSpec::single("t", 0),
            GateSpec::single("cx", 1),
            GateSpec::single("CZ", 0),
            GateSpec::single("h", 0),
        ];
        let circuit = build(2, &gates);
        assert_eq!(circuit.num_ops(), 1);
        assert_eq!(circuit.instructions()[0].name(), "h");
    }

    #[test]
    fn test_strict_rejects_unknown() {
        let gates = vec![GateSpec::single("h", 0), GateSpec::single("rx", 0)];
        let err = build_strict(2, &gates).unwrap_err();
        assert_eq!(
            err,
            IrError::UnknownGate {
                name: "rx".into(),
                index: 1
            }
        );
    }

    #[test]
    fn test_strict_rejects_missing_control() {
        let err = build_strict(2, &[GateSpec::single("swap", 1)]).unwrap_err();
        assert!(matches!(err, IrError::MissingControl { index: 0, .. }));
        assert!(err.to_string().contains("swap"));
    }

    #[test]
    fn test_strict_matches_permissive_on_clean_input() {
        let gates = vec![GateSpec::single("h", 0), GateSpec::controlled("cx", 0, 1)];
        assert_eq!(build_strict(2, &gates).unwrap(), build(2, &gates));
    }

    #[test]
    fn test_deserialize_gate_spec() {
        let spec: GateSpec =
            serde_json::from_str(r#"{"type": "cx", "control": 0, "target": 1}"#).unwrap();
        assert_eq!(spec, GateSpec::controlled("cx", 0, 1));

        let spec: GateSpec = serde_json::from_str(r#"{"type": "h", "target": 2}"#).unwrap();
        assert_eq!(spec.control, None);

        let spec: GateSpec =
            serde_json::from_str(r#"{"type": "cx", "target": 1, "control": null}"#).unwrap();
        assert_eq!(spec.control, None);
    }
}
