//! Entangle Circuit Representation
//!
//! This crate provides the circuit data structures used across Entangle, and the
//! builder that turns a declarative gate list (as posted by HTTP clients) into a
//! [`Circuit`].
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] for addressing qubits
//! - **Gates**: [`StandardGate`] for the supported gate set
//! - **Instructions**: [`Instruction`] combining a gate (or measurement) with its operands
//! - **Circuit**: [`Circuit`] ordered instruction list with a chaining builder API
//! - **Gate lists**: [`GateSpec`], [`build`] and [`build_strict`]
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use entangle_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2);
//! circuit.h(QubitId(0)).cx(QubitId(0), QubitId(1));
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 2);
//! ```
//!
//! # Example: From a Gate List
//!
//! ```rust
//! use entangle_ir::{GateSpec, build};
//!
//! let gates = vec![GateSpec::single("h", 0), GateSpec::controlled("cx", 0, 1)];
//! let circuit = build(2, &gates);
//! assert_eq!(circuit.num_ops(), 2);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `h` | 1 | Hadamard gate |
//! | `x`, `y`, `z` | 1 | Pauli gates |
//! | `cx` | 2 | Controlled-NOT (CNOT) |
//! | `cz` | 2 | Controlled-Z |
//! | `swap` | 2 | SWAP gate |

pub mod builder;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use builder::{GateSpec, build, build_strict};
pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::QubitId;
