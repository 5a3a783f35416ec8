//! Entangle Hardware Abstraction Layer
//!
//! This crate defines the seam between the HTTP surface and whatever executes
//! circuits. A backend is handed a freshly built [`entangle_ir::Circuit`] and
//! either samples measurement outcomes over a number of shots, or reports the
//! exact final state vector.
//!
//! # Overview
//!
//! - A common [`Backend`] trait covering validation and both execution modes
//! - [`Capabilities`] to describe backend limits
//! - [`Counts`] and [`ExecutionResult`] for sampled results
//! - [`StateVector`] for exact results
//!
//! # Bitstring convention
//!
//! Bitstrings are written most-significant qubit first: the rightmost character
//! is qubit 0. `"01"` means qubit 0 measured `1` and qubit 1 measured `0`.
//!
//! # Example
//!
//! ```ignore
//! use entangle_hal::Backend;
//! use entangle_adapter_sim::SimulatorBackend;
//! use entangle_ir::Circuit;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SimulatorBackend::new();
//!     let result = backend.sample(&Circuit::bell(), 1000).await?;
//!     println!("Results: {:?}", result.counts);
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod result;
pub mod statevector;

pub use backend::Backend;
pub use capability::Capabilities;
pub use error::{HalError, HalResult};
pub use result::{Counts, ExecutionResult};
pub use statevector::StateVector;
