//! Entangle Local Statevector Simulator
//!
//! This crate provides the local simulator behind the Entangle HTTP endpoints. It
//! evolves a dense statevector once per request and samples shots from the final
//! distribution, so the cost of a run is dominated by the register width, not the
//! shot count.
//!
//! # Features
//!
//! - **Exact Simulation**: Full statevector representation for state-vector requests
//! - **Gate Set**: `h`, `x`, `y`, `z`, `cx`, `cz`, `swap`
//! - **Measurement Sampling**: Born-rule sampling with configurable shots
//! - **Reproducible Runs**: [`SimulatorBackend::with_seed`] fixes the sampling RNG
//!
//! # Performance
//!
//! | Qubits | Memory | Simulation Speed |
//! |--------|--------|------------------|
//! | 5 | 512 B | Instant |
//! | 10 | ~16 KB | Instant |
//! | 16 | ~1 MB | Fast |
//!
//! # Example
//!
//! ```ignore
//! use entangle_adapter_sim::SimulatorBackend;
//! use entangle_hal::Backend;
//! use entangle_ir::Circuit;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SimulatorBackend::new();
//!
//!     // Verify capabilities (sync, infallible)
//!     let caps = backend.capabilities();
//!     println!("Max qubits: {}", caps.num_qubits);
//!
//!     // Run a Bell state
//!     let result = backend.sample(&Circuit::bell(), 1000).await?;
//!
//!     // Expect ~50% |00⟩ and ~50% |11⟩
//!     println!("Results: {:?}", result.counts);
//!
//!     Ok(())
//! }
//! ```

mod simulator;
mod statevector;

pub use simulator::SimulatorBackend;
