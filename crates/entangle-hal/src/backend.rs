//! Backend trait.
//!
//! A [`Backend`] is the execution collaborator behind both HTTP endpoints:
//!
//! ```text
//!   capabilities() ──→ validate() ──→ run()          (sampling mode)
//!    (sync, &ref)       (sync)    └─→ statevector()  (exact mode)
//! ```
//!
//! Callers normally go through the provided [`Backend::sample`] and
//! [`Backend::state`] methods, which validate first.
//!
//! ## Method table
//!
//! | Method | Kind | Required | Returns |
//! |--------|------|----------|---------|
//! | `name()` | sync | yes | `&str` |
//! | `capabilities()` | sync | yes | `&Capabilities` |
//! | `validate()` | sync | yes | `HalResult<()>` |
//! | `run()` | async | yes | `HalResult<ExecutionResult>` |
//! | `statevector()` | async | yes | `HalResult<StateVector>` |
//! | `sample()` | async | provided | `HalResult<ExecutionResult>` |
//! | `state()` | async | provided | `HalResult<StateVector>` |

use async_trait::async_trait;

use entangle_ir::Circuit;

use crate::capability::Capabilities;
use crate::error::{HalError, HalResult};
use crate::result::ExecutionResult;
use crate::statevector::StateVector;

/// Trait for circuit execution backends.
///
/// # Contract
///
/// - `capabilities()` MUST be synchronous and infallible.
/// - `validate()` MUST reject operands outside the register, two-qubit gates
///   acting twice on one qubit, and registers wider than the backend supports.
/// - `run()` samples the circuit as given; measurements are the caller's concern.
/// - `statevector()` ignores measurement instructions.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Get the capabilities of this backend.
    fn capabilities(&self) -> &Capabilities;

    /// Validate a circuit against backend constraints.
    fn validate(&self, circuit: &Circuit) -> HalResult<()>;

    /// Execute `shots` samples of the circuit and collect counts.
    async fn run(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult>;

    /// Compute the exact final state of the circuit.
    async fn statevector(&self, circuit: &Circuit) -> HalResult<StateVector>;

    /// Check a shot count against `capabilities().max_shots`.
    fn validate_shots(&self, shots: u32) -> HalResult<()> {
        let max = self.capabilities().max_shots;
        if shots == 0 || shots > max {
            return Err(HalError::InvalidShots(format!(
                "{shots} shots requested, backend '{}' accepts 1..={max}",
                self.name()
            )));
        }
        Ok(())
    }

    /// Sampling mode: validate, append a full measurement to a copy, run.
    async fn sample(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        self.validate(circuit)?;
        self.validate_shots(shots)?;
        let measured = circuit.with_measurements();
        self.run(&measured, shots).await
    }

    /// State-vector mode: validate, then compute the exact state.
    async fn state(&self, circuit: &Circuit) -> HalResult<StateVector> {
        self.validate(circuit)?;
        self.statevector(circuit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Counts;

    /// Backend that reports every run as all-zeros.
    struct ZeroBackend {
        caps: Capabilities,
    }

    #[async_trait]
    impl Backend for ZeroBackend {
        fn name(&self) -> &str {
            "zero"
        }

        fn capabilities(&self) -> &Capabilities {
            &self.caps
        }

        fn validate(&self, circuit: &Circuit) -> HalResult<()> {
            if circuit.num_qubits() > self.caps.num_qubits as usize {
                return Err(HalError::CircuitTooLarge("too wide".into()));
            }
            Ok(())
        }

        async fn run(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
            assert!(circuit.has_measurements());
            let zeros = "0".repeat(circuit.num_qubits());
            Ok(ExecutionResult::new(
                Counts::from_pairs([(zeros, u64::from(shots))]),
                shots,
            ))
        }

        async fn statevector(&self, circuit: &Circuit) -> HalResult<StateVector> {
            Ok(StateVector::zero(circuit.num_qubits()))
        }
    }

    fn backend() -> ZeroBackend {
        ZeroBackend {
            caps: Capabilities::simulator(3).with_max_shots(100),
        }
    }

    #[tokio::test]
    async fn test_sample_appends_measurements() {
        let result = backend().sample(&Circuit::bell(), 10).await.unwrap();
        assert_eq!(result.counts.get("00"), 10);
        assert_eq!(result.shots, 10);
    }

    #[tokio::test]
    async fn test_sample_rejects_bad_shots() {
        let b = backend();
        assert!(matches!(
            b.sample(&Circuit::bell(), 0).await,
            Err(HalError::InvalidShots(_))
        ));
        assert!(matches!(
            b.sample(&Circuit::bell(), 101).await,
            Err(HalError::InvalidShots(_))
        ));
    }

    #[tokio::test]
    async fn test_state_validates_first() {
        let err = backend().state(&Circuit::ghz(4)).await.unwrap_err();
        assert!(matches!(err, HalError::CircuitTooLarge(_)));
    }
}
