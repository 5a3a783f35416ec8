//! Simulator backend implementation.

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{debug, instrument};

use entangle_hal::{
    Backend, Capabilities, Counts, ExecutionResult, HalError, HalResult, StateVector,
};
use entangle_ir::Circuit;

use crate::statevector::{self, Statevector};

/// Default register limit. 2^16 amplitudes keeps a request well under a millisecond.
const DEFAULT_MAX_QUBITS: u32 = 16;

/// Local simulator backend.
///
/// Evolves the circuit once with a dense statevector, then samples shots from the
/// final Born distribution.
pub struct SimulatorBackend {
    /// Reported capabilities.
    capabilities: Capabilities,
    /// Seeded generator; `None` draws from the thread RNG.
    rng: Option<Arc<Mutex<StdRng>>>,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self::with_max_qubits(DEFAULT_MAX_QUBITS)
    }

    /// Create a simulator with custom max qubits.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            capabilities: Capabilities::simulator(max_qubits),
            rng: None,
        }
    }

    /// Use a fixed seed so repeated runs produce identical counts.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Some(Arc::new(Mutex::new(StdRng::seed_from_u64(seed))));
        self
    }

    /// Override the per-run shot limit.
    pub fn with_max_shots(mut self, max_shots: u32) -> Self {
        self.capabilities = self.capabilities.with_max_shots(max_shots);
        self
    }

    /// Evolve a circuit from |0…0⟩.
    fn evolve(circuit: &Circuit) -> Statevector {
        let mut sv = Statevector::new(circuit.num_qubits());
        for inst in circuit.instructions() {
            sv.apply(inst);
        }
        sv
    }

    /// Run simulation synchronously.
    fn run_simulation(
        circuit: &Circuit,
        shots: u32,
        rng: Option<&Mutex<StdRng>>,
    ) -> ExecutionResult {
        let start = Instant::now();

        let num_qubits = circuit.num_qubits();
        debug!(
            "Starting simulation: {} qubits, {} shots",
            num_qubits, shots
        );

        let cumulative = Self::evolve(circuit).cumulative();
        let mut hits = vec![0u64; cumulative.len()];

        match rng {
            Some(rng) => {
                let mut rng = rng.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
                for _ in 0..shots {
                    hits[statevector::sample(&cumulative, &mut *rng)] += 1;
                }
            }
            None => {
                let mut rng = rand::thread_rng();
                for _ in 0..shots {
                    hits[statevector::sample(&cumulative, &mut rng)] += 1;
                }
            }
        }

        let counts: Counts = hits
            .into_iter()
            .enumerate()
            .filter(|&(_, n)| n > 0)
            .map(|(i, n)| (format!("{:0width$b}", i, width = num_qubits), n))
            .collect();

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64)
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.capabilities.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn validate(&self, circuit: &Circuit) -> HalResult<()> {
        let width = circuit.num_qubits();
        if width > self.capabilities.num_qubits as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but simulator only supports {}",
                width, self.capabilities.num_qubits
            )));
        }

        for (pos, inst) in circuit.instructions().iter().enumerate() {
            if let Some(q) = inst.qubits.iter().find(|q| q.index() >= width) {
                return Err(HalError::InvalidCircuit(format!(
                    "{} at position {pos} uses qubit index {} but the circuit has {width} qubits",
                    inst.name(),
                    q.0
                )));
            }
            if let [a, b] = inst.qubits[..] {
                if a == b {
                    return Err(HalError::InvalidCircuit(format!(
                        "{} at position {pos} uses qubit {} as both control and target",
                        inst.name(),
                        a.0
                    )));
                }
            }
        }
        Ok(())
    }

    #[instrument(skip(self, circuit), fields(qubits = circuit.num_qubits()))]
    async fn run(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        self.validate(circuit)?;
        self.validate_shots(shots)?;

        let circuit = circuit.clone();
        let rng = self.rng.clone();
        tokio::task::spawn_blocking(move || Self::run_simulation(&circuit, shots, rng.as_deref()))
            .await
            .map_err(|e| HalError::SimulationFailed(format!("simulation task failed: {e}")))
    }

    #[instrument(skip(self, circuit), fields(qubits = circuit.num_qubits()))]
    async fn statevector(&self, circuit: &Circuit) -> HalResult<StateVector> {
        self.validate(circuit)?;

        let circuit = circuit.clone();
        let sv = tokio::task::spawn_blocking(move || Self::evolve(&circuit))
            .await
            .map_err(|e| HalError::SimulationFailed(format!("simulation task failed: {e}")))?;
        debug!("Statevector computed");
        sv.into_state()
    }
}
