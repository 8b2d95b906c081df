//! A single simulated patient and its private random stream.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::monitor::PatientStateMonitor;
use crate::params::Parameters;

/// One independently simulated patient.
///
/// The patient owns a deterministic random stream seeded from its id and
/// never shares it; for a fixed id and fixed parameters the outcome is
/// bit-reproducible regardless of what other patients do.
#[derive(Debug)]
pub struct Patient {
    id: u64,
    rng: StdRng,
    monitor: PatientStateMonitor,
}

impl Patient {
    /// Creates a patient with the given id, starting in the parameters'
    /// initial health state.
    pub fn new(id: u64, params: &Parameters) -> Self {
        Self {
            id,
            rng: StdRng::seed_from_u64(id),
            monitor: PatientStateMonitor::new(params.initial_state()),
        }
    }

    /// Returns this patient's id (also its RNG seed).
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Simulates the patient for at most `n_time_steps` steps.
    ///
    /// Each step samples the next state from the current state's row and
    /// pushes the transition into the monitor. Terminates when the patient
    /// reaches the absorbing death state or the step cap is exhausted;
    /// both are normal, non-error terminations.
    pub fn simulate(&mut self, params: &Parameters, n_time_steps: usize) {
        let mut k = 0;
        while self.monitor.is_alive() && k < n_time_steps {
            let new_state = params.matrix().sample(self.monitor.current_state(), &mut self.rng);
            self.monitor.update(params, k, new_state);
            k += 1;
        }
    }

    /// Returns the monitor holding this patient's outcomes.
    pub fn monitor(&self) -> &PatientStateMonitor {
        &self.monitor
    }
}
