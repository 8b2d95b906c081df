//! Patient-level state machine with first-passage event recording.

use crate::accounting::CostUtilityAccumulator;
use crate::params::Parameters;
use crate::state::HealthState;

/// Tracks one patient's health state and outcomes over the simulation.
///
/// The owning [`Patient`](crate::Patient) pushes one transition per time
/// step. First-passage times for death and AIDS onset carry a half-cycle
/// correction of +0.5: a transition detected at the boundary of step `k`
/// is assumed to have occurred mid-interval.
#[derive(Debug, Clone)]
pub struct PatientStateMonitor {
    current_state: HealthState,
    survival_time: Option<f64>,
    time_to_aids: Option<f64>,
    accumulator: CostUtilityAccumulator,
}

impl PatientStateMonitor {
    /// Creates a monitor in the given initial health state.
    pub fn new(initial_state: HealthState) -> Self {
        Self {
            current_state: initial_state,
            survival_time: None,
            time_to_aids: None,
            accumulator: CostUtilityAccumulator::new(),
        }
    }

    /// Applies the transition observed at `time_step`.
    ///
    /// Death is absorbing: once the current state is death, the update is
    /// a no-op on every field. Otherwise the death and AIDS-onset
    /// first-passage times are recorded (each at most once), the step is
    /// handed to the cost/utility accumulator, and the current state
    /// advances.
    pub fn update(&mut self, params: &Parameters, time_step: usize, new_state: HealthState) {
        if self.current_state.is_death() {
            return;
        }

        if new_state.is_death() {
            self.survival_time = Some(time_step as f64 + 0.5);
        }

        if self.current_state != HealthState::Aids && new_state == HealthState::Aids {
            self.time_to_aids = Some(time_step as f64 + 0.5);
        }

        self.accumulator
            .update(params, time_step, self.current_state, new_state);

        self.current_state = new_state;
    }

    /// Returns true while the patient has not reached the death state.
    pub fn is_alive(&self) -> bool {
        !self.current_state.is_death()
    }

    /// Returns the current health state.
    pub fn current_state(&self) -> HealthState {
        self.current_state
    }

    /// Returns the half-cycle-corrected survival time, if the patient died.
    pub fn survival_time(&self) -> Option<f64> {
        self.survival_time
    }

    /// Returns the half-cycle-corrected time to AIDS onset, if it occurred.
    pub fn time_to_aids(&self) -> Option<f64> {
        self.time_to_aids
    }

    /// Returns the total discounted cost accrued so far.
    pub fn total_discounted_cost(&self) -> f64 {
        self.accumulator.total_discounted_cost()
    }

    /// Returns the total discounted utility accrued so far.
    pub fn total_discounted_utility(&self) -> f64 {
        self.accumulator.total_discounted_utility()
    }
}
