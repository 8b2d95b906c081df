//! Discounted cost and utility accounting for a single patient.

use hygeia_econ::pv_single_payment;

use crate::params::Parameters;
use crate::state::HealthState;

/// Running totals of discounted cost and discounted utility.
///
/// Both totals start at 0 and, for non-negative cost/utility tables and a
/// non-negative discount rate, are non-decreasing across the simulation.
#[derive(Debug, Clone, Default)]
pub struct CostUtilityAccumulator {
    total_discounted_cost: f64,
    total_discounted_utility: f64,
}

impl CostUtilityAccumulator {
    /// Creates an accumulator with both totals at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the cost and utility accrued over time step `k`.
    ///
    /// The step value is the average of the two endpoint states
    /// (trapezoidal, since the state is only observed at sampling
    /// instants). Treatment is billed for the full year unless the patient
    /// dies this step, in which case half a year is billed. Both amounts
    /// are discounted with a half-year rate over period `2k + 1`, valuing
    /// the step at its midpoint consistently with the half-cycle
    /// correction.
    pub fn update(
        &mut self,
        params: &Parameters,
        k: usize,
        current_state: HealthState,
        next_state: HealthState,
    ) {
        let costs = params.annual_state_costs();
        let utilities = params.annual_state_utilities();

        let mut cost = 0.5 * (costs[current_state.as_index()] + costs[next_state.as_index()]);
        let utility =
            0.5 * (utilities[current_state.as_index()] + utilities[next_state.as_index()]);

        if next_state.is_death() {
            cost += 0.5 * params.annual_treatment_cost();
        } else {
            cost += params.annual_treatment_cost();
        }

        let half_rate = params.discount_rate() / 2.0;
        let period = (2 * k + 1) as i32;
        self.total_discounted_cost += pv_single_payment(cost, half_rate, period);
        self.total_discounted_utility += pv_single_payment(utility, half_rate, period);
    }

    /// Returns the total discounted cost accumulated so far.
    pub fn total_discounted_cost(&self) -> f64 {
        self.total_discounted_cost
    }

    /// Returns the total discounted utility accumulated so far.
    pub fn total_discounted_utility(&self) -> f64 {
        self.total_discounted_utility
    }
}
