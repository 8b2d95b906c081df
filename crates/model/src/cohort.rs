//! Cohort orchestration: many independent patients, one parameter set.

use tracing::{debug, info};

use crate::error::ModelError;
use crate::outcomes::CohortOutcomes;
use crate::params::Parameters;
use crate::patient::Patient;

/// A population of independently simulated patients sharing one immutable
/// parameter set.
///
/// Patient ids are `cohort_id * pop_size + i`, so every patient across
/// every cohort of a multi-cohort study gets a globally unique,
/// reproducible RNG seed.
#[derive(Debug, Clone)]
pub struct Cohort {
    id: u64,
    pop_size: usize,
    params: Parameters,
}

impl Cohort {
    /// Creates a cohort, validating the parameters up front.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the parameters fail validation; nothing
    /// is simulated in that case.
    pub fn new(id: u64, pop_size: usize, params: Parameters) -> Result<Self, ModelError> {
        params.validate()?;
        Ok(Self {
            id,
            pop_size,
            params,
        })
    }

    /// Returns the cohort id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the initial population size.
    pub fn pop_size(&self) -> usize {
        self.pop_size
    }

    /// Returns the shared parameter set.
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Simulates every patient for at most `n_time_steps` steps and
    /// aggregates their outcomes.
    ///
    /// Patients are pure functions of their own seed and the shared
    /// parameters, so per-patient results do not depend on execution
    /// order; the outcome vectors are collected in patient-creation order.
    pub fn simulate(&self, n_time_steps: usize) -> CohortOutcomes {
        info!(
            cohort = self.id,
            pop_size = self.pop_size,
            n_time_steps,
            "simulating cohort"
        );

        let mut patients: Vec<Patient> = (0..self.pop_size)
            .map(|i| Patient::new(self.id * self.pop_size as u64 + i as u64, &self.params))
            .collect();

        for patient in &mut patients {
            patient.simulate(&self.params, n_time_steps);
        }

        let outcomes = CohortOutcomes::extract(self.pop_size, &patients);
        debug!(
            cohort = self.id,
            n_deaths = outcomes.survival_times().len(),
            n_aids = outcomes.times_to_aids().len(),
            "cohort simulation complete"
        );
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HealthState;
    use crate::transition::TransitionMatrix;

    fn hiv_params() -> Parameters {
        let matrix =
            TransitionMatrix::new([[0.9, 0.08, 0.02], [0.0, 0.85, 0.15], [0.0, 0.0, 1.0]])
                .unwrap();
        Parameters::new(HealthState::Well, matrix)
            .with_annual_state_costs([100.0, 500.0, 0.0])
            .with_annual_state_utilities([1.0, 0.7, 0.0])
            .with_annual_treatment_cost(200.0)
            .with_discount_rate(0.03)
    }

    #[test]
    fn new_rejects_invalid_parameters() {
        let params = hiv_params().with_discount_rate(f64::NAN);
        assert!(Cohort::new(1, 10, params).is_err());
    }

    #[test]
    fn empty_cohort_produces_empty_outcomes() {
        let cohort = Cohort::new(1, 0, hiv_params()).unwrap();
        let outcomes = cohort.simulate(10);
        assert!(outcomes.survival_times().is_empty());
        assert!(outcomes.times_to_aids().is_empty());
        assert!(outcomes.costs().is_empty());
        assert!(outcomes.utilities().is_empty());
        assert_eq!(outcomes.n_living_patients().initial_size(), 0);
        assert_eq!(outcomes.n_living_patients().value_at(10.0), 0);
    }

    #[test]
    fn cost_and_utility_cover_every_patient() {
        let cohort = Cohort::new(1, 50, hiv_params()).unwrap();
        let outcomes = cohort.simulate(10);
        assert_eq!(outcomes.costs().len(), 50);
        assert_eq!(outcomes.utilities().len(), 50);
        assert!(outcomes.survival_times().len() <= 50);
        assert!(outcomes.times_to_aids().len() <= 50);
    }

    #[test]
    fn repeated_simulation_is_identical() {
        let cohort = Cohort::new(3, 40, hiv_params()).unwrap();
        let a = cohort.simulate(10);
        let b = cohort.simulate(10);
        assert_eq!(a.survival_times(), b.survival_times());
        assert_eq!(a.times_to_aids(), b.times_to_aids());
        assert_eq!(a.costs(), b.costs());
        assert_eq!(a.utilities(), b.utilities());
    }

    #[test]
    fn patient_ids_are_disjoint_across_cohorts() {
        // Cohort 0 uses ids 0..p, cohort 1 uses p..2p, etc.
        let pop = 10u64;
        for cohort_id in 0..3u64 {
            let lo = cohort_id * pop;
            for i in 0..pop {
                let id = cohort_id * pop + i;
                assert!(id >= lo && id < lo + pop);
            }
        }
    }
}
