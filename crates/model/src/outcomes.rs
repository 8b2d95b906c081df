//! Aggregated outcomes of a simulated cohort.

use hygeia_path::PrevalencePath;
use hygeia_stats::SummaryStat;

use crate::patient::Patient;

/// Raw outcome vectors and derived summaries of one cohort run.
///
/// Built once after every patient has finished simulating; immutable
/// thereafter. The survival-time and time-to-AIDS vectors only contain
/// entries for patients that experienced the event, while cost and
/// utility carry one entry per patient.
#[derive(Debug, Clone)]
pub struct CohortOutcomes {
    survival_times: Vec<f64>,
    times_to_aids: Vec<f64>,
    costs: Vec<f64>,
    utilities: Vec<f64>,
    n_living_patients: PrevalencePath,
    stat_survival_time: SummaryStat,
    stat_time_to_aids: SummaryStat,
    stat_cost: SummaryStat,
    stat_utility: SummaryStat,
}

impl CohortOutcomes {
    /// Extracts outcomes from simulated patients in iteration order.
    pub(crate) fn extract(initial_pop_size: usize, patients: &[Patient]) -> Self {
        let mut survival_times = Vec::new();
        let mut times_to_aids = Vec::new();
        let mut costs = Vec::with_capacity(patients.len());
        let mut utilities = Vec::with_capacity(patients.len());

        for patient in patients {
            let monitor = patient.monitor();
            if let Some(t) = monitor.survival_time() {
                survival_times.push(t);
            }
            if let Some(t) = monitor.time_to_aids() {
                times_to_aids.push(t);
            }
            costs.push(monitor.total_discounted_cost());
            utilities.push(monitor.total_discounted_utility());
        }

        let stat_survival_time = SummaryStat::new("Survival time", &survival_times);
        let stat_time_to_aids = SummaryStat::new("Time until AIDS", &times_to_aids);
        let stat_cost = SummaryStat::new("Discounted cost", &costs);
        let stat_utility = SummaryStat::new("Discounted utility", &utilities);

        let n_living_patients =
            PrevalencePath::new("# of living patients", initial_pop_size, &survival_times);

        Self {
            survival_times,
            times_to_aids,
            costs,
            utilities,
            n_living_patients,
            stat_survival_time,
            stat_time_to_aids,
            stat_cost,
            stat_utility,
        }
    }

    /// Survival times of the patients that died, in patient order.
    pub fn survival_times(&self) -> &[f64] {
        &self.survival_times
    }

    /// AIDS-onset times of the patients that developed AIDS, in patient order.
    pub fn times_to_aids(&self) -> &[f64] {
        &self.times_to_aids
    }

    /// Total discounted cost per patient, one entry each.
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Total discounted utility per patient, one entry each.
    pub fn utilities(&self) -> &[f64] {
        &self.utilities
    }

    /// The survival curve: alive-count as a step function of time.
    pub fn n_living_patients(&self) -> &PrevalencePath {
        &self.n_living_patients
    }

    /// Summary statistics of the survival times.
    pub fn stat_survival_time(&self) -> &SummaryStat {
        &self.stat_survival_time
    }

    /// Summary statistics of the times to AIDS onset.
    pub fn stat_time_to_aids(&self) -> &SummaryStat {
        &self.stat_time_to_aids
    }

    /// Summary statistics of the discounted costs.
    pub fn stat_cost(&self) -> &SummaryStat {
        &self.stat_cost
    }

    /// Summary statistics of the discounted utilities.
    pub fn stat_utility(&self) -> &SummaryStat {
        &self.stat_utility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Parameters;
    use crate::state::HealthState;
    use crate::transition::TransitionMatrix;

    fn simulated_patients(n: usize, steps: usize) -> (usize, Vec<Patient>) {
        let matrix =
            TransitionMatrix::new([[0.9, 0.08, 0.02], [0.0, 0.85, 0.15], [0.0, 0.0, 1.0]])
                .unwrap();
        let params = Parameters::new(HealthState::Well, matrix)
            .with_annual_state_costs([100.0, 500.0, 0.0])
            .with_annual_state_utilities([1.0, 0.7, 0.0])
            .with_annual_treatment_cost(200.0)
            .with_discount_rate(0.03);
        let mut patients: Vec<Patient> = (0..n as u64).map(|i| Patient::new(i, &params)).collect();
        for p in &mut patients {
            p.simulate(&params, steps);
        }
        (n, patients)
    }

    #[test]
    fn vectors_match_patient_events() {
        let (pop, patients) = simulated_patients(100, 10);
        let outcomes = CohortOutcomes::extract(pop, &patients);

        let n_dead = patients
            .iter()
            .filter(|p| p.monitor().survival_time().is_some())
            .count();
        let n_aids = patients
            .iter()
            .filter(|p| p.monitor().time_to_aids().is_some())
            .count();

        assert_eq!(outcomes.survival_times().len(), n_dead);
        assert_eq!(outcomes.times_to_aids().len(), n_aids);
        assert_eq!(outcomes.costs().len(), pop);
        assert_eq!(outcomes.utilities().len(), pop);
    }

    #[test]
    fn summary_names() {
        let (pop, patients) = simulated_patients(10, 5);
        let outcomes = CohortOutcomes::extract(pop, &patients);
        assert_eq!(outcomes.stat_survival_time().name(), "Survival time");
        assert_eq!(outcomes.stat_time_to_aids().name(), "Time until AIDS");
        assert_eq!(outcomes.stat_cost().name(), "Discounted cost");
        assert_eq!(outcomes.stat_utility().name(), "Discounted utility");
        assert_eq!(outcomes.stat_cost().n(), pop);
    }

    #[test]
    fn survival_curve_starts_at_pop_and_ends_at_alive_count() {
        let (pop, patients) = simulated_patients(100, 10);
        let outcomes = CohortOutcomes::extract(pop, &patients);
        let curve = outcomes.n_living_patients();
        assert_eq!(curve.initial_size(), pop);

        let n_alive = patients.iter().filter(|p| p.monitor().is_alive()).count();
        assert_eq!(curve.value_at(10.0), n_alive);
    }

    #[test]
    fn empty_extract() {
        let outcomes = CohortOutcomes::extract(0, &[]);
        assert!(outcomes.costs().is_empty());
        assert_eq!(outcomes.stat_cost().n(), 0);
        assert_eq!(outcomes.n_living_patients().initial_size(), 0);
    }
}
