use serde::Deserialize;

/// Top-level Hygeia configuration.
///
/// Defaults reproduce the reference HIV scenario: 1000 patients, 10 yearly
/// steps, and the three-state mono-therapy parameter set.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HygeiaConfig {
    /// Cohort settings.
    #[serde(default)]
    pub cohort: CohortToml,

    /// Model parameter settings.
    #[serde(default)]
    pub model: ModelToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CohortToml {
    #[serde(default = "default_cohort_id")]
    pub id: u64,
    #[serde(default = "default_pop_size")]
    pub pop_size: usize,
    #[serde(default = "default_n_time_steps")]
    pub n_time_steps: usize,
}

impl Default for CohortToml {
    fn default() -> Self {
        Self {
            id: default_cohort_id(),
            pop_size: default_pop_size(),
            n_time_steps: default_n_time_steps(),
        }
    }
}

fn default_cohort_id() -> u64 {
    1
}
fn default_pop_size() -> usize {
    1000
}
fn default_n_time_steps() -> usize {
    10
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    /// Initial health state: "well", "aids", or "death".
    #[serde(default = "default_initial_state")]
    pub initial_state: String,
    /// Row-stochastic 3x3 transition matrix, rows indexed Well/Aids/Death.
    #[serde(default = "default_transition_matrix")]
    pub transition_matrix: [[f64; 3]; 3],
    /// Annual cost per health state.
    #[serde(default = "default_annual_state_costs")]
    pub annual_state_costs: [f64; 3],
    /// Annual health utility per health state.
    #[serde(default = "default_annual_state_utilities")]
    pub annual_state_utilities: [f64; 3],
    /// Annual treatment cost.
    #[serde(default = "default_annual_treatment_cost")]
    pub annual_treatment_cost: f64,
    /// Annual discount rate.
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,
}

impl Default for ModelToml {
    fn default() -> Self {
        Self {
            initial_state: default_initial_state(),
            transition_matrix: default_transition_matrix(),
            annual_state_costs: default_annual_state_costs(),
            annual_state_utilities: default_annual_state_utilities(),
            annual_treatment_cost: default_annual_treatment_cost(),
            discount_rate: default_discount_rate(),
        }
    }
}

fn default_initial_state() -> String {
    "well".to_string()
}
fn default_transition_matrix() -> [[f64; 3]; 3] {
    [[0.9, 0.08, 0.02], [0.0, 0.85, 0.15], [0.0, 0.0, 1.0]]
}
fn default_annual_state_costs() -> [f64; 3] {
    [100.0, 500.0, 0.0]
}
fn default_annual_state_utilities() -> [f64; 3] {
    [1.0, 0.7, 0.0]
}
fn default_annual_treatment_cost() -> f64 {
    200.0
}
fn default_discount_rate() -> f64 {
    0.03
}
