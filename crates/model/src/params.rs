//! Model parameters shared by every patient in a cohort.

use crate::error::ModelError;
use crate::state::HealthState;
use crate::transition::TransitionMatrix;

/// Immutable parameters of a simulation run.
///
/// Use the builder methods to customise the economic inputs; the
/// transition matrix is validated at its own construction and the scalar
/// tables are checked by [`Parameters::validate`].
///
/// # Example
///
/// ```
/// use hygeia_model::{HealthState, Parameters, TransitionMatrix};
///
/// let matrix = TransitionMatrix::new([
///     [0.9, 0.08, 0.02],
///     [0.0, 0.85, 0.15],
///     [0.0, 0.0, 1.0],
/// ]).unwrap();
/// let params = Parameters::new(HealthState::Well, matrix)
///     .with_annual_treatment_cost(200.0)
///     .with_discount_rate(0.03);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Parameters {
    initial_state: HealthState,
    matrix: TransitionMatrix,
    annual_state_costs: [f64; 3],
    annual_state_utilities: [f64; 3],
    annual_treatment_cost: f64,
    discount_rate: f64,
}

impl Parameters {
    /// Creates parameters with zeroed economic inputs.
    ///
    /// Defaults: all per-state costs and utilities 0.0, treatment cost
    /// 0.0, discount rate 0.0.
    pub fn new(initial_state: HealthState, matrix: TransitionMatrix) -> Self {
        Self {
            initial_state,
            matrix,
            annual_state_costs: [0.0; 3],
            annual_state_utilities: [0.0; 3],
            annual_treatment_cost: 0.0,
            discount_rate: 0.0,
        }
    }

    /// Sets the per-state annual costs, indexed by health state.
    pub fn with_annual_state_costs(mut self, costs: [f64; 3]) -> Self {
        self.annual_state_costs = costs;
        self
    }

    /// Sets the per-state annual utilities, indexed by health state.
    pub fn with_annual_state_utilities(mut self, utilities: [f64; 3]) -> Self {
        self.annual_state_utilities = utilities;
        self
    }

    /// Sets the annual treatment cost.
    pub fn with_annual_treatment_cost(mut self, cost: f64) -> Self {
        self.annual_treatment_cost = cost;
        self
    }

    /// Sets the annual discount rate.
    pub fn with_discount_rate(mut self, rate: f64) -> Self {
        self.discount_rate = rate;
        self
    }

    // --- Accessors ---

    /// Returns the health state every patient starts in.
    pub fn initial_state(&self) -> HealthState {
        self.initial_state
    }

    /// Returns the transition matrix.
    pub fn matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    /// Returns the per-state annual costs.
    pub fn annual_state_costs(&self) -> &[f64; 3] {
        &self.annual_state_costs
    }

    /// Returns the per-state annual utilities.
    pub fn annual_state_utilities(&self) -> &[f64; 3] {
        &self.annual_state_utilities
    }

    /// Returns the annual treatment cost.
    pub fn annual_treatment_cost(&self) -> f64 {
        self.annual_treatment_cost
    }

    /// Returns the annual discount rate.
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    /// Validates the scalar economic inputs.
    ///
    /// Rejects NaN and infinite values. Negative costs, utilities, and
    /// discount rates pass validation; they are propagated faithfully into
    /// the accumulated totals (and break monotonicity, which is on the
    /// caller).
    pub fn validate(&self) -> Result<(), ModelError> {
        for (i, &c) in self.annual_state_costs.iter().enumerate() {
            if !c.is_finite() {
                return Err(ModelError::NonFiniteParameter {
                    name: cost_name(i),
                    value: c,
                });
            }
        }
        for (i, &u) in self.annual_state_utilities.iter().enumerate() {
            if !u.is_finite() {
                return Err(ModelError::NonFiniteParameter {
                    name: utility_name(i),
                    value: u,
                });
            }
        }
        if !self.annual_treatment_cost.is_finite() {
            return Err(ModelError::NonFiniteParameter {
                name: "annual_treatment_cost",
                value: self.annual_treatment_cost,
            });
        }
        if !self.discount_rate.is_finite() {
            return Err(ModelError::NonFiniteParameter {
                name: "discount_rate",
                value: self.discount_rate,
            });
        }
        Ok(())
    }
}

fn cost_name(index: usize) -> &'static str {
    match index {
        0 => "annual_state_costs[0]",
        1 => "annual_state_costs[1]",
        _ => "annual_state_costs[2]",
    }
}

fn utility_name(index: usize) -> &'static str {
    match index {
        0 => "annual_state_utilities[0]",
        1 => "annual_state_utilities[1]",
        _ => "annual_state_utilities[2]",
    }
}
