//! Row-stochastic transition matrix and next-state sampling.

use crate::error::ModelError;
use crate::state::HealthState;

/// Tolerance for row sums of the transition matrix.
const ROW_SUM_TOL: f64 = 1e-9;

/// A 3x3 row-stochastic health-state transition matrix.
///
/// Row `i` contains the probabilities of moving from state `i` to states
/// 0, 1, and 2 over one time step. Rows sum to 1 and the death row keeps
/// all its mass on [`HealthState::Death`]; both are enforced at
/// construction, so a held matrix is always valid.
#[derive(Debug, Clone, Copy)]
pub struct TransitionMatrix {
    probs: [[f64; 3]; 3],
}

impl TransitionMatrix {
    /// Constructs a validated transition matrix from a 3x3 array.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if any entry is non-finite or outside
    /// `[0, 1]`, if a row does not sum to 1 within 1e-9, or if the death
    /// row permits transitions away from death.
    pub fn new(probs: [[f64; 3]; 3]) -> Result<Self, ModelError> {
        for (i, row) in probs.iter().enumerate() {
            let mut sum = 0.0;
            for (j, &p) in row.iter().enumerate() {
                if !p.is_finite() {
                    return Err(ModelError::NonFiniteProbability {
                        row: i,
                        col: j,
                        value: p,
                    });
                }
                if !(0.0..=1.0).contains(&p) {
                    return Err(ModelError::ProbabilityOutOfRange {
                        row: i,
                        col: j,
                        value: p,
                    });
                }
                sum += p;
            }
            if (sum - 1.0).abs() > ROW_SUM_TOL {
                return Err(ModelError::RowSumMismatch { row: i, sum });
            }
        }

        let death = HealthState::Death.as_index();
        let stay = probs[death][death];
        if (stay - 1.0).abs() > ROW_SUM_TOL {
            return Err(ModelError::NonAbsorbingDeathRow { prob: stay });
        }

        Ok(Self { probs })
    }

    /// Returns the transition probabilities from a given state.
    pub fn row(&self, from: HealthState) -> &[f64; 3] {
        &self.probs[from.as_index()]
    }

    /// Returns the probability of transitioning from one state to another.
    pub fn prob(&self, from: HealthState, to: HealthState) -> f64 {
        self.probs[from.as_index()][to.as_index()]
    }

    /// Returns the full 3x3 probability matrix.
    pub fn probs(&self) -> &[[f64; 3]; 3] {
        &self.probs
    }

    /// Samples the next state given the current state, using cumulative CDF.
    ///
    /// Draws a uniform random number and walks through the row's cumulative
    /// distribution, returning the first state whose cumulative probability
    /// meets or exceeds the draw. For a fixed RNG stream the result is
    /// bit-reproducible.
    pub fn sample(&self, from: HealthState, rng: &mut impl rand::Rng) -> HealthState {
        let u: f64 = rng.random();
        let row = &self.probs[from.as_index()];
        let mut cumulative = 0.0;
        for &state in &HealthState::ALL {
            cumulative += row[state.as_index()];
            if cumulative >= u {
                return state;
            }
        }
        // Rounding can leave the row sum a hair below the draw; fall back to
        // the last state in index order that carries mass.
        HealthState::ALL
            .iter()
            .rev()
            .copied()
            .find(|s| row[s.as_index()] > 0.0)
            .unwrap_or(from)
    }
}
