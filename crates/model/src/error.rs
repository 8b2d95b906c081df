//! Error types for the hygeia-model crate.

/// Error type for all fallible operations in the hygeia-model crate.
///
/// Every variant is a configuration fault detected before any patient is
/// simulated; simulation itself never fails under valid parameters.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelError {
    /// Returned when a transition probability is NaN or infinite.
    #[error("transition probability [{row}][{col}] is not finite: {value}")]
    NonFiniteProbability {
        /// Row index of the offending entry.
        row: usize,
        /// Column index of the offending entry.
        col: usize,
        /// The non-finite value.
        value: f64,
    },

    /// Returned when a transition probability is outside [0, 1].
    #[error("transition probability [{row}][{col}] = {value} is outside [0, 1]")]
    ProbabilityOutOfRange {
        /// Row index of the offending entry.
        row: usize,
        /// Column index of the offending entry.
        col: usize,
        /// The out-of-range value.
        value: f64,
    },

    /// Returned when a transition matrix row does not sum to 1.
    #[error("transition matrix row {row} sums to {sum}, expected 1 within 1e-9")]
    RowSumMismatch {
        /// Index of the offending row.
        row: usize,
        /// The actual row sum.
        sum: f64,
    },

    /// Returned when the death-state row allows transitions away from death.
    #[error("death-state row must be absorbing: P[Death][Death] = {prob}, expected 1")]
    NonAbsorbingDeathRow {
        /// Probability of staying in the death state.
        prob: f64,
    },

    /// Returned when a scalar parameter is NaN or infinite.
    #[error("parameter {name} is not finite: {value}")]
    NonFiniteParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The non-finite value.
        value: f64,
    },
}
