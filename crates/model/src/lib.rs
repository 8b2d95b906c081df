//! Patient-level Markov microsimulation engine for cost-effectiveness
//! analysis of HIV progression.
//!
//! A cohort of independent patients transitions between health states in
//! discrete yearly steps; each patient's survival, AIDS onset, and
//! half-cycle-corrected discounted cost and utility are recorded and
//! aggregated.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │   cohort      │────▶│   patient      │────▶│    outcomes      │
//!  │ (seed, spawn) │     │ (sample, step) │     │ (stats, curve)   │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use hygeia_model::{Cohort, HealthState, Parameters, TransitionMatrix};
//!
//! let matrix = TransitionMatrix::new([
//!     [0.9, 0.08, 0.02],
//!     [0.0, 0.85, 0.15],
//!     [0.0, 0.0, 1.0],
//! ])?;
//! let params = Parameters::new(HealthState::Well, matrix)
//!     .with_annual_state_costs([100.0, 500.0, 0.0])
//!     .with_annual_state_utilities([1.0, 0.7, 0.0])
//!     .with_annual_treatment_cost(200.0)
//!     .with_discount_rate(0.03);
//!
//! let outcomes = Cohort::new(1, 100, params)?.simulate(10);
//! assert_eq!(outcomes.costs().len(), 100);
//! # Ok::<(), hygeia_model::ModelError>(())
//! ```

pub mod accounting;
pub mod cohort;
pub mod error;
pub mod monitor;
pub mod outcomes;
pub mod params;
pub mod patient;
pub mod state;
pub mod transition;

pub use accounting::CostUtilityAccumulator;
pub use cohort::Cohort;
pub use error::ModelError;
pub use monitor::PatientStateMonitor;
pub use outcomes::CohortOutcomes;
pub use params::Parameters;
pub use patient::Patient;
pub use state::HealthState;
pub use transition::TransitionMatrix;
