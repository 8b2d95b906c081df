//! Bridges TOML configuration structs to domain types.

use anyhow::{Result, bail};

use hygeia_model::{HealthState, Parameters, TransitionMatrix};

use crate::config::ModelToml;

/// Builds validated model parameters from the `[model]` config section.
pub fn build_parameters(model: &ModelToml) -> Result<Parameters> {
    let initial_state = parse_state(&model.initial_state)?;
    let matrix = TransitionMatrix::new(model.transition_matrix)?;

    Ok(Parameters::new(initial_state, matrix)
        .with_annual_state_costs(model.annual_state_costs)
        .with_annual_state_utilities(model.annual_state_utilities)
        .with_annual_treatment_cost(model.annual_treatment_cost)
        .with_discount_rate(model.discount_rate))
}

fn parse_state(name: &str) -> Result<HealthState> {
    match name.to_ascii_lowercase().as_str() {
        "well" => Ok(HealthState::Well),
        "aids" => Ok(HealthState::Aids),
        "death" => Ok(HealthState::Death),
        other => bail!("unknown initial state {other:?} (expected well, aids, or death)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_default_scenario() {
        let params = build_parameters(&ModelToml::default()).unwrap();
        assert_eq!(params.initial_state(), HealthState::Well);
        assert_eq!(params.annual_treatment_cost(), 200.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn state_names_are_case_insensitive() {
        assert_eq!(parse_state("Well").unwrap(), HealthState::Well);
        assert_eq!(parse_state("AIDS").unwrap(), HealthState::Aids);
        assert_eq!(parse_state("death").unwrap(), HealthState::Death);
    }

    #[test]
    fn rejects_unknown_state() {
        assert!(parse_state("cured").is_err());
    }

    #[test]
    fn rejects_bad_matrix() {
        let model = ModelToml {
            transition_matrix: [[0.5, 0.5, 0.5], [0.0, 0.85, 0.15], [0.0, 0.0, 1.0]],
            ..ModelToml::default()
        };
        assert!(build_parameters(&model).is_err());
    }
}
