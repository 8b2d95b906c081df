use std::fmt::Write as _;
use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use hygeia_model::Cohort;
use hygeia_path::PrevalencePath;
use hygeia_stats::SummaryStat;

use crate::cli::SimulateArgs;
use crate::config::HygeiaConfig;
use crate::convert;

/// Run the `simulate` subcommand.
pub fn run(args: SimulateArgs) -> Result<()> {
    // Step 1: Load config (missing default file falls back to the built-in scenario).
    let config = if args.config.exists() {
        let text = fs::read_to_string(&args.config)
            .with_context(|| format!("failed to read config: {}", args.config.display()))?;
        toml::from_str::<HygeiaConfig>(&text)
            .with_context(|| format!("failed to parse config: {}", args.config.display()))?
    } else {
        info!(
            path = %args.config.display(),
            "config file not found, using built-in scenario defaults"
        );
        HygeiaConfig::default()
    };

    // Step 2: Apply CLI overrides.
    let pop_size = args.pop_size.unwrap_or(config.cohort.pop_size);
    let n_time_steps = args.time_steps.unwrap_or(config.cohort.n_time_steps);

    // Step 3: Build parameters and the cohort.
    let params = convert::build_parameters(&config.model).context("invalid model parameters")?;
    let cohort = Cohort::new(config.cohort.id, pop_size, params).context("invalid cohort")?;

    // Step 4: Simulate and report.
    let outcomes = cohort.simulate(n_time_steps);

    println!("Cohort {} (pop = {pop_size}, steps = {n_time_steps})", cohort.id());
    print_stat(outcomes.stat_survival_time());
    print_stat(outcomes.stat_time_to_aids());
    print_stat(outcomes.stat_cost());
    print_stat(outcomes.stat_utility());

    // Step 5: Optional survival-curve export.
    if let Some(path) = &args.survival_output {
        let csv = survival_csv(outcomes.n_living_patients());
        fs::write(path, csv)
            .with_context(|| format!("failed to write survival curve: {}", path.display()))?;
        info!(path = %path.display(), "survival curve written");
    }

    Ok(())
}

fn print_stat(stat: &SummaryStat) {
    match stat.interval_estimate(0.05) {
        Some((lo, hi)) => println!(
            "  {:<20} mean {:>10.3}  (95% CI {:.3}, {:.3})  n = {}",
            stat.name(),
            stat.mean(),
            lo,
            hi,
            stat.n()
        ),
        None => println!(
            "  {:<20} n = {} (too few observations for an interval)",
            stat.name(),
            stat.n()
        ),
    }
}

fn survival_csv(curve: &PrevalencePath) -> String {
    let mut out = String::from("time,n_alive\n");
    for (t, v) in curve.times().iter().zip(curve.values()) {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{t},{v}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survival_csv_format() {
        let curve = PrevalencePath::new("p", 3, &[0.5, 1.5]);
        let csv = survival_csv(&curve);
        assert_eq!(csv, "time,n_alive\n0,3\n0.5,2\n1.5,1\n");
    }
}
