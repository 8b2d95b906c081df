use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hygeia Markov cohort microsimulation.
#[derive(Parser)]
#[command(
    name = "hygeia",
    version,
    about = "Markov cohort microsimulation for cost-effectiveness analysis"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Simulate a cohort and report outcome summaries.
    Simulate(SimulateArgs),
}

/// Arguments for the `simulate` subcommand.
#[derive(clap::Args)]
pub struct SimulateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "hygeia.toml")]
    pub config: PathBuf,

    /// Override cohort population size from config.
    #[arg(short, long)]
    pub pop_size: Option<usize>,

    /// Override number of simulated time steps from config.
    #[arg(short = 'n', long)]
    pub time_steps: Option<usize>,

    /// Write the survival curve as CSV to this path.
    #[arg(short, long)]
    pub survival_output: Option<PathBuf>,
}
