use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ambler Monte Carlo random-walk simulator.
#[derive(Parser)]
#[command(
    name = "ambler",
    version,
    about = "Monte Carlo random-walk simulator over state-transition tables"
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
    /// Run a batch of absorption walks and print summary statistics.
    Simulate(SimulateArgs),
    /// Print the configured state table in diagnostic form.
    Show(ShowArgs),
}

/// Arguments for the `simulate` subcommand.
#[derive(clap::Args)]
pub struct SimulateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "ambler.toml")]
    pub config: PathBuf,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override number of trials from config.
    #[arg(short, long)]
    pub trials: Option<usize>,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "ambler.toml")]
    pub config: PathBuf,
}
