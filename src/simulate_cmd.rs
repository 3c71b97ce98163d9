use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use ambler_walk::{StateMatrix, TrialPlan, run_trials};

use crate::cli::SimulateArgs;
use crate::config;

/// Run a batch of absorption walks and print summary statistics.
pub fn run(args: SimulateArgs) -> Result<()> {
    let cfg = config::load(&args.config)?;

    let matrix = StateMatrix::from_rows(cfg.table)
        .context("failed to build state table from config")?;
    info!(n_states = matrix.len(), "state table built");

    let seed = args.seed.or(cfg.seed);
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let trials = args.trials.unwrap_or(cfg.trial.trials);
    let plan = TrialPlan::new(cfg.trial.start, cfg.trial.target)
        .with_max_steps(cfg.trial.max_steps)
        .with_trials(trials);

    info!(
        start = plan.start(),
        target = plan.target(),
        trials = plan.trials(),
        max_steps = plan.max_steps(),
        "running trials"
    );
    let summary = run_trials(&matrix, &plan, &mut rng).context("trial batch failed")?;

    println!(
        "trials:     {} ({} reached state {})",
        summary.trials(),
        summary.completed(),
        plan.target()
    );
    println!("completion: {:.4}", summary.completion_rate());
    println!("mean steps: {:.4}", summary.mean_steps());
    println!("sd steps:   {:.4}", summary.sd_steps());
    if let (Some(min), Some(max)) = (summary.min_steps(), summary.max_steps()) {
        println!("min/max:    {min} / {max}");
    }

    Ok(())
}
