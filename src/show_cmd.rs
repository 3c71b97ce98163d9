use anyhow::{Context, Result};

use ambler_walk::StateMatrix;

use crate::cli::ShowArgs;
use crate::config;

/// Print the configured state table, one diagnostic line per state.
pub fn run(args: ShowArgs) -> Result<()> {
    let cfg = config::load(&args.config)?;
    let matrix = StateMatrix::from_rows(cfg.table)
        .context("failed to build state table from config")?;
    print!("{matrix}");
    Ok(())
}
