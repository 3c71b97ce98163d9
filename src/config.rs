use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Ambler configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AmblerConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// One transition list per state; row `i` defines state `i`.
    pub table: Vec<Vec<usize>>,

    /// Trial settings.
    #[serde(default)]
    pub trial: TrialToml,
}

/// `[trial]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrialToml {
    /// Identifier of the starting state.
    #[serde(default)]
    pub start: usize,

    /// Identifier of the absorbing target state.
    #[serde(default)]
    pub target: usize,

    /// Per-walk step budget.
    #[serde(default = "default_max_steps")]
    pub max_steps: u64,

    /// Number of independent walks.
    #[serde(default = "default_trials")]
    pub trials: usize,
}

impl Default for TrialToml {
    fn default() -> Self {
        Self {
            start: 0,
            target: 0,
            max_steps: default_max_steps(),
            trials: default_trials(),
        }
    }
}

fn default_max_steps() -> u64 {
    1_000_000
}
fn default_trials() -> usize {
    10_000
}

/// Loads and parses a TOML configuration file.
pub fn load(path: &Path) -> Result<AmblerConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
}
