//! Monte Carlo trial runner: repeated absorption walks plus aggregation.

use tracing::debug;

use crate::error::WalkError;
use crate::matrix::StateMatrix;
use crate::stats;
use crate::walk::steps_until;

/// Plan for a batch of independent absorption walks.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use ambler_walk::TrialPlan;
///
/// let plan = TrialPlan::new(0, 3).with_trials(50_000);
/// assert!(plan.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TrialPlan {
    start: usize,
    target: usize,
    max_steps: u64,
    trials: usize,
}

impl TrialPlan {
    /// Creates a plan walking from `start` until `target`.
    ///
    /// Defaults: `max_steps = 1_000_000`, `trials = 10_000`.
    pub fn new(start: usize, target: usize) -> Self {
        Self {
            start,
            target,
            max_steps: 1_000_000,
            trials: 10_000,
        }
    }

    /// Sets the per-walk step budget.
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Sets the number of independent walks.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Returns the starting state identifier.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the target state identifier.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Returns the per-walk step budget.
    pub fn max_steps(&self) -> u64 {
        self.max_steps
    }

    /// Returns the number of independent walks.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Validates this plan.
    ///
    /// Requires at least one trial and a step budget of at least one. The
    /// start and target identifiers are resolved against the table when the
    /// trials run, not here.
    pub fn validate(&self) -> Result<(), WalkError> {
        if self.trials == 0 {
            return Err(WalkError::InvalidPlan {
                reason: "trials must be >= 1".to_string(),
            });
        }
        if self.max_steps == 0 {
            return Err(WalkError::InvalidPlan {
                reason: "max_steps must be >= 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Aggregated outcome of a trial batch.
#[derive(Debug, Clone)]
pub struct TrialSummary {
    trials: usize,
    completed: usize,
    mean_steps: f64,
    sd_steps: f64,
    min_steps: Option<u64>,
    max_steps: Option<u64>,
}

impl TrialSummary {
    /// Returns the number of walks attempted.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Returns the number of walks that reached the target within budget.
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Returns the fraction of walks that reached the target.
    pub fn completion_rate(&self) -> f64 {
        self.completed as f64 / self.trials as f64
    }

    /// Returns the mean step count over completed walks (0.0 if none).
    pub fn mean_steps(&self) -> f64 {
        self.mean_steps
    }

    /// Returns the sample standard deviation of completed step counts.
    pub fn sd_steps(&self) -> f64 {
        self.sd_steps
    }

    /// Returns the shortest completed walk, if any.
    pub fn min_steps(&self) -> Option<u64> {
        self.min_steps
    }

    /// Returns the longest completed walk, if any.
    pub fn max_steps(&self) -> Option<u64> {
        self.max_steps
    }
}

/// Runs `plan.trials()` independent absorption walks and aggregates them.
///
/// Every walk draws from the same caller-owned `rng`, so a seeded generator
/// makes the whole batch reproducible.
///
/// # Errors
///
/// Returns [`WalkError::InvalidPlan`] for a plan that fails validation, or
/// [`WalkError::UnknownState`] if any walk hits an unresolvable identifier.
pub fn run_trials(
    matrix: &StateMatrix,
    plan: &TrialPlan,
    rng: &mut impl rand::Rng,
) -> Result<TrialSummary, WalkError> {
    plan.validate()?;

    let mut step_counts = Vec::with_capacity(plan.trials());
    for _ in 0..plan.trials() {
        if let Some(steps) = steps_until(matrix, plan.start(), plan.target(), plan.max_steps(), rng)?
        {
            step_counts.push(steps);
        }
    }

    debug!(
        trials = plan.trials(),
        completed = step_counts.len(),
        "trial batch complete"
    );

    let as_f64: Vec<f64> = step_counts.iter().map(|&s| s as f64).collect();
    Ok(TrialSummary {
        trials: plan.trials(),
        completed: step_counts.len(),
        mean_steps: stats::mean(&as_f64),
        sd_steps: stats::sd(&as_f64),
        min_steps: step_counts.iter().copied().min(),
        max_steps: step_counts.iter().copied().max(),
    })
}
