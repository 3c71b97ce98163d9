//! Finite-state random walks for Monte Carlo simulation.
//!
//! This crate models a discrete-time stochastic process as a table of states,
//! each holding a fixed list of successor identifiers. A step draws one entry
//! of that list uniformly at random, so repeated entries encode transition
//! probability by frequency rather than by explicit weights.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  matrix       │────▶│  walk          │────▶│    trial         │
//!  │  (assemble)   │     │  (draw steps)  │     │  (aggregate)     │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use ambler_walk::StateMatrix;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! // A two-state chain: 0 favours itself 2:1, 1 is absorbing.
//! let matrix = StateMatrix::from_rows(vec![vec![0, 0, 1], vec![1]]).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let next = matrix.get(0).unwrap().step(&mut rng);
//! assert!(next == 0 || next == 1);
//! ```

pub mod error;
pub mod matrix;
pub mod state;
pub mod stats;
pub mod trial;
pub mod walk;

pub use error::WalkError;
pub use matrix::StateMatrix;
pub use state::State;
pub use trial::{TrialPlan, TrialSummary, run_trials};
pub use walk::{steps_until, walk_states, walk_states_into};
