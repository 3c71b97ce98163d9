//! A single node of the discrete-state stochastic process.

use std::fmt;

use rand::distr::{Distribution, Uniform};

use crate::error::WalkError;

/// One state of a finite-state stochastic process.
///
/// A state owns its identifier, a fixed ordered list of successor identifiers,
/// and a uniform index distribution over that list, derived once at
/// construction. Duplicate entries raise that target's transition probability
/// by frequency; there are no explicit weights.
///
/// The identifier is the state's position within its owning [`StateMatrix`];
/// the table assigns it at insertion time so the two cannot diverge.
///
/// [`StateMatrix`]: crate::matrix::StateMatrix
#[derive(Debug, Clone)]
pub struct State {
    id: usize,
    transitions: Vec<usize>,
    dist: Uniform<usize>,
}

impl State {
    /// Constructs a state from its identifier and successor list.
    ///
    /// The index distribution over `[0, transitions.len() - 1]` is built here
    /// and reused for every draw.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::EmptyTransitions`] if `transitions` is empty; an
    /// empty list would make the distribution's upper bound ill-defined, so
    /// no state value is produced.
    pub fn new(id: usize, transitions: Vec<usize>) -> Result<Self, WalkError> {
        if transitions.is_empty() {
            return Err(WalkError::EmptyTransitions { state_id: id });
        }
        // Bounds are valid for any non-empty list, checked above.
        let dist = Uniform::new_inclusive(0, transitions.len() - 1)
            .expect("uniform bounds valid for non-empty transitions");
        Ok(Self {
            id,
            transitions,
            dist,
        })
    }

    /// Returns this state's identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the ordered successor list.
    pub fn transitions(&self) -> &[usize] {
        &self.transitions
    }

    /// Returns the number of transition entries.
    pub fn arity(&self) -> usize {
        self.transitions.len()
    }

    /// Draws one successor identifier uniformly from the transition list.
    ///
    /// The only mutable resource touched is the caller-owned `rng`; the state
    /// itself never changes. Callers sharing one generator across threads
    /// must synchronize it externally.
    pub fn step(&self, rng: &mut impl rand::Rng) -> usize {
        self.transitions[self.dist.sample(rng)]
    }
}

/// Diagnostic rendering: `"<id> - <t1> <t2> ... <tn> \n"`.
///
/// Each transition is followed by a single space; the line ends with a
/// newline. Not a data interchange format.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ", self.id)?;
        for t in &self.transitions {
            write!(f, "{t} ")?;
        }
        writeln!(f)
    }
}
