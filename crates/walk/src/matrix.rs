//! The owning table of states.

use std::fmt;

use crate::error::WalkError;
use crate::state::State;

/// An ordered table of [`State`]s indexed by identifier.
///
/// The table assigns each state's identifier at insertion time, equal to its
/// position in the table, so a state's `id` and its position can never
/// disagree. Transition identifiers are *not* checked against the table at
/// construction; a dangling identifier surfaces as
/// [`WalkError::UnknownState`] when a walk first tries to resolve it.
#[derive(Debug, Clone, Default)]
pub struct StateMatrix {
    states: Vec<State>,
}

impl StateMatrix {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Appends a state built from `transitions`, returning its assigned
    /// identifier (its position in the table).
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::EmptyTransitions`] if `transitions` is empty; the
    /// table is left unchanged.
    pub fn push(&mut self, transitions: Vec<usize>) -> Result<usize, WalkError> {
        let id = self.states.len();
        let state = State::new(id, transitions)?;
        self.states.push(state);
        Ok(id)
    }

    /// Builds a whole table from one transition list per state.
    ///
    /// Row `i` becomes the state with identifier `i`.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::EmptyTransitions`] if any row is empty; no table
    /// is produced.
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Result<Self, WalkError> {
        let mut matrix = Self::new();
        for row in rows {
            matrix.push(row)?;
        }
        Ok(matrix)
    }

    /// Returns the state with the given identifier, if present.
    pub fn get(&self, id: usize) -> Option<&State> {
        self.states.get(id)
    }

    /// Resolves an identifier to its state.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::UnknownState`] if no state carries `id`.
    pub fn state(&self, id: usize) -> Result<&State, WalkError> {
        self.states
            .get(id)
            .ok_or(WalkError::UnknownState { state_id: id })
    }

    /// Returns the number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if the table holds no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterates over the states in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &State> {
        self.states.iter()
    }
}

/// Renders one state line per row, in identifier order.
impl fmt::Display for StateMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in &self.states {
            write!(f, "{state}")?;
        }
        Ok(())
    }
}
