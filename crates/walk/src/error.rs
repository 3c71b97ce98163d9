//! Error types for the ambler-walk crate.

/// Error type for all fallible operations in the ambler-walk crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WalkError {
    /// Returned when a state is constructed with no transitions.
    #[error("state {state_id} has an empty transition list")]
    EmptyTransitions {
        /// Identifier the state would have carried.
        state_id: usize,
    },

    /// Returned when a transition identifier has no matching state in the table.
    #[error("unknown state: {state_id}")]
    UnknownState {
        /// The unresolvable identifier.
        state_id: usize,
    },

    /// Returned when a pre-allocated buffer has the wrong length.
    #[error("buffer length mismatch: expected {expected}, got {got}")]
    BufferLengthMismatch {
        /// Expected buffer length.
        expected: usize,
        /// Actual buffer length.
        got: usize,
    },

    /// Returned when a trial plan fails validation.
    #[error("invalid trial plan: {reason}")]
    InvalidPlan {
        /// Description of the problem.
        reason: String,
    },
}
