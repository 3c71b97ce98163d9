//! Random-walk drivers over a state table.

use crate::error::WalkError;
use crate::matrix::StateMatrix;

/// Walks `n_steps` steps from `start`, returning the visited identifiers.
///
/// The output holds the successor chosen at each step, in order; `start`
/// itself is not included. Each returned identifier is resolved through the
/// table before the next step.
///
/// # Errors
///
/// Returns [`WalkError::UnknownState`] if `start` or any drawn successor has
/// no state in the table.
pub fn walk_states(
    matrix: &StateMatrix,
    start: usize,
    n_steps: usize,
    rng: &mut impl rand::Rng,
) -> Result<Vec<usize>, WalkError> {
    let mut out = vec![0usize; n_steps];
    walk_states_into(matrix, start, n_steps, rng, &mut out)?;
    Ok(out)
}

/// Walks into a pre-allocated buffer.
///
/// # Errors
///
/// Returns [`WalkError::BufferLengthMismatch`] if `out.len() != n_steps`, or
/// [`WalkError::UnknownState`] on an unresolvable identifier.
pub fn walk_states_into(
    matrix: &StateMatrix,
    start: usize,
    n_steps: usize,
    rng: &mut impl rand::Rng,
    out: &mut [usize],
) -> Result<(), WalkError> {
    if out.len() != n_steps {
        return Err(WalkError::BufferLengthMismatch {
            expected: n_steps,
            got: out.len(),
        });
    }
    let mut current = matrix.state(start)?;
    for slot in out.iter_mut() {
        let next = current.step(rng);
        current = matrix.state(next)?;
        *slot = next;
    }
    Ok(())
}

/// Walks from `start` until `target` is first reached, counting steps.
///
/// Returns `Some(steps)` on arrival (zero if `start == target`), or `None`
/// once `max_steps` steps have been taken without reaching `target`.
///
/// # Errors
///
/// Returns [`WalkError::UnknownState`] if `start` or any drawn successor has
/// no state in the table.
pub fn steps_until(
    matrix: &StateMatrix,
    start: usize,
    target: usize,
    max_steps: u64,
    rng: &mut impl rand::Rng,
) -> Result<Option<u64>, WalkError> {
    if start == target {
        // Confirm the identifier resolves even when no step is needed.
        matrix.state(start)?;
        return Ok(Some(0));
    }

    let mut current = matrix.state(start)?;
    for taken in 1..=max_steps {
        let next = current.step(rng);
        current = matrix.state(next)?;
        if next == target {
            return Ok(Some(taken));
        }
    }
    Ok(None)
}
