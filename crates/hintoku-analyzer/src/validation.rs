//! Validation of the string analysis boundary.

use hintoku_core::{Board, Digit, ParseBoardError, Position};

/// Errors rejecting malformed or inconsistent analyzer input.
///
/// Each variant names the check that failed. Checks run in a fixed order
/// (state parses, solution parses, solution is complete, state agrees with
/// solution), and the first violation wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ValidationError {
    /// The current-state string did not parse as a board.
    #[display("invalid current state: {_0}")]
    CurrentState(ParseBoardError),
    /// The solution string did not parse as a board.
    #[display("invalid solution: {_0}")]
    Solution(ParseBoardError),
    /// The solution board has at least one empty cell.
    #[display("solution is incomplete: empty cell at {position}")]
    IncompleteSolution {
        /// First empty position, row-major.
        position: Position,
    },
    /// A filled cell of the state disagrees with the solution.
    #[display("current state disagrees with solution at {position}: found {found}, expected {expected}")]
    CellMismatch {
        /// First disagreeing position, row-major.
        position: Position,
        /// Digit placed in the current state.
        found: Digit,
        /// Digit the solution holds there.
        expected: Digit,
    },
}

/// Parses and cross-checks the two boundary strings.
///
/// On success the returned state is guaranteed to agree with the returned
/// solution on every filled cell, and the solution is complete.
///
/// # Errors
///
/// Returns the first failed check as a [`ValidationError`].
pub fn validate_boards(current_state: &str, solution: &str) -> Result<(Board, Board), ValidationError> {
    let state: Board = current_state.parse().map_err(ValidationError::CurrentState)?;
    let solution: Board = solution.parse().map_err(ValidationError::Solution)?;

    for position in Position::ALL {
        let Some(expected) = solution.get(position) else {
            return Err(ValidationError::IncompleteSolution { position });
        };
        if let Some(found) = state.get(position)
            && found != expected
        {
            return Err(ValidationError::CellMismatch {
                position,
                found,
                expected,
            });
        }
    }
    Ok((state, solution))
}
