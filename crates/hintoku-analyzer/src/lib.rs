//! Hint analysis for partially solved Sudoku boards.
//!
//! Given a player's current board and the known solution, the analyzer scans
//! every empty cell, scores it by how many empty cells share its row, column,
//! and box, classifies it by solving technique (`single_candidate`, then
//! `hidden_single`, then `basic_elimination`), and returns the single most
//! helpful move together with the already-placed cells that justify it.
//!
//! The analysis is a pure function of its inputs: no randomness, no state,
//! no logging. Boundary strings are checked up front and rejected with a
//! [`ValidationError`]; a board with nothing left to hint yields `None`
//! rather than an error.
//!
//! # Examples
//!
//! ```
//! use hintoku_analyzer::{HintAnalyzer, Technique};
//!
//! let solution =
//!     "123456789456789123789123456231564897564897231897231564312645978645978312978312645";
//! let state = format!("00{}", &solution[2..]);
//!
//! let analyzer = HintAnalyzer::new();
//! let hint = analyzer.analyze_strings(&state, solution)?.unwrap();
//!
//! // The hint reveals the solution digit for one of the blanks.
//! let expected = solution.as_bytes()[hint.position.index()] as char;
//! assert_eq!(hint.value.to_char(), expected);
//! assert_eq!(hint.technique, Technique::SingleCandidate);
//! assert!(!hint.related_cells.is_empty());
//! # Ok::<(), hintoku_analyzer::ValidationError>(())
//! ```

pub mod analyzer;
pub mod technique;
pub mod testing;
pub mod validation;

pub use self::{
    analyzer::{Hint, HintAnalyzer},
    technique::Technique,
    validation::ValidationError,
};
