//! Wire-shaped response records.
//!
//! Field names and value encodings here are the boundary contract: boards
//! travel as 81-character strings, hint values as their wire character, and
//! the daily record is keyed by calendar date.

use chrono::NaiveDate;
use hintoku_generator::Difficulty;
use serde::{Deserialize, Serialize};

/// A freshly generated puzzle and its solution, both as 81-character
/// row-major strings (`'0'` marks an empty puzzle cell).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleResponse {
    /// The playable board.
    pub puzzle: String,
    /// The completed solution.
    pub solution: String,
}

/// A `(row, col)` reference to a supporting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRef {
    /// Row index (0-8).
    pub row: u8,
    /// Column index (0-8).
    pub col: u8,
}

/// The selected hint, ready for a client to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintResponse {
    /// Row of the cell to fill (0-8).
    pub row: u8,
    /// Column of the cell to fill (0-8).
    pub col: u8,
    /// The digit to place, as its wire character `'1'..'9'`.
    pub value: char,
    /// Wire name of the justifying technique.
    pub technique: String,
    /// Cells supporting the technique, in group order.
    pub related_cells: Vec<CellRef>,
    /// One-line player-facing explanation.
    pub message: String,
}

/// The puzzle-of-the-day record, keyed by calendar date.
///
/// This is the shape a date-keyed store would persist; the service only
/// produces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPuzzle {
    /// The calendar day this puzzle belongs to.
    pub date: NaiveDate,
    /// The playable board.
    pub puzzle: String,
    /// The completed solution.
    pub solution: String,
    /// Difficulty the puzzle was generated at.
    pub difficulty: Difficulty,
}
