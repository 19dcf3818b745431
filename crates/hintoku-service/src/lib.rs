//! Stateless service facade over puzzle generation and hint analysis.
//!
//! [`SudokuService`] is the boundary a transport layer (HTTP handlers, a
//! CLI, a queue worker) talks to: it owns the generator and the analyzer,
//! translates boards and hints into wire-shaped records, renders the
//! player-facing technique messages, and derives the deterministic daily
//! puzzle. It is the only layer that logs; the core crates below it stay
//! silent and pure.
//!
//! # Examples
//!
//! ```
//! use hintoku_service::SudokuService;
//!
//! let service = SudokuService::new();
//!
//! let game = service.generate("hard");
//! assert_eq!(game.puzzle.matches('0').count(), 50);
//!
//! // Hints come from the player's current board plus the stored solution.
//! let hint = service.hint(&game.puzzle, &game.solution)?.unwrap();
//! assert!(!hint.message.is_empty());
//! # Ok::<(), hintoku_service::ValidationError>(())
//! ```

pub mod dto;
pub mod message;
pub mod service;

pub use hintoku_analyzer::ValidationError;

pub use self::{
    dto::{CellRef, DailyPuzzle, HintResponse, PuzzleResponse},
    service::SudokuService,
};
