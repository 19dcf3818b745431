//! Seeded Sudoku puzzle generation.
//!
//! A puzzle is built in three steps: the three diagonal 3×3 boxes are filled
//! with independent random permutations of 1-9, the rest of the board is
//! completed by exhaustive backtracking, and a difficulty-dependent number of
//! cells is blanked out from the completed solution.
//!
//! Every generation run is driven by a [`PuzzleSeed`]: the same seed and
//! [`Difficulty`] always reproduce the same puzzle, which makes puzzles
//! shareable and tests deterministic. [`PuzzleGenerator::generate`] draws a
//! fresh seed per call; there is no process-global random state.
//!
//! # Examples
//!
//! ```
//! use hintoku_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new();
//! let seed = PuzzleSeed::from_phrase("doc example");
//! let generated = generator.generate_with_seed(Difficulty::Medium, seed);
//!
//! assert!(generated.solution.is_valid_solution());
//! assert_eq!(generated.puzzle.count_empty(), 40);
//! ```

pub mod difficulty;
pub mod generator;
pub mod seed;

pub use self::{
    difficulty::Difficulty,
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
