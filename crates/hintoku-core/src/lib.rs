//! Core board model for Sudoku generation and hint analysis.
//!
//! This crate provides the fundamental types shared by the generator and the
//! hint analyzer:
//!
//! - [`Digit`]: type-safe digits 1-9 with wire-character conversions
//! - [`DigitSet`]: a 9-bit set of digits with fast set operations
//! - [`Position`]: a `(row, col)` cell coordinate on the 9×9 grid
//! - [`House`]: a row, column, or 3×3 box and its member positions
//! - [`Board`]: 81 cells, parsed from and rendered to the 81-character
//!   row-major text form (`'0'` for empty cells)
//!
//! # Examples
//!
//! ```
//! use hintoku_core::{Board, Digit, Position};
//!
//! let board: Board = "\
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79"
//!     .parse()?;
//!
//! assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
//! assert_eq!(board.count_empty(), 51);
//! # Ok::<(), hintoku_core::ParseBoardError>(())
//! ```

pub mod board;
pub mod digit;
pub mod digit_set;
pub mod house;
pub mod position;

pub use self::{
    board::{Board, ParseBoardError},
    digit::Digit,
    digit_set::DigitSet,
    house::House,
    position::Position,
};
