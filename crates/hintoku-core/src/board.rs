//! Sudoku board representation, parsing, and rendering.

use std::{
    fmt::{self, Write as _},
    ops::Index,
    str::FromStr,
};

use crate::{Digit, DigitSet, House, Position};

/// Errors produced when parsing a [`Board`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The input did not contain exactly 81 cell characters.
    #[display("board must contain exactly 81 cells, found {found}")]
    WrongCellCount {
        /// Number of cell characters found.
        found: usize,
    },
    /// The input contained a character that is neither a digit nor an
    /// empty-cell marker.
    #[display("invalid character {character:?} at cell {index}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Row-major cell index (0-80) where it appeared.
        index: usize,
    },
}

/// A 9×9 Sudoku board: 81 cells, each empty or holding a [`Digit`].
///
/// The canonical textual form is 81 characters in row-major order with `'0'`
/// for empty cells; [`Board::to_string`] produces it and parsing it back
/// reproduces the board. Parsing is lenient for the benefit of hand-written
/// grids: ASCII whitespace is ignored and `'.'` and `'_'` are accepted as
/// empty-cell markers alongside `'0'`.
///
/// # Examples
///
/// ```
/// use hintoku_core::{Board, Digit, Position};
///
/// let board: Board = "\
///     12_ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ __9"
///     .parse()?;
///
/// assert_eq!(board.get(Position::new(0, 1)), Some(Digit::D2));
/// assert_eq!(board.count_empty(), 78);
/// assert!(board.to_string().starts_with("12000"));
/// # Ok::<(), hintoku_core::ParseBoardError>(())
/// ```
///
/// [`Board::to_string`]: std::string::ToString::to_string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Digit>; 81],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Places a digit at `pos`, overwriting any previous digit.
    pub fn place(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = Some(digit);
    }

    /// Empties the cell at `pos`.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = None;
    }

    /// Returns the set of digits placed in the given house.
    #[must_use]
    pub fn digits_in(&self, house: House) -> DigitSet {
        house
            .positions()
            .iter()
            .filter_map(|&pos| self.get(pos))
            .collect()
    }

    /// Returns the digits that could be placed at `pos` without conflicting
    /// with its row, column, or box.
    ///
    /// A digit already placed in any of the three houses containing `pos` is
    /// excluded. The query is intended for empty cells; for a filled cell the
    /// cell's own digit is among the excluded ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use hintoku_core::{Board, Digit, Position};
    ///
    /// let mut board = Board::new();
    /// board.place(Position::new(0, 0), Digit::D1);
    /// board.place(Position::new(8, 4), Digit::D2);
    ///
    /// let candidates = board.candidates_at(Position::new(0, 4));
    /// assert!(!candidates.contains(Digit::D1)); // same row
    /// assert!(!candidates.contains(Digit::D2)); // same column
    /// assert_eq!(candidates.len(), 7);
    /// ```
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        let used = self.digits_in(House::row_of(pos))
            | self.digits_in(House::column_of(pos))
            | self.digits_in(House::box_of(pos));
        DigitSet::FULL.difference(used)
    }

    /// Returns `true` if `pos` is empty and placing `digit` there would not
    /// conflict with its row, column, or box.
    #[must_use]
    pub fn admits(&self, pos: Position, digit: Digit) -> bool {
        self.get(pos).is_none() && self.candidates_at(pos).contains(digit)
    }

    /// Returns the empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.get(pos).is_none())
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns `true` if the board is a valid complete solution: every row,
    /// column, and box contains all nine digits.
    ///
    /// This implies completeness, since a house covering all nine digits has
    /// no room for an empty cell.
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        House::ALL
            .iter()
            .all(|&house| self.digits_in(house) == DigitSet::FULL)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Board {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index()]
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.chars().filter(|c| !c.is_ascii_whitespace()).count();
        if found != 81 {
            return Err(ParseBoardError::WrongCellCount { found });
        }

        let mut cells = [None; 81];
        let mut index = 0;
        for character in s.chars() {
            if character.is_ascii_whitespace() {
                continue;
            }
            cells[index] = match character {
                '0' | '.' | '_' => None,
                _ => match Digit::from_char(character) {
                    Some(digit) => Some(digit),
                    None => return Err(ParseBoardError::InvalidCharacter { character, index }),
                },
            };
            index += 1;
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => f.write_char(digit.to_char())?,
                None => f.write_char('0')?,
            }
        }
        Ok(())
    }
}
