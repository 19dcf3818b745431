//! Board position (row, col) coordinates.

use std::fmt::{self, Display};

/// A cell position on the 9×9 board.
///
/// Rows and columns are both indexed 0-8, row 0 at the top. The row-major
/// cell index used by the 81-character wire form is `row * 9 + col`.
///
/// # Examples
///
/// ```
/// use hintoku_core::Position;
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.index(), 23);
/// assert_eq!(pos.box_index(), 1);
/// assert_eq!(Position::from_index(23), pos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 9, "Row index out of range: {row}");
        assert!(col < 9, "Column index out of range: {col}");
        Self { row, col }
    }

    /// Creates a position from a row-major cell index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < 81, "Cell index out of range: {index}");
        Self {
            row: (index / 9) as u8,
            col: (index % 9) as u8,
        }
    }

    /// Creates a position from a box index (0-8) and a cell index within the
    /// box (0-8, row-major inside the box).
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell` is not in the range 0-8.
    #[must_use]
    pub fn from_box(box_index: u8, cell: u8) -> Self {
        assert!(box_index < 9, "Box index out of range: {box_index}");
        assert!(cell < 9, "Box cell index out of range: {cell}");
        Self {
            row: box_index / 3 * 3 + cell / 3,
            col: box_index % 3 * 3 + cell % 3,
        }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns the index (0-8) of the 3×3 box containing this position,
    /// numbered left to right, top to bottom.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.row / 3 * 3 + self.col / 3
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row, self.col)
    }
}
