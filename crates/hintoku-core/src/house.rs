//! Sudoku houses: rows, columns, and 3×3 boxes.

use crate::Position;

/// A Sudoku house (row, column, or 3×3 box).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its row index (0-8).
    Row {
        /// Row index (0-8).
        row: u8,
    },
    /// A column identified by its column index (0-8).
    Column {
        /// Column index (0-8).
        col: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { row: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { row: i as u8 };
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { col: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { col: i as u8 };
            i += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// Array containing all 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { row: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { row: i as u8 };
            all[i + 9] = Self::Column { col: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the row containing `pos`.
    #[must_use]
    pub const fn row_of(pos: Position) -> Self {
        Self::Row { row: pos.row() }
    }

    /// Returns the column containing `pos`.
    #[must_use]
    pub const fn column_of(pos: Position) -> Self {
        Self::Column { col: pos.col() }
    }

    /// Returns the box containing `pos`.
    #[must_use]
    pub const fn box_of(pos: Position) -> Self {
        Self::Box {
            index: pos.box_index(),
        }
    }

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// Rows scan left to right, columns top to bottom, boxes row-major
    /// within the box.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub fn position_at(self, i: u8) -> Position {
        assert!(i < 9, "House cell index out of range: {i}");
        match self {
            House::Row { row } => Position::new(row, i),
            House::Column { col } => Position::new(i, col),
            House::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns the 9 positions contained in this house, in scan order.
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn positions(self) -> [Position; 9] {
        std::array::from_fn(|i| self.position_at(i as u8))
    }

    /// Returns `true` if `pos` lies inside this house.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        match self {
            House::Row { row } => pos.row() == row,
            House::Column { col } => pos.col() == col,
            House::Box { index } => pos.box_index() == index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_tables() {
        assert_eq!(House::ROWS[3], House::Row { row: 3 });
        assert_eq!(House::COLUMNS[7], House::Column { col: 7 });
        assert_eq!(House::BOXES[8], House::Box { index: 8 });
        assert_eq!(House::ALL.len(), 27);
        assert_eq!(House::ALL[0], House::Row { row: 0 });
        assert_eq!(House::ALL[9], House::Column { col: 0 });
        assert_eq!(House::ALL[18], House::Box { index: 0 });
    }

    #[test]
    fn test_positions_scan_order() {
        let row = House::Row { row: 2 }.positions();
        assert_eq!(row[0], Position::new(2, 0));
        assert_eq!(row[8], Position::new(2, 8));

        let column = House::Column { col: 4 }.positions();
        assert_eq!(column[0], Position::new(0, 4));
        assert_eq!(column[8], Position::new(8, 4));

        let boxed = House::Box { index: 4 }.positions();
        assert_eq!(boxed[0], Position::new(3, 3));
        assert_eq!(boxed[4], Position::new(4, 4));
        assert_eq!(boxed[8], Position::new(5, 5));
    }

    #[test]
    fn test_houses_of_position() {
        let pos = Position::new(5, 7);
        assert_eq!(House::row_of(pos), House::Row { row: 5 });
        assert_eq!(House::column_of(pos), House::Column { col: 7 });
        assert_eq!(House::box_of(pos), House::Box { index: 5 });
    }

    #[test]
    fn test_contains() {
        for house in House::ALL {
            for pos in house.positions() {
                assert!(house.contains(pos));
            }
        }
        assert!(!House::Row { row: 0 }.contains(Position::new(1, 0)));
        assert!(!House::Box { index: 0 }.contains(Position::new(0, 3)));
    }
}
