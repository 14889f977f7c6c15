//! Board geometry and the fixed hint grid

use super::{RowHints, WORD_LENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rows on the board (one per hidden guess)
pub const ROWS: usize = 6;

/// Columns on the board
pub const COLS: usize = WORD_LENGTH;

/// A cell coordinate, always inside the 6×5 board
///
/// The default is the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Returns `None` when the coordinate falls outside the board
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < ROWS && col < COLS {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// All 30 positions in row-major order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| Self { row, col }))
    }

    /// Positions of one row, left to right
    ///
    /// Empty if `row` is off the board.
    pub fn in_row(row: usize) -> impl Iterator<Item = Self> {
        let cols = if row < ROWS { 0..COLS } else { 0..0 };
        cols.map(move |col| Self { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 6×5 color pattern the hidden rows produce against the solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HintGrid([RowHints; ROWS]);

impl HintGrid {
    #[must_use]
    pub const fn new(rows: [RowHints; ROWS]) -> Self {
        Self(rows)
    }

    /// Hints for one row
    ///
    /// # Panics
    /// Panics if `row >= 6`
    #[must_use]
    pub const fn row(&self, row: usize) -> &RowHints {
        &self.0[row]
    }

    #[must_use]
    pub const fn rows(&self) -> &[RowHints; ROWS] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ColorHint;

    #[test]
    fn position_bounds() {
        assert!(Position::new(0, 0).is_some());
        assert!(Position::new(5, 4).is_some());
        assert!(Position::new(6, 0).is_none());
        assert!(Position::new(0, 5).is_none());
    }

    #[test]
    fn position_iteration() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), ROWS * COLS);
        assert_eq!(all[0], Position::new(0, 0).unwrap());
        assert_eq!(all[29], Position::new(5, 4).unwrap());

        assert_eq!(Position::in_row(2).count(), COLS);
        assert!(Position::in_row(2).all(|p| p.row() == 2));
        assert_eq!(Position::in_row(6).count(), 0);
    }

    #[test]
    fn grid_decodes_nested_arrays() {
        let row = r#"["blue","white","white","orange","white"]"#;
        let json = format!("[{row},{row},{row},{row},{row},{row}]");
        let grid: HintGrid = serde_json::from_str(&json).unwrap();

        assert_eq!(grid.row(5).get(0), ColorHint::Correct);
        assert_eq!(grid.row(3).get(3), ColorHint::Present);
    }

    #[test]
    fn grid_rejects_wrong_row_count() {
        let row = r#"["absent","absent","absent","absent","absent"]"#;
        let json = format!("[{row},{row}]");
        assert!(serde_json::from_str::<HintGrid>(&json).is_err());
    }
}
