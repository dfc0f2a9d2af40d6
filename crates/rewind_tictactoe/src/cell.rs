//! Board cells, addressed by name or by row-major index.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A cell on the tic-tac-toe board (index 0-8, row-major).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Cell {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

/// Error returned when text does not name a cell.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Not a board cell: {:?}", _0)]
pub struct ParseCellError(pub String);

impl std::error::Error for ParseCellError {}

impl Cell {
    /// All 9 cells in index order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// Converts to a board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a cell from a board index, `None` past 8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of the cell (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of the cell (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates a cell from a row and column, `None` when either is past 2.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }
}

impl std::str::FromStr for Cell {
    type Err = ParseCellError;

    /// Parses an index (`"4"`) or a label (`"center"`, case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Self::from_index(index).ok_or_else(|| ParseCellError(s.to_string()));
        }

        let lower = trimmed.to_lowercase();
        Self::iter()
            .find(|cell| cell.label().to_lowercase() == lower)
            .ok_or_else(|| ParseCellError(s.to_string()))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.to_index(), i);
            assert_eq!(Cell::from_index(i), Some(*cell));
        }
        assert_eq!(Cell::from_index(9), None);
    }

    #[test]
    fn test_row_col() {
        assert_eq!(Cell::MiddleRight.row(), 1);
        assert_eq!(Cell::MiddleRight.col(), 2);
        assert_eq!(Cell::from_row_col(2, 0), Some(Cell::BottomLeft));
        assert_eq!(Cell::from_row_col(3, 0), None);
    }

    #[test]
    fn test_parse_index_and_label() {
        assert_eq!("4".parse::<Cell>(), Ok(Cell::Center));
        assert_eq!("bottom-right".parse::<Cell>(), Ok(Cell::BottomRight));
        assert!("9".parse::<Cell>().is_err());
        assert!("middle".parse::<Cell>().is_err());
    }
}
