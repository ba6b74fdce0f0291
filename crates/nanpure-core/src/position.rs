//! Board position (row, column) coordinates.

use std::fmt::{self, Display};

/// A zero-based (row, column) coordinate on a board.
///
/// Positions are plain value types; they carry no knowledge of the board
/// side length, so range checking happens wherever a position meets a
/// concrete grid.
///
/// # Examples
///
/// ```
/// use nanpure_core::Position;
///
/// let pos = Position::new(2, 7);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.to_string(), "(2, 7)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from zero-based row and column indices.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the zero-based row index.
    #[must_use]
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Returns the zero-based column index.
    #[must_use]
    pub const fn col(&self) -> u8 {
        self.col
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_and_display() {
        let pos = Position::new(0, 0);
        assert_eq!(pos.row(), 0);
        assert_eq!(pos.col(), 0);
        assert_eq!(pos.to_string(), "(0, 0)");

        let pos = Position::new(8, 3);
        assert_eq!(pos.row(), 8);
        assert_eq!(pos.col(), 3);
        assert_eq!(pos.to_string(), "(8, 3)");
    }

    #[test]
    fn test_ordering_is_row_major() {
        // Derived ordering compares row first, then column
        assert!(Position::new(0, 8) < Position::new(1, 0));
        assert!(Position::new(4, 2) < Position::new(4, 3));
        assert_eq!(Position::new(5, 5), Position::new(5, 5));
    }
}
