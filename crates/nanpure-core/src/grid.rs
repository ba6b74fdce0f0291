//! Digit grid storage, validation, and area queries.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::Position;

/// Largest supported side length; digits `1..=N` must fit in a byte.
const MAX_SIDE: usize = 225;

/// A square digit grid of side `N`, where `N` is a perfect square.
///
/// Cells hold `0` for blank or a digit `1..=N`. Shape and contents are
/// validated when the grid is built; afterwards the grid is the single
/// source of truth for constraint queries. Solvers keep their candidate
/// bookkeeping elsewhere and write resolved digits back through
/// [`set`](Self::set).
///
/// # Examples
///
/// ```
/// use nanpure_core::{Grid, Position};
///
/// let grid = Grid::from_rows(&[
///     [1, 2, 3, 4],
///     [3, 4, 1, 2],
///     [2, 1, 4, 3],
///     [4, 3, 2, 1],
/// ])
/// .unwrap();
///
/// assert_eq!(grid.side(), 4);
/// assert_eq!(grid.box_len(), 2);
/// assert_eq!(grid.value(Position::new(1, 0)), 3);
/// assert!(grid.is_complete());
/// assert!(grid.is_consistent());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: u8,
    box_len: u8,
    cells: Vec<u8>,
}

impl Grid {
    /// Builds a grid from rows of digits, top to bottom.
    ///
    /// The input must be square, its side length must be a perfect square
    /// no larger than 225, and every entry must lie in `0..=N` where `N`
    /// is the side length. `0` means blank.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] describing the first violated rule: an
    /// empty input, a ragged row, a side length that is not a perfect
    /// square or is too large, or an out-of-range digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanpure_core::{Grid, GridError};
    ///
    /// let grid = Grid::from_rows(&[[0, 1], [1, 0]]);
    /// assert_eq!(grid.unwrap_err(), GridError::SideNotSquare { side: 2 });
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let side = rows.len();
        if side == 0 {
            return Err(GridError::Empty);
        }
        if side > MAX_SIDE {
            return Err(GridError::SideTooLarge {
                side,
                max: MAX_SIDE,
            });
        }
        for (row, cells) in rows.iter().enumerate() {
            let len = cells.as_ref().len();
            if len != side {
                return Err(GridError::NotSquare { row, len, side });
            }
        }
        let box_len = exact_sqrt(side).ok_or(GridError::SideNotSquare { side })?;

        let side_u8 = coord(side);
        let mut cells = Vec::with_capacity(side * side);
        for (row, row_cells) in rows.iter().enumerate() {
            for (col, &value) in row_cells.as_ref().iter().enumerate() {
                if value > side_u8 {
                    return Err(GridError::ValueOutOfRange {
                        pos: Position::new(coord(row), coord(col)),
                        value,
                        side: side_u8,
                    });
                }
                cells.push(value);
            }
        }

        Ok(Self {
            side: side_u8,
            box_len: coord(box_len),
            cells,
        })
    }

    /// Returns the side length `N`.
    #[must_use]
    pub const fn side(&self) -> u8 {
        self.side
    }

    /// Returns the box side length, the square root of `N`.
    #[must_use]
    pub const fn box_len(&self) -> u8 {
        self.box_len
    }

    /// Returns the digit at `pos`, `0` meaning blank.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    #[must_use]
    pub fn value(&self, pos: Position) -> u8 {
        self.cells[self.index(pos)]
    }

    /// Writes `value` at `pos`, `0` meaning blank.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid or `value` exceeds the side
    /// length.
    pub fn set(&mut self, pos: Position, value: u8) {
        assert!(
            value <= self.side,
            "digit {value} out of range for side {}",
            self.side,
        );
        let index = self.index(pos);
        self.cells[index] = value;
    }

    /// Iterates over every position in flat row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let side = self.side;
        (0..side).flat_map(move |row| (0..side).map(move |col| Position::new(row, col)))
    }

    /// Returns the digits of a row, left to right, `0` included.
    ///
    /// # Panics
    ///
    /// Panics if `row` lies outside the grid.
    #[must_use]
    pub fn row_values(&self, row: u8) -> Vec<u8> {
        (0..self.side)
            .map(|col| self.value(Position::new(row, col)))
            .collect()
    }

    /// Returns the digits of a column, top to bottom, `0` included.
    ///
    /// # Panics
    ///
    /// Panics if `col` lies outside the grid.
    #[must_use]
    pub fn column_values(&self, col: u8) -> Vec<u8> {
        (0..self.side)
            .map(|row| self.value(Position::new(row, col)))
            .collect()
    }

    /// Returns the digits of the box containing `pos` in row-major order,
    /// `0` included.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    #[must_use]
    pub fn box_values(&self, pos: Position) -> Vec<u8> {
        let top = self.box_origin(pos.row());
        let left = self.box_origin(pos.col());
        let mut values = Vec::with_capacity(usize::from(self.side));
        for row in top..top + self.box_len {
            for col in left..left + self.box_len {
                values.push(self.value(Position::new(row, col)));
            }
        }
        values
    }

    /// Maps a row or column index to the matching index of the top-left
    /// corner of its box, by flooring to a multiple of the box length.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanpure_core::Grid;
    ///
    /// let grid: Grid = ".".repeat(81).parse().unwrap();
    /// assert_eq!(grid.box_origin(0), 0);
    /// assert_eq!(grid.box_origin(5), 3);
    /// assert_eq!(grid.box_origin(8), 6);
    /// ```
    #[must_use]
    pub const fn box_origin(&self, coord: u8) -> u8 {
        coord - coord % self.box_len
    }

    /// Returns `true` if the row, column, and box containing `pos` each
    /// hold no duplicate nonzero digit.
    ///
    /// An area with blanks left is still valid as long as its placed
    /// digits are pairwise distinct.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    #[must_use]
    pub fn is_valid_at(&self, pos: Position) -> bool {
        !has_duplicate(&self.row_values(pos.row()))
            && !has_duplicate(&self.column_values(pos.col()))
            && !has_duplicate(&self.box_values(pos))
    }

    /// Returns `true` if no row, column, or box anywhere in the grid
    /// holds a duplicate nonzero digit.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        for index in 0..self.side {
            if has_duplicate(&self.row_values(index))
                || has_duplicate(&self.column_values(index))
            {
                return false;
            }
        }
        for top in (0..self.side).step_by(usize::from(self.box_len)) {
            for left in (0..self.side).step_by(usize::from(self.box_len)) {
                if has_duplicate(&self.box_values(Position::new(top, left))) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if every cell holds a nonzero digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }

    /// Sums the first three cells of the first row, a report value with
    /// no solving semantics.
    ///
    /// Grids narrower than three columns sum the cells that exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanpure_core::Grid;
    ///
    /// let grid: Grid = "1234 3412 2143 4321".parse().unwrap();
    /// assert_eq!(grid.sum_of_top_left_three(), 1 + 2 + 3);
    /// ```
    #[must_use]
    pub fn sum_of_top_left_three(&self) -> u32 {
        self.cells.iter().take(3).map(|&value| u32::from(value)).sum()
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(pos.row() < self.side && pos.col() < self.side);
        usize::from(pos.row()) * usize::from(self.side) + usize::from(pos.col())
    }

    fn format_row(&self, row: u8, width: usize) -> String {
        let mut line = String::new();
        for col in 0..self.side {
            if col != 0 {
                line.push(' ');
                if col % self.box_len == 0 {
                    line.push_str("| ");
                }
            }
            let value = self.value(Position::new(row, col));
            if value == 0 {
                line.push_str(&format!("{:>width$}", "."));
            } else {
                line.push_str(&format!("{value:>width$}"));
            }
        }
        line
    }
}

/// Renders the grid with `.` for blanks and `|`/`-` separators between
/// boxes. The output parses back via [`FromStr`].
impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 1 + usize::from(self.side >= 10) + usize::from(self.side >= 100);
        let group_width = usize::from(self.box_len) * (width + 1) - 1;
        let separator = box_separator(self.box_len, group_width);

        let mut lines = Vec::with_capacity(usize::from(self.side) + usize::from(self.box_len));
        for row in 0..self.side {
            if row != 0 && row % self.box_len == 0 {
                lines.push(separator.clone());
            }
            lines.push(self.format_row(row, width));
        }
        f.write_str(&lines.join("\n"))
    }
}

/// Parses a grid literal.
///
/// Cells are single characters: `1`-`9` for digits, and `.`, `_`, or `0`
/// for blank. Whitespace and the layout characters `|`, `+`, and `-` are
/// ignored, so pretty-printed grids parse back unchanged. The cell count
/// must be the square of a perfect square (16, 81, ...); shape and value
/// rules then match [`Grid::from_rows`]. Boards wider than 9 cannot be
/// written as literals since their digits exceed one character.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        for found in s.chars() {
            if found.is_whitespace() || matches!(found, '|' | '+' | '-') {
                continue;
            }
            let value = match found {
                '.' | '_' | '0' => 0,
                '1' => 1,
                '2' => 2,
                '3' => 3,
                '4' => 4,
                '5' => 5,
                '6' => 6,
                '7' => 7,
                '8' => 8,
                '9' => 9,
                _ => return Err(GridError::UnexpectedCharacter { found }),
            };
            cells.push(value);
        }
        if cells.is_empty() {
            return Err(GridError::Empty);
        }
        let count = cells.len();
        let side = exact_sqrt(count).ok_or(GridError::BadCellCount { count })?;
        let rows: Vec<&[u8]> = cells.chunks(side).collect();
        Self::from_rows(&rows)
    }
}

/// Errors reported when a grid cannot be built from its input.
///
/// Construction is the only place shape and range problems can arise;
/// everything downstream of a successfully built [`Grid`] assumes these
/// invariants hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The input contains no rows at all.
    #[display("grid is empty")]
    Empty,
    /// A row's length differs from the number of rows.
    #[display("row {row} has {len} cells, expected {side} for a square grid")]
    NotSquare {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of cells found in that row.
        len: usize,
        /// Expected side length (the number of rows).
        side: usize,
    },
    /// The side length has no integer square root, so the grid cannot be
    /// divided into boxes.
    #[display("side length {side} is not a perfect square")]
    SideNotSquare {
        /// The rejected side length.
        side: usize,
    },
    /// The side length exceeds what a byte-sized digit can express.
    #[display("side length {side} exceeds the supported maximum of {max}")]
    SideTooLarge {
        /// The rejected side length.
        side: usize,
        /// Largest supported side length.
        max: usize,
    },
    /// A cell holds a digit outside `0..=N`.
    #[display("cell {pos} holds {value}, outside the valid range 0..={side}")]
    ValueOutOfRange {
        /// Coordinate of the offending cell.
        pos: Position,
        /// The out-of-range digit.
        value: u8,
        /// Side length of the grid, the largest valid digit.
        side: u8,
    },
    /// A grid literal contains a character with no cell meaning.
    #[display("unexpected character {found:?} in grid literal")]
    UnexpectedCharacter {
        /// The rejected character.
        found: char,
    },
    /// A grid literal's cell count does not form a boxed square grid.
    #[display("grid literal has {count} cells, expected the square of a perfect square (such as 16 or 81)")]
    BadCellCount {
        /// Number of cells found in the literal.
        count: usize,
    },
}

fn exact_sqrt(n: usize) -> Option<usize> {
    let root = n.isqrt();
    (root * root == n).then_some(root)
}

fn box_separator(box_len: u8, group_width: usize) -> String {
    let mut line = String::new();
    for group in 0..box_len {
        if group != 0 {
            line.push('+');
        }
        let mut dashes = group_width;
        if group != 0 {
            dashes += 1;
        }
        if group != box_len - 1 {
            dashes += 1;
        }
        for _ in 0..dashes {
            line.push('-');
        }
    }
    line
}

#[expect(clippy::cast_possible_truncation)] // callers stay within the validated side length
const fn coord(index: usize) -> u8 {
    index as u8
}

fn has_duplicate(values: &[u8]) -> bool {
    for (i, &value) in values.iter().enumerate() {
        if value != 0 && values[i + 1..].contains(&value) {
            return true;
        }
    }
    false
}
