//! Grid model for number-place (Sudoku) puzzles.
//!
//! This crate provides the digit grid that solvers operate on: a square
//! board of side `N` (where `N` is a perfect square, canonically 9) whose
//! cells hold `0` for blank or a digit `1..=N`. The grid validates its
//! shape and contents at construction and answers the area queries that
//! uniqueness constraints are checked against.
//!
//! # Overview
//!
//! - [`position`]: zero-based (row, column) coordinates
//! - [`grid`]: the validated digit grid, its area queries, its text
//!   representation, and the construction failures it can report
//!
//! # Examples
//!
//! ```
//! use nanpure_core::{Grid, Position};
//!
//! let grid: Grid = "
//!     1 2 | 3 4
//!     3 4 | 1 2
//!     ----+----
//!     2 1 | 4 3
//!     4 3 | 2 .
//! "
//! .parse()
//! .unwrap();
//!
//! assert_eq!(grid.side(), 4);
//! assert_eq!(grid.value(Position::new(3, 3)), 0);
//! assert!(grid.is_consistent());
//! assert!(!grid.is_complete());
//! ```

pub mod grid;
pub mod position;

// Re-export commonly used types
pub use self::{
    grid::{Grid, GridError},
    position::Position,
};
