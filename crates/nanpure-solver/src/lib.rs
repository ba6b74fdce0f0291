//! Number-place (Sudoku) solving on top of [`nanpure_core`] grids.
//!
//! Solving runs in two phases. Candidate propagation repeatedly fixes
//! every blank cell whose row, column, and box peers rule out all but
//! one digit, until a full pass fixes nothing. If blanks remain, a
//! deterministic backtracking search tries the surviving candidates in
//! ascending order, so a puzzle with several completions always yields
//! the same one.
//!
//! [`Solver`] is the entry point; [`Board`] exposes the phases
//! individually for callers that want to drive them by hand.
//!
//! # Examples
//!
//! ```
//! use nanpure_core::Grid;
//! use nanpure_solver::Solver;
//!
//! let puzzle: Grid = "
//!     53..7....
//!     6..195...
//!     .98....6.
//!     8...6...3
//!     4..8.3..1
//!     7...2...6
//!     .6....28.
//!     ...419..5
//!     ....8..79
//! "
//! .parse()
//! .unwrap();
//!
//! let solved = Solver::new().solve(&puzzle).solved().expect("puzzle has a solution");
//! assert!(solved.is_complete());
//! assert_eq!(solved.sum_of_top_left_three(), 5 + 3 + 4);
//! ```

pub use self::{
    board::{Board, SearchTermination},
    cell::Cell,
    solver::{SolveOutcome, SolveStats, Solver},
};

mod board;
mod cell;
mod solver;
pub mod testing;
