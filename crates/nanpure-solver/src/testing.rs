//! Test utilities for exercising the solver.
//!
//! This module provides well-known puzzle fixtures together with assertion
//! helpers for checking that a grid really solves a given puzzle.
//!
//! # Example
//!
//! ```
//! use nanpure_solver::testing::{self, assert_solution};
//!
//! let puzzle = testing::grid(testing::CLASSIC);
//! let solved = testing::grid(testing::CLASSIC_SOLVED);
//! assert_solution(&puzzle, &solved);
//! ```

use nanpure_core::Grid;

/// Project Euler problem 96, grid 1. Mostly forced cells.
pub const EULER_GRID_1: &str = "
    003020600
    900305001
    001806400
    008102900
    700000008
    006708200
    002609500
    800203009
    005010300
";

/// The unique solution of [`EULER_GRID_1`].
pub const EULER_GRID_1_SOLVED: &str = "
    483921657
    967345821
    251876493
    548132976
    729564138
    136798245
    372689514
    814253769
    695417382
";

/// Project Euler problem 96, grid 50. Needs real search.
pub const EULER_GRID_50: &str = "
    300200000
    000107000
    706030500
    070009080
    900020004
    010800050
    009040301
    000702000
    000008006
";

/// A widely reprinted newspaper puzzle with a unique solution.
pub const CLASSIC: &str = "
    53..7....
    6..195...
    .98....6.
    8...6...3
    4..8.3..1
    7...2...6
    .6....28.
    ...419..5
    ....8..79
";

/// The unique solution of [`CLASSIC`].
pub const CLASSIC_SOLVED: &str = "
    534678912
    672195348
    198342567
    859761423
    426853791
    713924856
    961537284
    287419635
    345286179
";

/// Parses a grid literal that is known to be well formed.
///
/// # Panics
///
/// Panics if the text cannot be parsed as a valid grid.
#[track_caller]
pub fn grid(text: &str) -> Grid {
    text.parse().unwrap()
}

/// Asserts that `solved` is a genuine solution of `original`: complete,
/// consistent, and agreeing with every given digit.
///
/// # Panics
///
/// Panics with a descriptive message if any of those checks fail, using
/// `#[track_caller]` to report the correct source location.
#[track_caller]
pub fn assert_solution(original: &Grid, solved: &Grid) {
    assert_eq!(original.side(), solved.side());
    assert!(solved.is_complete(), "solution still has blanks");
    assert!(solved.is_consistent(), "solution violates uniqueness");
    for pos in original.positions() {
        let given = original.value(pos);
        if given != 0 {
            assert_eq!(solved.value(pos), given, "clue at {pos} was overwritten");
        }
    }
}
