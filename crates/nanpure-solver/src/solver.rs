//! End-to-end solving: propagation first, search only if blanks remain.

use nanpure_core::Grid;

use crate::board::{Board, SearchTermination};

/// Counters describing how a solve went.
///
/// Purely informational; the counters never influence which terminal a
/// puzzle reaches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    /// Cells fixed by constraint propagation alone.
    pub resolved_by_propagation: usize,
    /// Candidate digits written onto the grid during search, counting
    /// rejected trials.
    pub assignments: u64,
    /// Times the search retreated from a cell with its candidates
    /// exhausted.
    pub backtracks: u64,
}

impl SolveStats {
    /// Creates zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// The outcome of solving one puzzle.
///
/// An unsolvable puzzle is a normal negative result, not an error: the
/// caller reports it and moves on. Only [`Solved`](Self::Solved) carries
/// a grid; the other terminals deliberately do not expose the mid-search
/// state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveOutcome {
    /// A complete assignment satisfying all uniqueness constraints.
    Solved(Grid),
    /// Exhaustive search found no completion, or the givens already
    /// conflict.
    Unsolvable,
    /// The step budget ran out before the search reached a terminal.
    StepLimitReached,
}

impl SolveOutcome {
    /// Returns the solved grid, or `None` for the negative terminals.
    #[must_use]
    pub fn solved(self) -> Option<Grid> {
        match self {
            Self::Solved(grid) => Some(grid),
            Self::Unsolvable | Self::StepLimitReached => None,
        }
    }
}

/// Solves puzzles by running constraint propagation to a fixed point,
/// then a deterministic backtracking search over whatever remains.
///
/// Each solve works on its own [`Board`], so a single `Solver` may be
/// shared freely across threads and puzzles.
///
/// # Examples
///
/// ```
/// use nanpure_core::Grid;
/// use nanpure_solver::Solver;
///
/// let puzzle: Grid = "
///     ..3 .2. 6..
///     9.. 3.5 ..1
///     ..1 8.6 4..
///     ..8 1.2 9..
///     7.. ... ..8
///     ..6 7.8 2..
///     ..2 6.9 5..
///     8.. 2.3 ..9
///     ..5 .1. 3..
/// "
/// .parse()
/// .unwrap();
///
/// let outcome = Solver::new().solve(&puzzle);
/// let solved = outcome.solved().expect("puzzle has a solution");
/// assert!(solved.is_complete());
/// assert_eq!(solved.sum_of_top_left_three(), 4 + 8 + 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    max_steps: Option<u64>,
}

impl Solver {
    /// Creates a solver with no step budget.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_steps: None }
    }

    /// Creates a solver that abandons a search after `max_steps`
    /// candidate assignments, reporting
    /// [`StepLimitReached`](SolveOutcome::StepLimitReached).
    #[must_use]
    pub const fn with_max_steps(max_steps: u64) -> Self {
        Self {
            max_steps: Some(max_steps),
        }
    }

    /// Solves one puzzle.
    ///
    /// The input grid is left untouched; the solved grid is returned in
    /// the outcome. Given digits are never overwritten, and solving the
    /// same input twice yields identical output.
    #[must_use]
    pub fn solve(&self, grid: &Grid) -> SolveOutcome {
        self.solve_with_stats(grid).0
    }

    /// Solves one puzzle and reports counters alongside the outcome.
    ///
    /// Drives the full board lifecycle: build cells, propagate, and if
    /// blanks remain, enumerate them and search. A completed assignment
    /// is only reported [`Solved`](SolveOutcome::Solved) after a final
    /// completeness and whole-grid consistency check, so givens that
    /// conflict inside fully-given areas surface as
    /// [`Unsolvable`](SolveOutcome::Unsolvable) rather than as a bogus
    /// grid.
    #[must_use]
    pub fn solve_with_stats(&self, grid: &Grid) -> (SolveOutcome, SolveStats) {
        let mut stats = SolveStats::new();
        let mut board = Board::new(grid.clone());
        board.build_cells();
        stats.resolved_by_propagation = board.propagate();

        if board.has_blank() {
            board.enumerate_blanks();
            match board.search_with_budget(self.max_steps, &mut stats) {
                SearchTermination::Completed => {}
                SearchTermination::Exhausted => return (SolveOutcome::Unsolvable, stats),
                SearchTermination::LimitReached => {
                    return (SolveOutcome::StepLimitReached, stats);
                }
            }
        }

        let solved = board.into_grid();
        if solved.is_complete() && solved.is_consistent() {
            (SolveOutcome::Solved(solved), stats)
        } else {
            (SolveOutcome::Unsolvable, stats)
        }
    }
}
