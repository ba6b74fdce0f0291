//! Board state and the deduce-then-backtrack machinery.

use nanpure_core::{Grid, Position};

use crate::{cell::Cell, solver::SolveStats};

/// How a backtracking search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SearchTermination {
    /// Every blank cell received a digit consistent with its areas.
    Completed,
    /// The decision stack emptied with all candidates exhausted; the
    /// puzzle has no completion.
    Exhausted,
    /// The step budget ran out before the search reached a terminal.
    LimitReached,
}

/// Result of pushing one cell forward through its candidates.
enum CellAdvance {
    Placed,
    Exhausted,
    OutOfSteps,
}

/// A puzzle being solved: the digit grid plus per-cell candidate state.
///
/// The board exclusively owns its cells. Every cell mutation flows
/// through board methods that immediately write values back into the
/// grid, so the grid stays the single source of truth for constraint
/// queries while cells carry only derived candidate state.
///
/// The lifecycle is explicit and ordered:
/// [`new`](Self::new) → [`build_cells`](Self::build_cells) →
/// [`propagate`](Self::propagate) →
/// [`enumerate_blanks`](Self::enumerate_blanks) → [`search`](Self::search).
/// Each step runs exactly once; skipping or repeating one is a
/// programming error and panics.
///
/// # Examples
///
/// ```
/// use nanpure_core::Grid;
/// use nanpure_solver::Board;
///
/// let grid: Grid = "
///     1234
///     34.2
///     2.43
///     4321
/// "
/// .parse()
/// .unwrap();
///
/// let mut board = Board::new(grid);
/// board.build_cells();
/// board.propagate();
/// assert!(!board.has_blank());
/// assert!(board.into_grid().is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    cells: Vec<Cell>,
    blanks: Option<Vec<usize>>,
}

impl Board {
    /// Wraps a grid for solving. Retrieve it in its current state with
    /// [`into_grid`](Self::into_grid).
    #[must_use]
    pub const fn new(grid: Grid) -> Self {
        Self {
            grid,
            cells: Vec::new(),
            blanks: None,
        }
    }

    /// Returns the digit grid in its current state.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Unwraps the digit grid in its current state.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Builds one [`Cell`] per grid position in flat row-major order.
    ///
    /// Blank positions get the full ascending candidate sequence, givens
    /// get none.
    ///
    /// # Panics
    ///
    /// Panics if the cells were already built.
    pub fn build_cells(&mut self) {
        assert!(self.cells.is_empty(), "cells already built");
        let side = self.grid.side();
        let cells: Vec<Cell> = self
            .grid
            .positions()
            .map(|pos| Cell::new(pos, self.grid.value(pos), side))
            .collect();
        self.cells = cells;
    }

    /// Runs naked-single constraint propagation to a fixed point and
    /// returns the number of cells it resolved.
    ///
    /// Each pass visits every blank cell in flat order, removes the
    /// digits already used in its row, column, and box from its
    /// candidates, and finalizes any cell left with exactly one
    /// candidate, writing the digit into the grid immediately. A new
    /// digit can unlock reductions at cells already visited, so passes
    /// repeat until one resolves nothing.
    ///
    /// Propagation never guesses. It may fully solve forced-cell
    /// puzzles; hard puzzles keep their remaining blanks for
    /// [`search`](Self::search). A cell whose candidates empty out stays
    /// blank; the search later treats it as immediately exhausted.
    ///
    /// # Panics
    ///
    /// Panics if [`build_cells`](Self::build_cells) has not run.
    pub fn propagate(&mut self) -> usize {
        assert!(!self.cells.is_empty(), "cells not built");
        let mut resolved_total = 0;
        loop {
            let mut resolved_in_pass = 0;
            for index in 0..self.cells.len() {
                if !self.cells[index].is_blank() {
                    continue;
                }
                let pos = self.cells[index].coordinate();
                let used = self.used_digits(pos);
                let cell = &mut self.cells[index];
                cell.restrict_candidates(&used);
                if cell.resolve_if_single() {
                    let digit = cell.value();
                    self.grid.set(pos, digit);
                    resolved_in_pass += 1;
                }
            }
            resolved_total += resolved_in_pass;
            if resolved_in_pass == 0 {
                break;
            }
        }
        resolved_total
    }

    /// Returns `true` while any cell is still blank.
    ///
    /// # Panics
    ///
    /// Panics if [`build_cells`](Self::build_cells) has not run.
    #[must_use]
    pub fn has_blank(&self) -> bool {
        assert!(!self.cells.is_empty(), "cells not built");
        self.cells.iter().any(Cell::is_blank)
    }

    /// Captures the flat-order cell index of every still-blank cell.
    ///
    /// The search visits exactly these cells, in exactly this order; the
    /// order never changes afterwards. Cells finalized by propagation
    /// are not included and are therefore never revisited.
    ///
    /// # Panics
    ///
    /// Panics if cells are not built or blanks were already enumerated.
    pub fn enumerate_blanks(&mut self) {
        assert!(!self.cells.is_empty(), "cells not built");
        assert!(self.blanks.is_none(), "blanks already enumerated");
        let blanks: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_blank())
            .map(|(index, _)| index)
            .collect();
        self.blanks = Some(blanks);
    }

    /// Runs the backtracking search without a step budget.
    ///
    /// See [`search_with_budget`](Self::search_with_budget).
    ///
    /// # Panics
    ///
    /// Panics if [`enumerate_blanks`](Self::enumerate_blanks) has not
    /// run, or if the search already ran.
    pub fn search(&mut self, stats: &mut SolveStats) -> SearchTermination {
        self.search_with_budget(None, stats)
    }

    /// Completes the assignment by depth-first search over the blank
    /// index, trying each cell's candidates in ascending order.
    ///
    /// Placing a candidate is valid when the cell's row, column, and box
    /// hold no duplicate nonzero digit; valid placements are pushed on
    /// an explicit decision stack. A cell that runs out of candidates is
    /// reset (value cleared, cursor rewound, write-through to the grid)
    /// and the search pops the stack, advances the popped cell's cursor,
    /// and resumes there. Popping an empty stack is the
    /// [`Exhausted`](SearchTermination::Exhausted) terminal: the puzzle
    /// has no completion.
    ///
    /// Candidate order and visiting order are fixed, so the search is
    /// deterministic and finds the first completion in lexicographic
    /// order, which for a proper puzzle is the unique solution.
    ///
    /// `max_steps` bounds the number of candidate assignments; when it
    /// runs out the search stops with
    /// [`LimitReached`](SearchTermination::LimitReached), leaving the
    /// grid mid-search. `stats` accumulates assignment and backtrack
    /// counts either way.
    ///
    /// # Panics
    ///
    /// Panics if [`enumerate_blanks`](Self::enumerate_blanks) has not
    /// run, or if the search already ran.
    pub fn search_with_budget(
        &mut self,
        max_steps: Option<u64>,
        stats: &mut SolveStats,
    ) -> SearchTermination {
        let blanks = self.blanks.take().expect("blanks not enumerated");
        let mut stack: Vec<usize> = Vec::with_capacity(blanks.len());
        let mut next = 0;

        while next < blanks.len() {
            let cell_index = blanks[next];
            debug_assert!(
                self.cells[cell_index].is_blank(),
                "search reached a finalized cell",
            );
            match self.advance_cell(cell_index, max_steps, stats) {
                CellAdvance::Placed => {
                    stack.push(next);
                    next += 1;
                }
                CellAdvance::Exhausted => {
                    self.reset_cell(cell_index);
                    stats.backtracks += 1;
                    match stack.pop() {
                        Some(previous) => {
                            self.cells[blanks[previous]].advance_cursor();
                            next = previous;
                        }
                        None => return SearchTermination::Exhausted,
                    }
                }
                CellAdvance::OutOfSteps => return SearchTermination::LimitReached,
            }
        }
        SearchTermination::Completed
    }

    /// Commits candidates at one cell until a placement validates or the
    /// candidate sequence runs out.
    fn advance_cell(
        &mut self,
        cell_index: usize,
        max_steps: Option<u64>,
        stats: &mut SolveStats,
    ) -> CellAdvance {
        loop {
            let cell = &mut self.cells[cell_index];
            if cell.is_exhausted() {
                return CellAdvance::Exhausted;
            }
            cell.commit_candidate();
            let pos = cell.coordinate();
            let digit = cell.value();
            self.grid.set(pos, digit);
            stats.assignments += 1;
            if let Some(limit) = max_steps
                && stats.assignments > limit
            {
                return CellAdvance::OutOfSteps;
            }
            if self.grid.is_valid_at(pos) {
                return CellAdvance::Placed;
            }
            self.cells[cell_index].advance_cursor();
        }
    }

    /// Clears a cell back to unset and writes the blank through to the
    /// grid.
    fn reset_cell(&mut self, cell_index: usize) {
        let cell = &mut self.cells[cell_index];
        cell.reset();
        let pos = cell.coordinate();
        self.grid.set(pos, 0);
    }

    /// Collects the nonzero digits already placed in the row, column,
    /// and box around `pos`. Duplicates are harmless to candidate
    /// restriction and are not filtered.
    fn used_digits(&self, pos: Position) -> Vec<u8> {
        let mut used = self.grid.row_values(pos.row());
        used.extend(self.grid.column_values(pos.col()));
        used.extend(self.grid.box_values(pos));
        used.retain(|&digit| digit != 0);
        used
    }
}
