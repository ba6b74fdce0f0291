//! Per-cell value and candidate bookkeeping.

use nanpure_core::Position;
use tinyvec::TinyVec;

/// Candidate digits for one cell, stored in ascending order.
///
/// Inline for boards up to side 9; larger boards spill to the heap.
type Candidates = TinyVec<[u8; 9]>;

/// One grid position's value and remaining candidate digits.
///
/// A cell seeded with `0` is *blank*: it carries the full ascending
/// candidate sequence and a cursor the backtracking search walks through
/// that sequence. A cell seeded with a digit is a *given*; its value and
/// empty candidate sequence never change. A blank cell that propagation
/// finalizes behaves like a given from then on.
///
/// Cells know nothing about the board; the board owns them and keeps the
/// digit grid in sync with their values.
#[derive(Debug, Clone)]
pub struct Cell {
    position: Position,
    value: u8,
    blank: bool,
    candidates: Candidates,
    cursor: usize,
}

impl Cell {
    /// Creates a cell seeded with `value`.
    ///
    /// A `value` of `0` marks the cell blank and fills its candidates
    /// with `1..=side` in ascending order; anything else is a given with
    /// no candidates.
    #[must_use]
    pub fn new(position: Position, value: u8, side: u8) -> Self {
        let blank = value == 0;
        let candidates = if blank {
            (1..=side).collect()
        } else {
            Candidates::default()
        };
        Self {
            position,
            value,
            blank,
            candidates,
            cursor: 0,
        }
    }

    /// Returns the cell's coordinate, fixed for its lifetime.
    #[must_use]
    pub const fn coordinate(&self) -> Position {
        self.position
    }

    /// Returns the current digit, `0` if unset.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns `true` while the cell is originally blank and not yet
    /// finalized by propagation.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.blank
    }

    /// Returns the remaining candidate digits in ascending order.
    #[must_use]
    pub fn candidates(&self) -> &[u8] {
        &self.candidates
    }

    /// Returns the cursor's index into the candidate sequence.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Sets the value to the candidate under the cursor.
    ///
    /// No-op when the candidate sequence is empty or the cursor has
    /// walked past its end, both of which occur transiently during
    /// search.
    pub fn commit_candidate(&mut self) {
        if let Some(&digit) = self.candidates.get(self.cursor) {
            self.value = digit;
        }
    }

    /// Removes every digit in `excluded` from the candidate sequence,
    /// preserving the survivors' relative order. No-op for cells that
    /// are not blank.
    ///
    /// `excluded` may contain zeros and duplicates; neither affects the
    /// result.
    pub fn restrict_candidates(&mut self, excluded: &[u8]) {
        if !self.blank {
            return;
        }
        self.candidates.retain(|digit| !excluded.contains(digit));
    }

    /// Returns `true` iff exactly one candidate remains.
    #[must_use]
    pub fn has_single_candidate(&self) -> bool {
        self.candidates.len() == 1
    }

    /// Commits a lone remaining candidate as the value and finalizes the
    /// cell: it stops being blank and its candidate sequence is cleared,
    /// so the backtracking search never visits it. Returns `true` if the
    /// cell was finalized.
    pub fn resolve_if_single(&mut self) -> bool {
        if !self.has_single_candidate() {
            return false;
        }
        self.value = self.candidates[0];
        self.blank = false;
        self.candidates.clear();
        true
    }

    /// Returns `true` when the cursor has walked past the last
    /// candidate. An empty candidate sequence is exhausted from the
    /// start.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.candidates.len()
    }

    /// Moves the cursor to the next candidate.
    pub fn advance_cursor(&mut self) {
        self.cursor += 1;
    }

    /// Clears the value and rewinds the cursor, leaving the candidate
    /// sequence untouched. Used when the search retreats through this
    /// cell.
    pub fn reset(&mut self) {
        self.value = 0;
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_given_cell_is_fixed() {
        let cell = Cell::new(Position::new(2, 5), 7, 9);
        assert_eq!(cell.coordinate(), Position::new(2, 5));
        assert_eq!(cell.value(), 7);
        assert!(!cell.is_blank());
        assert!(cell.candidates().is_empty());
    }

    #[test]
    fn test_blank_cell_starts_with_all_candidates() {
        let cell = Cell::new(Position::new(0, 0), 0, 9);
        assert_eq!(cell.value(), 0);
        assert!(cell.is_blank());
        assert_eq!(cell.candidates(), [1, 2, 3, 4, 5, 6, 7, 8, 9]);

        let small = Cell::new(Position::new(0, 0), 0, 4);
        assert_eq!(small.candidates(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_restrict_preserves_order_of_survivors() {
        let mut cell = Cell::new(Position::new(0, 0), 0, 9);
        cell.restrict_candidates(&[5, 1, 9]);
        assert_eq!(cell.candidates(), [2, 3, 4, 6, 7, 8]);

        // Zeros and repeats in the exclusion set change nothing
        cell.restrict_candidates(&[0, 2, 2, 0]);
        assert_eq!(cell.candidates(), [3, 4, 6, 7, 8]);
    }

    #[test]
    fn test_restrict_is_noop_for_givens() {
        let mut cell = Cell::new(Position::new(0, 0), 3, 9);
        cell.restrict_candidates(&[1, 2, 3]);
        assert_eq!(cell.value(), 3);
        assert!(cell.candidates().is_empty());
    }

    #[test]
    fn test_resolve_if_single_finalizes() {
        let mut cell = Cell::new(Position::new(4, 4), 0, 4);
        cell.restrict_candidates(&[1, 2, 4]);
        assert!(cell.has_single_candidate());

        assert!(cell.resolve_if_single());
        assert_eq!(cell.value(), 3);
        assert!(!cell.is_blank());
        assert!(cell.candidates().is_empty());

        // A second resolve finds nothing left to do
        assert!(!cell.resolve_if_single());
    }

    #[test]
    fn test_resolve_if_single_requires_exactly_one() {
        let mut cell = Cell::new(Position::new(0, 0), 0, 4);
        cell.restrict_candidates(&[1, 2]);
        assert!(!cell.has_single_candidate());
        assert!(!cell.resolve_if_single());
        assert_eq!(cell.value(), 0);
        assert!(cell.is_blank());
    }

    #[test]
    fn test_cursor_walks_candidates() {
        let mut cell = Cell::new(Position::new(0, 0), 0, 4);
        cell.restrict_candidates(&[3]);
        assert_eq!(cell.candidates(), [1, 2, 4]);

        cell.commit_candidate();
        assert_eq!(cell.value(), 1);

        cell.advance_cursor();
        cell.commit_candidate();
        assert_eq!(cell.value(), 2);

        cell.advance_cursor();
        cell.commit_candidate();
        assert_eq!(cell.value(), 4);
        assert!(!cell.is_exhausted());

        // Past the end: exhausted, and committing changes nothing
        cell.advance_cursor();
        assert!(cell.is_exhausted());
        cell.commit_candidate();
        assert_eq!(cell.value(), 4);
    }

    #[test]
    fn test_empty_candidates_are_exhausted_immediately() {
        let mut cell = Cell::new(Position::new(0, 0), 0, 4);
        cell.restrict_candidates(&[1, 2, 3, 4]);
        assert!(cell.candidates().is_empty());
        assert!(cell.is_exhausted());

        cell.commit_candidate();
        assert_eq!(cell.value(), 0);
        assert!(cell.is_blank());
    }

    #[test]
    fn test_reset_rewinds_but_keeps_candidates() {
        let mut cell = Cell::new(Position::new(0, 0), 0, 4);
        cell.advance_cursor();
        cell.commit_candidate();
        assert_eq!(cell.value(), 2);

        cell.reset();
        assert_eq!(cell.value(), 0);
        assert_eq!(cell.cursor(), 0);
        assert_eq!(cell.candidates(), [1, 2, 3, 4]);
        assert!(cell.is_blank());
    }
}
