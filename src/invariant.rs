//! Predicates describing how much of the puzzle is already solved.
//!
//! Each solving phase requires one of these on entry and re-establishes one
//! for the next target position on exit.

use crate::Puzzle;

impl Puzzle {
    /// Blank at `(target_row, target_col)`, every row below `target_row`
    /// solved, and row `target_row` solved strictly right of `target_col`.
    pub fn lower_row_invariant(&self, target_row: usize, target_col: usize) -> bool {
        self.number(target_row, target_col) == 0
            && self.rows_solved_from(target_row + 1)
            && (target_col + 1..self.width()).all(|col| self.is_solved_at(target_row, col))
    }

    /// Blank at `(0, target_col)`, row 1 solved from `target_col` rightward,
    /// and every row from 2 down solved.
    pub fn row0_invariant(&self, target_col: usize) -> bool {
        self.number(0, target_col) == 0
            && (target_col..self.width()).all(|col| self.is_solved_at(1, col))
            && self.rows_solved_from(2)
    }

    /// Blank at `(1, target_col)`, row 1 solved strictly right of
    /// `target_col`, and every row from 2 down solved.
    pub fn row1_invariant(&self, target_col: usize) -> bool {
        self.number(1, target_col) == 0
            && (target_col + 1..self.width()).all(|col| self.is_solved_at(1, col))
            && self.rows_solved_from(2)
    }

    /// Everything outside the upper-left 2x2 block is solved.
    pub(crate) fn solved_outside_top_left(&self) -> bool {
        self.rows_solved_from(2)
            && (0..2).all(|row| (2..self.width()).all(|col| self.is_solved_at(row, col)))
    }

    /// Row 0 is solved strictly right of `target_col`.
    ///
    /// The row 0 and row 1 phases rely on this even though their named
    /// invariants leave it out; the driver establishes it by alternating them.
    pub(crate) fn row0_solved_right_of(&self, target_col: usize) -> bool {
        (target_col + 1..self.width()).all(|col| self.is_solved_at(0, col))
    }

    fn rows_solved_from(&self, first_row: usize) -> bool {
        (first_row..self.height())
            .all(|row| (0..self.width()).all(|col| self.is_solved_at(row, col)))
    }
}
