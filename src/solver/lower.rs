use super::position::position_tile;
use crate::Puzzle;

/// Carries a tile sitting at `(row - 1, 1)`, blank at `(row - 1, 0)`, down
/// into `(row, 0)`. The blank finishes at `(row - 1, 1)`.
const COLUMN_ZERO_CYCLE: &str = "ruldrdlurdluurddlur";

impl Puzzle {
    /// Places the correct tile at `(target_row, target_col)` in one of the
    /// lower rows (`target_row > 1`, `target_col > 0`).
    ///
    /// Requires [`Puzzle::lower_row_invariant`] at the target and leaves it
    /// holding at `(target_row, target_col - 1)`. Updates the puzzle and
    /// returns the move string.
    pub fn solve_interior_tile(&mut self, target_row: usize, target_col: usize) -> String {
        assert!(
            target_row > 1 && target_col > 0,
            "({target_row}, {target_col}) is not an interior position"
        );
        assert!(
            self.lower_row_invariant(target_row, target_col),
            "lower row invariant fails at ({target_row}, {target_col})"
        );

        let tile = self.current_position(target_row, target_col);
        let moves = position_tile((target_row, target_col), tile);
        self.apply_moves(&moves);

        log::trace!("interior ({target_row}, {target_col}): {moves}");
        moves
    }

    /// Places the correct tile at `(target_row, 0)` for `target_row > 1`.
    ///
    /// Requires [`Puzzle::lower_row_invariant`] at `(target_row, 0)` and
    /// leaves it holding at `(target_row - 1, width - 1)`.
    pub fn solve_col0_tile(&mut self, target_row: usize) -> String {
        assert!(target_row > 1, "row {target_row} is not a lower row");
        assert!(
            self.lower_row_invariant(target_row, 0),
            "lower row invariant fails at ({target_row}, 0)"
        );

        let mut moves = String::from("ur");
        self.apply_moves("ur");

        // The tile may have dropped into place on the first slide.
        if !self.is_solved_at(target_row, 0) {
            let tile = self.current_position(target_row, 0);
            let positioning = position_tile((target_row - 1, 1), tile);
            self.apply_moves(&positioning);
            moves.push_str(&positioning);

            self.apply_moves(COLUMN_ZERO_CYCLE);
            moves.push_str(COLUMN_ZERO_CYCLE);
        }

        let walk = "r".repeat(self.width() - 2);
        self.apply_moves(&walk);
        moves.push_str(&walk);

        log::trace!("column 0 of row {target_row}: {moves}");
        moves
    }
}
