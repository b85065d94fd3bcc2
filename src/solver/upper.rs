use super::position::position_tile;
use crate::Puzzle;

/// Carries a tile sitting at `(1, col - 1)`, blank at `(1, col - 2)`, up
/// into `(0, col)` without disturbing `(1, col)`. The blank finishes at
/// `(1, col - 1)`.
const ROW_ZERO_CYCLE: &str = "urdlurrdluldrruld";

impl Puzzle {
    /// Places the correct tile at `(1, target_col)` for `target_col > 1`.
    ///
    /// Requires [`Puzzle::row1_invariant`] at `target_col` with row 0 also
    /// solved right of `target_col`, and leaves [`Puzzle::row0_invariant`]
    /// holding at `target_col`.
    pub fn solve_row1_tile(&mut self, target_col: usize) -> String {
        assert!(target_col > 1, "column {target_col} belongs to the 2x2 block");
        assert!(
            self.row1_invariant(target_col) && self.row0_solved_right_of(target_col),
            "row 1 invariant fails at column {target_col}"
        );

        let tile = self.current_position(1, target_col);
        let mut moves = position_tile((1, target_col), tile);
        moves.push_str("ur");
        self.apply_moves(&moves);

        log::trace!("row 1, column {target_col}: {moves}");
        moves
    }

    /// Places the correct tile at `(0, target_col)` for `target_col > 1`.
    ///
    /// Requires [`Puzzle::row0_invariant`] at `target_col` with row 0 also
    /// solved right of `target_col`, and leaves [`Puzzle::row1_invariant`]
    /// holding at `target_col - 1`.
    pub fn solve_row0_tile(&mut self, target_col: usize) -> String {
        assert!(target_col > 1, "column {target_col} belongs to the 2x2 block");
        assert!(
            self.row0_invariant(target_col) && self.row0_solved_right_of(target_col),
            "row 0 invariant fails at column {target_col}"
        );

        let mut moves = String::from("ld");
        self.apply_moves("ld");

        // The tile may have slid into place on the first move.
        if !self.is_solved_at(0, target_col) {
            let tile = self.current_position(0, target_col);
            let positioning = position_tile((1, target_col - 1), tile);
            self.apply_moves(&positioning);
            moves.push_str(&positioning);

            self.apply_moves(ROW_ZERO_CYCLE);
            moves.push_str(ROW_ZERO_CYCLE);
        }

        log::trace!("row 0, column {target_col}: {moves}");
        moves
    }
}
