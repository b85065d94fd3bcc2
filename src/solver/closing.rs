use crate::Puzzle;

/// With the blank at `(0, 0)`, rotates the other three cells of the 2x2
/// block one step: `(0, 1) <- (1, 1) <- (1, 0) <- (0, 1)`.
const ROTATION: &str = "rdlu";

/// Counts the rotations that turn `ring` into `goal`.
///
/// Both are listed as `[(0, 1), (1, 1), (1, 0)]`. Returns `None` when no
/// rotation matches, meaning the block is an odd permutation.
fn rotations_needed(mut ring: [u32; 3], goal: [u32; 3]) -> Option<usize> {
    for count in 0..ring.len() {
        if ring == goal {
            return Some(count);
        }
        ring.rotate_left(1);
    }
    None
}

impl Puzzle {
    /// Solves the upper-left 2x2 block once everything else is solved.
    ///
    /// The blank may be anywhere in the block. Updates the puzzle and returns
    /// the move string.
    ///
    /// # Panics
    ///
    /// Panics if anything outside the block is unsolved or the block cannot
    /// be solved by rotation.
    pub fn solve_2x2(&mut self) -> String {
        assert!(
            self.solved_outside_top_left(),
            "cells outside the 2x2 block are not solved"
        );

        let (row, col) = self.blank_position();
        let mut moves = "u".repeat(row) + &"l".repeat(col);
        self.apply_moves(&moves);

        let width = self.width() as u32;
        let ring = [self.number(0, 1), self.number(1, 1), self.number(1, 0)];
        let rotations = rotations_needed(ring, [1, width + 1, width])
            .unwrap_or_else(|| panic!("2x2 block {ring:?} cannot be rotated into place"));

        let rotation_moves = ROTATION.repeat(rotations);
        self.apply_moves(&rotation_moves);
        moves.push_str(&rotation_moves);

        log::trace!("2x2 block after {rotations} rotation(s): {moves}");
        moves
    }
}
