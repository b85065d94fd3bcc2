//! Position-by-position solver.
//!
//! Tiles are placed from the bottom-right corner backwards. Rows below the
//! first two are solved right to left, finishing each with column 0. Rows 0
//! and 1 are then solved together, column by column from the right, leaving
//! the upper-left 2x2 block for last. Every phase starts from one of the
//! predicates in [`crate::invariant`] and hands over to the next one, so
//! cells already solved are never touched again.
//!
//! Every phase both updates the puzzle and returns its move string; the
//! concatenation of all of them solves the original board.

mod closing;
mod lower;
mod position;
mod upper;

use crate::{moves::parse_moves, Puzzle, PuzzleError};

impl Puzzle {
    /// Solves the puzzle in place and returns the move string that did it.
    ///
    /// ```
    /// use fifteen_puzzle::Puzzle;
    ///
    /// let mut puzzle: Puzzle = "1 4 2\n3 0 5\n6 7 8".parse()?;
    /// let original = puzzle.clone();
    ///
    /// let moves = puzzle.solve_puzzle()?;
    /// assert!(puzzle.is_solved());
    ///
    /// let mut replay = original;
    /// replay.apply_moves(&moves);
    /// assert!(replay.is_solved());
    /// # Ok::<(), fifteen_puzzle::PuzzleError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Unsolvable`] when the arrangement has the wrong
    /// parity. The board is left untouched in that case.
    pub fn solve_puzzle(&mut self) -> Result<String, PuzzleError> {
        if !self.is_current_state_solvable() {
            return Err(PuzzleError::Unsolvable);
        }
        if self.is_solved() {
            return Ok(String::new());
        }

        let (height, width) = (self.height(), self.width());

        let (blank_row, blank_col) = self.blank_position();
        let mut solution = "r".repeat(width - 1 - blank_col) + &"d".repeat(height - 1 - blank_row);
        self.apply_moves(&solution);

        for row in (2..height).rev() {
            for col in (1..width).rev() {
                solution.push_str(&self.solve_interior_tile(row, col));
                assert!(self.lower_row_invariant(row, col - 1));
            }
            solution.push_str(&self.solve_col0_tile(row));
            assert!(self.lower_row_invariant(row - 1, width - 1));
            log::debug!("row {row} solved, {} moves so far", solution.len());
        }

        for col in (2..width).rev() {
            solution.push_str(&self.solve_row1_tile(col));
            assert!(self.row0_invariant(col));
            solution.push_str(&self.solve_row0_tile(col));
            assert!(self.row1_invariant(col - 1));
            log::debug!("column {col} of rows 0-1 solved, {} moves so far", solution.len());
        }

        solution.push_str(&self.solve_2x2());
        assert!(self.is_solved(), "puzzle not solved after final phase");

        log::debug!(
            "solved {height}x{width} puzzle with {} moves",
            solution.len()
        );
        Ok(solution)
    }

    /// Solves a copy of the puzzle, returning the moves without modifying
    /// `self`.
    pub fn solve(&self) -> Result<Vec<crate::Move>, PuzzleError> {
        let mut scratch = self.clone();
        let solution = scratch.solve_puzzle()?;
        parse_moves(&solution)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{testing::SIZES, Puzzle, PuzzleError};

    #[test]
    fn solved_puzzle_needs_no_moves() {
        let mut puzzle = Puzzle::new(4, 4).unwrap();
        assert_eq!(puzzle.solve_puzzle(), Ok(String::new()));
    }

    #[test]
    fn unsolvable_puzzle_is_rejected_untouched() {
        let mut puzzle = Puzzle::from_grid(vec![vec![0, 2, 1], vec![3, 4, 5], vec![6, 7, 8]]).unwrap();
        let before = puzzle.clone();
        assert_eq!(puzzle.solve_puzzle(), Err(PuzzleError::Unsolvable));
        assert_eq!(puzzle, before);
    }

    #[test]
    fn solves_three_by_three_with_centre_blank() {
        let mut puzzle: Puzzle = "1 4 2\n3 0 5\n6 7 8".parse().unwrap();
        assert!(puzzle.is_current_state_solvable());

        let moves = puzzle.solve_puzzle().unwrap();
        assert!(puzzle.is_solved(), "{moves}");

        let mut odd: Puzzle = "4 1 2\n3 0 5\n6 7 8".parse().unwrap();
        assert_eq!(odd.solve_puzzle(), Err(PuzzleError::Unsolvable));
    }

    #[test]
    fn solves_course_example() {
        let mut puzzle = Puzzle::from_grid(vec![
            vec![4, 13, 1, 3],
            vec![5, 10, 2, 7],
            vec![8, 12, 6, 11],
            vec![9, 0, 14, 15],
        ])
        .unwrap();
        let original = puzzle.clone();

        let moves = puzzle.solve_puzzle().unwrap();
        assert!(puzzle.is_solved());

        let mut replay = original;
        replay.apply_moves(&moves);
        assert!(replay.is_solved());
    }

    #[test]
    fn solves_shuffled_puzzles_of_every_shape() {
        let mut rng = StdRng::seed_from_u64(2048);
        for &(height, width) in SIZES {
            for _ in 0..25 {
                let mut puzzle = Puzzle::new(height, width).unwrap();
                puzzle.shuffle(&mut rng);
                let original = puzzle.clone();

                let moves = puzzle.solve_puzzle().unwrap();
                assert!(puzzle.is_solved(), "{height}x{width}\n{original}");

                let mut replay = original;
                replay.apply_moves(&moves);
                assert!(replay.is_solved());
            }
        }
    }

    #[test]
    fn solve_leaves_original_alone() {
        let mut rng = StdRng::seed_from_u64(15);
        let mut puzzle = Puzzle::new(3, 4).unwrap();
        puzzle.scramble(&mut rng, 40);
        let before = puzzle.clone();

        let moves = puzzle.solve().unwrap();
        assert_eq!(puzzle, before);

        for mv in moves {
            assert!(puzzle.apply_move(mv));
        }
        assert!(puzzle.is_solved());
    }
}
