use rand::{seq::SliceRandom, Rng};
use std::{fmt, str::FromStr};

use crate::{moves::Move, PuzzleError};

/// A `height x width` sliding tile puzzle.
///
/// Tile `0` is the blank. The solved arrangement has the blank in the
/// upper-left corner and tile `k` at `(k / width, k % width)`.
///
/// Every constructor checks that the grid holds each label in
/// `0..height * width` exactly once. The blank is located by scanning rather
/// than cached, so [`Puzzle::set_number`] can be used freely by callers that
/// edit the board cell by cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    height: usize,
    width: usize,
    board: Vec<Vec<u32>>,
}

impl Puzzle {
    /// Creates a solved puzzle.
    ///
    /// ```
    /// use fifteen_puzzle::Puzzle;
    ///
    /// let puzzle = Puzzle::new(3, 4)?;
    /// assert!(puzzle.is_solved());
    /// assert_eq!(puzzle.number(2, 1), 9);
    /// # Ok::<(), fifteen_puzzle::PuzzleError>(())
    /// ```
    pub fn new(height: usize, width: usize) -> Result<Self, PuzzleError> {
        check_dimensions(height, width)?;

        let board = (0..height)
            .map(|row| (0..width).map(|col| (row * width + col) as u32).collect())
            .collect();

        Ok(Self {
            height,
            width,
            board,
        })
    }

    /// Builds a puzzle from explicit rows.
    pub fn from_grid(board: Vec<Vec<u32>>) -> Result<Self, PuzzleError> {
        let height = board.len();
        let width = board.first().map_or(0, Vec::len);
        check_dimensions(height, width)?;

        for (row, cells) in board.iter().enumerate() {
            if cells.len() != width {
                return Err(PuzzleError::RaggedRow {
                    row,
                    found: cells.len(),
                    expected: width,
                });
            }
        }

        let mut seen = vec![false; height * width];
        for &value in board.iter().flatten() {
            match seen.get_mut(value as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(PuzzleError::NotAPermutation { value }),
            }
        }

        Ok(Self {
            height,
            width,
            board,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.board
    }

    pub fn number(&self, row: usize, col: usize) -> u32 {
        self.board[row][col]
    }

    /// Overwrites a single cell.
    ///
    /// Nothing is validated: callers editing the board this way are
    /// responsible for leaving a permutation behind before solving.
    pub fn set_number(&mut self, row: usize, col: usize, value: u32) {
        self.board[row][col] = value;
    }

    /// The label that belongs at `(row, col)` once solved.
    pub fn solved_label(&self, row: usize, col: usize) -> u32 {
        (row * self.width + col) as u32
    }

    pub fn solved_position(&self, label: u32) -> (usize, usize) {
        let label = label as usize;
        (label / self.width, label % self.width)
    }

    pub fn is_solved_at(&self, row: usize, col: usize) -> bool {
        self.board[row][col] == self.solved_label(row, col)
    }

    /// Locates `label` on the board.
    ///
    /// # Panics
    ///
    /// Panics if the label is missing, which can only happen after
    /// [`Puzzle::set_number`] broke the permutation.
    pub fn position_of(&self, label: u32) -> (usize, usize) {
        self.board
            .iter()
            .enumerate()
            .find_map(|(row, cells)| {
                cells
                    .iter()
                    .position(|&value| value == label)
                    .map(|col| (row, col))
            })
            .unwrap_or_else(|| panic!("value {label} not found"))
    }

    /// Current position of the tile whose solved position is
    /// `(solved_row, solved_col)`.
    pub fn current_position(&self, solved_row: usize, solved_col: usize) -> (usize, usize) {
        self.position_of(self.solved_label(solved_row, solved_col))
    }

    pub fn blank_position(&self) -> (usize, usize) {
        self.position_of(0)
    }

    /// Slides the blank one step. Returns `false`, leaving the board
    /// untouched, when the move would leave the grid.
    pub fn apply_move(&mut self, movement: Move) -> bool {
        let blank = self.blank_position();
        self.slide_from(blank, movement).is_some()
    }

    /// Applies a move string such as `"lddru"`.
    ///
    /// # Panics
    ///
    /// Panics on a character outside `u d l r` or on a move that leaves the
    /// grid. Use [`Puzzle::try_apply_moves`] for untrusted input.
    pub fn apply_moves(&mut self, moves: &str) {
        let mut blank = self.blank_position();
        for ch in moves.chars() {
            let movement = match Move::try_from(ch) {
                Ok(movement) => movement,
                Err(err) => panic!("{err}"),
            };
            blank = self
                .slide_from(blank, movement)
                .unwrap_or_else(|| panic!("move off grid: {movement} at {blank:?}"));
        }
    }

    /// Validating version of [`Puzzle::apply_moves`]. On error the board is
    /// left unchanged.
    pub fn try_apply_moves(&mut self, moves: &str) -> Result<(), PuzzleError> {
        let parsed = crate::moves::parse_moves(moves)?;

        let mut blank = self.blank_position();
        for (index, &mv) in parsed.iter().enumerate() {
            blank = self
                .neighbour(blank, mv)
                .ok_or(PuzzleError::MoveOffGrid { index, mv })?;
        }

        let mut blank = self.blank_position();
        for mv in parsed {
            if let Some(next) = self.slide_from(blank, mv) {
                blank = next;
            }
        }
        Ok(())
    }

    fn neighbour(&self, (row, col): (usize, usize), movement: Move) -> Option<(usize, usize)> {
        let (dr, dc) = movement.as_offset();
        let new_row = row.checked_add_signed(dr).filter(|&r| r < self.height)?;
        let new_col = col.checked_add_signed(dc).filter(|&c| c < self.width)?;
        Some((new_row, new_col))
    }

    fn slide_from(&mut self, blank: (usize, usize), movement: Move) -> Option<(usize, usize)> {
        let (new_row, new_col) = self.neighbour(blank, movement)?;
        let (row, col) = blank;

        self.board[row][col] = self.board[new_row][new_col];
        self.board[new_row][new_col] = 0;
        Some((new_row, new_col))
    }

    pub fn is_solved(&self) -> bool {
        self.board
            .iter()
            .flatten()
            .enumerate()
            .all(|(index, &value)| value as usize == index)
    }

    pub fn is_current_state_solvable(&self) -> bool {
        let flat_board: Vec<u32> = self.board.iter().flatten().copied().collect();
        let (blank_row, _) = self.blank_position();

        Self::is_solvable(&flat_board, self.width, blank_row)
    }

    fn is_solvable(flattened: &[u32], width: usize, blank_row: usize) -> bool {
        let inversions = Self::count_inversions(flattened);

        if width % 2 == 1 {
            // Vertical slides move a tile past an even number of others.
            inversions % 2 == 0
        } else {
            // Each vertical slide flips the inversion parity and the blank row.
            (inversions + blank_row) % 2 == 0
        }
    }

    fn count_inversions(flattened: &[u32]) -> usize {
        flattened
            .iter()
            .enumerate()
            .filter(|&(_, &val)| val != 0)
            .map(|(i, &val)| {
                flattened[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < val)
                    .count()
            })
            .sum()
    }

    /// Reorders every tile at random, retrying until the arrangement is
    /// solvable.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut flattened: Vec<u32> = self.board.iter().flatten().copied().collect();

        let mut attempts = 0;
        loop {
            attempts += 1;
            flattened.shuffle(rng);

            let blank_index = flattened.iter().position(|&value| value == 0).unwrap_or(0);
            if Self::is_solvable(&flattened, self.width, blank_index / self.width) {
                break;
            }
        }

        for (cell, &value) in self.board.iter_mut().flatten().zip(&flattened) {
            *cell = value;
        }
        log::debug!("shuffled {}x{} puzzle in {attempts} attempt(s)", self.height, self.width);
    }

    /// Performs `steps` random legal slides, never immediately undoing the
    /// previous one. Returns the moves taken.
    pub fn scramble<R: Rng + ?Sized>(&mut self, rng: &mut R, steps: usize) -> Vec<Move> {
        let mut taken: Vec<Move> = Vec::with_capacity(steps);
        let mut blank = self.blank_position();

        for _ in 0..steps {
            let last = taken.last().copied();
            let candidates: Vec<Move> = Move::ALL
                .into_iter()
                .filter(|mv| Some(mv.opposite()) != last)
                .filter(|&mv| self.neighbour(blank, mv).is_some())
                .collect();

            // Every cell of a 2x2 or larger grid has at least two neighbours.
            let Some(&mv) = candidates.choose(rng) else {
                break;
            };
            if let Some(next) = self.slide_from(blank, mv) {
                blank = next;
                taken.push(mv);
            }
        }

        log::debug!("scrambled puzzle with {} move(s)", taken.len());
        taken
    }
}

fn check_dimensions(height: usize, width: usize) -> Result<(), PuzzleError> {
    if height < 2 || width < 2 {
        return Err(PuzzleError::InvalidDimensions { height, width });
    }
    Ok(())
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    /// Parses whitespace separated rows, one per non-empty line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Vec::new();

        for (index, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let row = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<u32>().map_err(|_| PuzzleError::ParseTile {
                        line: index + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            board.push(row);
        }

        Self::from_grid(board)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.board {
            writeln!(f, "{:?}", row)?;
        }
        Ok(())
    }
}
