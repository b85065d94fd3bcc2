use crate::moves::Move;

/// Errors produced while building a puzzle or validating user supplied moves.
///
/// Broken solver invariants are not represented here: they panic.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    #[display("puzzle must be at least 2x2, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },
    #[display("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[display("tile {value} is duplicated or out of range")]
    NotAPermutation { value: u32 },
    #[display("line {line}: `{token}` is not a tile number")]
    ParseTile { line: usize, token: String },
    #[display("invalid move character {ch:?}")]
    InvalidMove { ch: char },
    #[display("move {index} ({mv}) slides the blank off the grid")]
    MoveOffGrid { index: usize, mv: Move },
    #[display("puzzle is not solvable")]
    Unsolvable,
}
