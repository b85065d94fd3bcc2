use std::fmt;

use crate::PuzzleError;

/// A single slide of the blank tile.
///
/// The blank swaps places with its neighbour in the given direction, so
/// `Up` moves the neighbour above the blank one row down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Left, Move::Down, Move::Right];

    /// (row, column) delta applied to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Left => (0, -1),
            Move::Down => (1, 0),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// The token used in move strings.
    pub fn as_char(&self) -> char {
        match self {
            Move::Up => 'u',
            Move::Left => 'l',
            Move::Down => 'd',
            Move::Right => 'r',
        }
    }
}

impl TryFrom<char> for Move {
    type Error = PuzzleError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'u' => Ok(Move::Up),
            'l' => Ok(Move::Left),
            'd' => Ok(Move::Down),
            'r' => Ok(Move::Right),
            _ => Err(PuzzleError::InvalidMove { ch }),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// Parses a move string such as `"uulddr"`. Whitespace is skipped.
pub fn parse_moves(moves: &str) -> Result<Vec<Move>, PuzzleError> {
    moves
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(Move::try_from)
        .collect()
}

/// Renders moves back into the `u d l r` alphabet.
pub fn to_move_string(moves: &[Move]) -> String {
    moves.iter().map(Move::as_char).collect()
}
