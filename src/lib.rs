//! # Fifteen puzzle solver
//!
//! Solves rectangular sliding tile puzzles of any size from 2x2 up. The
//! solved arrangement puts the blank (`0`) in the upper-left corner and tile
//! `k` at `(k / width, k % width)`.
//!
//! Solutions are move strings over `u d l r`, each letter sliding the blank
//! one cell. They are built constructively, one target position at a time,
//! and are not optimal.
//!
//! ## Modules
//! - `puzzle`: the board (`Puzzle`), move application, solvability and
//!   randomisation.
//! - `moves`: the `Move` direction type and move string parsing.
//! - `invariant`: predicates describing which prefix of the puzzle is solved.
//! - `solver`: the per-phase solvers and the `solve_puzzle` driver.
//! - `error`: the crate error type.

pub mod error;
pub mod invariant;
pub mod moves;
pub mod puzzle;
pub mod solver;

#[cfg(test)]
mod testing;

pub use error::PuzzleError;
pub use moves::{parse_moves, to_move_string, Move};
pub use puzzle::Puzzle;
