//! Board builders shared by the phase tests.

use crate::Puzzle;

/// Builds a board where every cell accepted by `fixed` holds its solved tile,
/// the blank sits at `blank`, and `tile` sits at `tile_at`. The remaining
/// labels fill the other cells in ascending row-major order.
///
/// The result is a valid permutation but not necessarily solvable, which is
/// fine for exercising a single phase.
pub(crate) fn staged(
    height: usize,
    width: usize,
    blank: (usize, usize),
    fixed: impl Fn(usize, usize) -> bool,
    tile: u32,
    tile_at: (usize, usize),
) -> Puzzle {
    let label = |row: usize, col: usize| (row * width + col) as u32;

    let mut board = vec![vec![None; width]; height];
    let mut used = vec![false; height * width];
    for row in 0..height {
        for col in 0..width {
            if fixed(row, col) {
                board[row][col] = Some(label(row, col));
                used[label(row, col) as usize] = true;
            }
        }
    }
    board[blank.0][blank.1] = Some(0);
    board[tile_at.0][tile_at.1] = Some(tile);
    used[0] = true;
    used[tile as usize] = true;

    let mut rest = (0..height * width)
        .filter(|&value| !used[value])
        .map(|value| value as u32);
    let mut filled = Vec::with_capacity(height);
    for cells in board {
        let mut row = Vec::with_capacity(width);
        for cell in cells {
            row.push(cell.or_else(|| rest.next()).expect("label count matches cells"));
        }
        filled.push(row);
    }

    Puzzle::from_grid(filled).expect("staged board is a permutation")
}

/// Cells before `target` in row-major order.
pub(crate) fn cells_before(width: usize, target: (usize, usize)) -> Vec<(usize, usize)> {
    (0..target.0 * width + target.1)
        .map(|index| (index / width, index % width))
        .collect()
}

pub(crate) const SIZES: &[(usize, usize)] = &[
    (2, 2),
    (2, 3),
    (3, 2),
    (3, 3),
    (4, 4),
    (3, 5),
    (5, 3),
    (5, 5),
    (2, 5),
    (6, 4),
];
