use std::cmp::Ordering;

/// Where a tile sits relative to the target cell, which holds the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Approach {
    Above { rows: usize },
    Left { cols: usize },
    Right { cols: usize },
    NorthWest { rows: usize, cols: usize },
    NorthEast { rows: usize, cols: usize },
}

impl Approach {
    fn classify(target: (usize, usize), tile: (usize, usize)) -> Self {
        let (target_row, target_col) = target;
        let (tile_row, tile_col) = tile;
        assert!(
            tile_row <= target_row,
            "tile at {tile:?} lies below target {target:?}"
        );

        match (target_row - tile_row, tile_col.cmp(&target_col)) {
            (0, Ordering::Equal) => panic!("tile already occupies target {target:?}"),
            (0, Ordering::Less) => Approach::Left {
                cols: target_col - tile_col,
            },
            (0, Ordering::Greater) => Approach::Right {
                cols: tile_col - target_col,
            },
            (rows, Ordering::Equal) => Approach::Above { rows },
            (rows, Ordering::Less) => Approach::NorthWest {
                rows,
                cols: target_col - tile_col,
            },
            (rows, Ordering::Greater) => Approach::NorthEast {
                rows,
                cols: tile_col - target_col,
            },
        }
    }
}

fn push_repeated(moves: &mut String, pattern: &str, times: usize) {
    for _ in 0..times {
        moves.push_str(pattern);
    }
}

/// Move string that carries the tile at `tile` into `target`, starting with
/// the blank on `target` and leaving it immediately left of `target`.
///
/// Only cells before `target` in row-major order are disturbed, with two
/// exceptions that callers must allow for:
///
/// * a tile in the target row right of the target (only possible when those
///   cells are not yet solved) is walked back through the row above;
/// * a tile in row 0 north-east of a target in row 1 borrows row 1 to the
///   right of the target.
///
/// Requires `target.1 >= 1` and `target.0 >= 1`.
///
/// Tiles in the target row or column are moved directly by a repeated cycle.
/// Diagonal tiles first get one corrective manoeuvre that leaves them in the
/// target column with the blank on top, and then finish exactly like a tile
/// that started above the target.
pub(crate) fn position_tile(target: (usize, usize), tile: (usize, usize)) -> String {
    let (target_row, target_col) = target;
    let tile_row = tile.0;
    debug_assert!(target_row >= 1 && target_col >= 1);

    let mut moves = String::new();
    match Approach::classify(target, tile) {
        Approach::Left { cols } => {
            push_repeated(&mut moves, "l", cols);
            push_repeated(&mut moves, "urrdl", cols - 1);
            return moves;
        }
        Approach::Right { cols } => {
            push_repeated(&mut moves, "r", cols);
            push_repeated(&mut moves, "ulldr", cols - 1);
            moves.push_str("ulld");
            return moves;
        }
        Approach::Above { rows } => {
            push_repeated(&mut moves, "u", rows);
        }
        Approach::NorthWest { rows, cols } => {
            push_repeated(&mut moves, "u", rows);
            push_repeated(&mut moves, "l", cols);
            let shift_right = if tile_row > 0 { "urrdl" } else { "drrul" };
            push_repeated(&mut moves, shift_right, cols - 1);
            moves.push_str("dru");
        }
        Approach::NorthEast { rows, cols } => {
            push_repeated(&mut moves, "u", rows);
            push_repeated(&mut moves, "r", cols);
            let shift_left = if tile_row > 0 { "ulldr" } else { "dllur" };
            push_repeated(&mut moves, shift_left, cols - 1);
            if tile_row == 0 || tile_row + 1 < target_row {
                moves.push_str("dlu");
            } else {
                // The cell below-right of the tile is solved: go over the top.
                moves.push_str("ullddru");
            }
        }
    }

    // The tile is now in the target column one row below `tile_row`, with
    // the blank directly above it.
    push_repeated(&mut moves, "lddru", target_row - tile_row - 1);
    moves.push_str("ld");
    moves
}
