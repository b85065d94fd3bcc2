use fifteen_puzzle::{parse_moves, Puzzle, PuzzleError};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn scrambled(height: usize, width: usize, seed: u64, steps: usize) -> Puzzle {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut puzzle = Puzzle::new(height, width).expect("valid dimensions");
    puzzle.scramble(&mut rng, steps);
    puzzle
}

#[test]
fn solves_puzzle_from_board_text() {
    let mut puzzle: Puzzle = "
        15 14 13 12
        11 10  9  8
         7  6  5  4
         3  2  1  0
    "
    .parse()
    .unwrap();
    let original = puzzle.clone();

    let moves = puzzle.solve_puzzle().unwrap();
    assert!(puzzle.is_solved());

    let mut replay = original;
    replay.try_apply_moves(&moves).unwrap();
    assert!(replay.is_solved());
}

#[test]
fn rejects_unsolvable_board_text() {
    let mut puzzle: Puzzle = "0 1 2\n3 4 5\n6 8 7".parse().unwrap();
    assert_eq!(puzzle.solve_puzzle(), Err(PuzzleError::Unsolvable));
    assert_eq!(puzzle.solve(), Err(PuzzleError::Unsolvable));
}

#[test]
fn solves_tall_and_wide_boards() {
    for (height, width) in [(2, 7), (7, 2), (8, 3), (3, 8)] {
        let mut puzzle = scrambled(height, width, 99, 400);
        puzzle.solve_puzzle().unwrap();
        assert!(puzzle.is_solved(), "{height}x{width}");
    }
}

proptest! {
    #[test]
    fn solution_replays_to_solved_board(
        height in 2usize..7,
        width in 2usize..7,
        seed in any::<u64>(),
        steps in 0usize..400,
    ) {
        let original = scrambled(height, width, seed, steps);
        let mut puzzle = original.clone();

        let moves = puzzle.solve_puzzle().unwrap();
        prop_assert!(puzzle.is_solved());

        let mut replay = original;
        replay.apply_moves(&moves);
        prop_assert_eq!(replay, puzzle);
    }

    #[test]
    fn every_move_stays_on_the_board(
        height in 2usize..6,
        width in 2usize..6,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut puzzle = Puzzle::new(height, width).unwrap();
        puzzle.shuffle(&mut rng);

        let moves = puzzle.solve().unwrap();
        prop_assert_eq!(parse_moves(&fifteen_puzzle::to_move_string(&moves)).unwrap(), moves.clone());
        for mv in moves {
            prop_assert!(puzzle.apply_move(mv), "{} left the board", mv);
        }
        prop_assert!(puzzle.is_solved());
    }

    #[test]
    fn mutating_a_clone_never_touches_the_original(
        seed in any::<u64>(),
        steps in 1usize..100,
    ) {
        let original = scrambled(4, 4, seed, steps);
        let snapshot: Vec<Vec<u32>> = original.rows().to_vec();

        let mut copy = original.clone();
        copy.solve_puzzle().unwrap();
        copy.set_number(3, 3, 0);

        prop_assert_eq!(original.rows(), snapshot.as_slice());
    }
}
