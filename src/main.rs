use clap::Parser;
use crossterm::style::{style, Stylize};
use fifteen_puzzle::{to_move_string, Puzzle};
use rand::{rngs::StdRng, thread_rng, RngCore, SeedableRng};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Board file: one row per line, tiles separated by whitespace, 0 for the blank
    board_file: Option<PathBuf>,

    /// Number of rows for a generated puzzle
    #[clap(long, default_value_t = 4, conflicts_with = "board_file")]
    height: usize,

    /// Number of columns for a generated puzzle
    #[clap(long, default_value_t = 4, conflicts_with = "board_file")]
    width: usize,

    /// Scramble with this many random slides instead of shuffling every tile
    #[clap(short, long, conflicts_with = "board_file")]
    scramble: Option<usize>,

    /// Seed for the random generator
    #[clap(long)]
    seed: Option<u64>,

    /// Move string applied to the starting board before solving
    #[clap(short, long)]
    apply: Option<String>,

    /// Print every move together with the board it produces
    #[clap(short, long)]
    replay: bool,

    /// Disable coloured output
    #[clap(long)]
    plain: bool,
}

fn read_board_file(path: &PathBuf) -> Result<Puzzle, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    content
        .parse()
        .map_err(|e| format!("Invalid board in {}: {}", path.display(), e))
}

fn generate(args: &Args) -> Result<Puzzle, String> {
    let mut puzzle = Puzzle::new(args.height, args.width).map_err(|e| e.to_string())?;

    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(thread_rng()),
    };

    match args.scramble {
        Some(steps) => {
            let taken = puzzle.scramble(&mut *rng, steps);
            log::info!("scrambled with {}", to_move_string(&taken));
        }
        None => puzzle.shuffle(&mut *rng),
    }
    Ok(puzzle)
}

fn initial_puzzle(args: &Args) -> Result<Puzzle, String> {
    let mut puzzle = match &args.board_file {
        Some(path) => read_board_file(path)?,
        None => generate(args)?,
    };

    if let Some(moves) = &args.apply {
        puzzle
            .try_apply_moves(moves)
            .map_err(|e| format!("Cannot apply moves: {}", e))?;
    }
    Ok(puzzle)
}

/// Renders the board with solved tiles highlighted.
fn render(puzzle: &Puzzle, plain: bool) -> String {
    let cell_width = (puzzle.height() * puzzle.width() - 1).to_string().len();

    let mut out = String::new();
    for (row, cells) in puzzle.rows().iter().enumerate() {
        for (col, &value) in cells.iter().enumerate() {
            let text = format!("{:>cell_width$} ", value);
            if plain {
                out.push_str(&text);
            } else if value == 0 {
                out.push_str(&style(text).dark_grey().to_string());
            } else if puzzle.is_solved_at(row, col) {
                out.push_str(&style(text).green().to_string());
            } else {
                out.push_str(&text);
            }
        }
        out.push('\n');
    }
    out
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let puzzle = match initial_puzzle(&args) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("Initial puzzle:\n{}", render(&puzzle, args.plain));

    let output = match puzzle.solve() {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Cannot solve puzzle: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "solved {}x{} puzzle with {} moves",
        puzzle.height(),
        puzzle.width(),
        output.len()
    );

    println!("Solution with {} moves:\n{}\n", output.len(), to_move_string(&output));

    if args.replay {
        let mut board = puzzle.clone();
        for item in output {
            board.apply_move(item);
            println!("{}\n{}", item, render(&board, args.plain));
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_file_conflicts_with_generator_options() {
        for flag in ["--height", "--width", "--scramble"] {
            let result = Args::try_parse_from(["fifteen", "board.txt", flag, "3"]);
            assert!(result.is_err(), "{flag} accepted alongside a board file");
        }
    }

    #[test]
    fn board_file_alone_keeps_default_size() {
        let args = Args::try_parse_from(["fifteen", "board.txt"]).unwrap();
        assert_eq!(args.board_file, Some(PathBuf::from("board.txt")));
        assert_eq!((args.height, args.width), (4, 4));
    }

    #[test]
    fn generated_size_is_configurable() {
        let args = Args::try_parse_from(["fifteen", "--height", "3", "--width", "5"]).unwrap();
        assert_eq!((args.height, args.width), (3, 5));
        assert!(args.board_file.is_none());
    }
}
