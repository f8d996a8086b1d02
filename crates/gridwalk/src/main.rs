//! Solve one puzzle from an input file.
//!
//! Usage: `gridwalk <puzzle> <input-path>`
//!
//! Prints `part 1: N` and `part 2: N` on stdout. Logs go to stderr,
//! filtered by `RUST_LOG` (default `warn`).

use std::process::ExitCode;

use gridwalk::puzzles::{read_input, solve, Answers, Puzzle, PuzzleError};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: gridwalk <puzzle> <input-path>
  puzzles: day08 day14 day16 day17 day18";

fn run(puzzle: &str, path: &str) -> Result<Answers, PuzzleError> {
    let puzzle: Puzzle = puzzle.parse()?;
    let text = read_input(path)?;
    solve(puzzle, &text)
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [puzzle, path] = args.as_slice() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    match run(puzzle, path) {
        Ok(answers) => {
            println!("part 1: {}", answers.part1);
            println!("part 2: {}", answers.part2);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "solve failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
