#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use log::info;
use pairclear::board::Board;
use pairclear::solve::{format_moves, validate_moves, PairSolver};
use rand::{thread_rng, Rng};

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let board = read_board(&options)?;
    info!(
        "Read {}x{} board with {} colors",
        board.height(),
        board.width(),
        board.color_count()
    );
    let seed = options.seed().unwrap_or_else(|| thread_rng().gen());
    info!("Seed: {}", seed);
    let solution = PairSolver::new(&board)
        .options(options.solve_options(seed))
        .solve();
    if options.verify() {
        validate_moves(&board, &solution.moves).context("search produced an invalid move")?;
        info!("All moves are valid");
    }
    info!(
        "Removed {} of {} tiles",
        solution.removed_cells(),
        board.len()
    );
    write_moves(&options, &format_moves(&solution.moves))?;
    Ok(())
}

fn read_board(options: &Options) -> Result<Board> {
    let board = match options.input() {
        Some(path) => Board::from_file(path)
            .with_context(|| format!("failed to load board from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("error reading board from stdin")?;
            Board::parse(&buf)?
        }
    };
    Ok(board)
}

fn write_moves(options: &Options, s: &str) -> Result<()> {
    match options.output() {
        Some(path) => fs::write(path, s)
            .with_context(|| format!("failed to write moves to {}", path.display()))?,
        None => {
            let stdout = io::stdout();
            let mut stdout = stdout.lock();
            stdout.write_all(s.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
