//! Remove as many same-colored pairs as possible within a time budget

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::solve::search::SearchLoop;

pub use self::deadline::Deadline;
pub use self::moves::{format_moves, Move};
pub use self::replay::validate_moves;

pub mod adjacency;
pub mod matching;
pub mod occupancy;
pub mod removal_mask;

mod deadline;
mod moves;
mod replay;
mod search;

pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(9);
pub const DEFAULT_SEED: u64 = 0x5eed;

/// Settings of a search
#[derive(Clone, Debug)]
pub struct SolveOptions {
    /// checked between passes, so the last pass may overrun it
    pub time_limit: Duration,
    pub seed: u64,
    /// shuffle the scan order between passes; without it a single pass runs
    pub shuffle: bool,
    /// passes between shuffles of the color order
    pub reshuffle_interval: u32,
    pub max_passes: Option<u32>,
    pub preprocess: Option<Preprocess>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            seed: DEFAULT_SEED,
            shuffle: true,
            reshuffle_interval: 16,
            max_passes: None,
            preprocess: Some(Preprocess::default()),
        }
    }
}

/// When and how far to shrink a large board with one bounded pass before searching
#[derive(Clone, Copy, Debug)]
pub struct Preprocess {
    pub min_cells: usize,
    pub min_colors: usize,
    /// stop the bounded pass once this many tiles remain
    pub residual_cells: usize,
}

impl Default for Preprocess {
    fn default() -> Self {
        Self {
            min_cells: 10_000,
            min_colors: 6,
            residual_cells: 4_000,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Solution {
    /// in the order they must be applied
    pub moves: Vec<Move>,
    pub passes: u32,
    pub elapsed: Duration,
}

impl Solution {
    pub fn removed_cells(&self) -> usize {
        self.moves.len() * 2
    }

    pub fn is_perfect(&self, board: &Board) -> bool {
        self.removed_cells() == board.len()
    }
}

pub struct PairSolver<'a> {
    board: &'a Board,
    options: SolveOptions,
}

impl<'a> PairSolver<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            options: SolveOptions::default(),
        }
    }

    pub fn options(&mut self, options: SolveOptions) -> &mut Self {
        self.options = options;
        self
    }

    pub fn solve(&self) -> Solution {
        debug!(
            "Solving {}x{} board with {} colors, seed {}",
            self.board.height(),
            self.board.width(),
            self.board.color_count(),
            self.options.seed
        );
        let rng = StdRng::seed_from_u64(self.options.seed);
        SearchLoop::new(self.board, &self.options, rng).run()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{validate_moves, PairSolver, SolveOptions};
    use crate::board::Board;

    fn solve(rows: &[&str]) -> (Board, super::Solution) {
        let board = Board::from_rows(rows).unwrap();
        let solution = PairSolver::new(&board)
            .options(SolveOptions {
                time_limit: Duration::from_millis(20),
                max_passes: Some(50),
                ..SolveOptions::default()
            })
            .solve();
        validate_moves(&board, &solution.moves).unwrap();
        (board, solution)
    }

    #[test]
    fn single_pair() {
        let (board, solution) = solve(&["00"]);
        assert_eq!(1, solution.moves.len());
        assert!(solution.is_perfect(&board));
    }

    #[test]
    fn square() {
        let (board, solution) = solve(&["00", "00"]);
        assert_eq!(2, solution.moves.len());
        assert!(solution.is_perfect(&board));
    }

    #[test]
    fn uniform() {
        let (_, solution) = solve(&["4444", "4444", "4444"]);
        assert_eq!(6, solution.moves.len());
    }

    #[test]
    fn all_distinct() {
        let (board, solution) = solve(&["012", "345", "678"]);
        assert!(solution.moves.is_empty());
        assert!(!solution.is_perfect(&board));
    }

    #[test]
    fn checkerboard() {
        let (_, solution) = solve(&["01", "10"]);
        assert!(solution.moves.is_empty());
    }

    #[test]
    fn odd_cells_leave_one() {
        let (_, solution) = solve(&["000"]);
        assert_eq!(1, solution.moves.len());
        assert_eq!(2, solution.removed_cells());
    }
}
