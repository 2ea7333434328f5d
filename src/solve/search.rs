use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Color};
use crate::solve::adjacency::AdjacencyBoard;
use crate::solve::deadline::Deadline;
use crate::solve::matching::{MatchingPass, PassState};
use crate::solve::moves::Move;
use crate::solve::{Preprocess, Solution, SolveOptions};

/// Runs matching passes with reshuffled scan orders until the time budget runs out,
/// keeping the pass that removed the most pairs
pub(crate) struct SearchLoop<'a, R> {
    board: &'a Board,
    options: &'a SolveOptions,
    rng: R,
}

impl<'a, R: Rng> SearchLoop<'a, R> {
    pub fn new(board: &'a Board, options: &'a SolveOptions, rng: R) -> Self {
        Self {
            board,
            options,
            rng,
        }
    }

    pub fn run(mut self) -> Solution {
        let deadline = Deadline::after(self.options.time_limit);
        let adjacency = AdjacencyBoard::new(self.board);
        let mut color_order: Vec<Color> = (0..self.board.color_count() as Color).collect();
        let mut source = PassState::new(self.board);
        let prefix = match self.options.preprocess {
            Some(preprocess) => self.preprocess(&adjacency, &mut source, &color_order, preprocess),
            None => Vec::new(),
        };

        let mut working = source.clone();
        let mut best: Option<Vec<Move>> = None;
        let mut passes = 0;
        loop {
            if self.options.max_passes.map_or(false, |max| passes >= max) {
                break;
            }
            // the first pass always runs so that some result exists
            if passes > 0 && deadline.is_expired() {
                break;
            }
            if self.options.shuffle && passes % self.options.reshuffle_interval.max(1) == 0 {
                color_order.shuffle(&mut self.rng);
            }
            working.restore(&source);
            if self.options.shuffle {
                for positions in &mut working.positions {
                    positions.shuffle(&mut self.rng);
                }
            }
            let removed = MatchingPass::new(&adjacency, &mut working, &color_order).run();
            passes += 1;
            debug!("Pass {} removed {} pairs", passes, removed);
            if best.as_ref().map_or(true, |best| removed > best.len()) {
                info!(
                    "New best: {} pairs after {} passes ({:?})",
                    prefix.len() + removed,
                    passes,
                    deadline.elapsed()
                );
                best = Some(working.history.clone());
            }
            if working.present_count() == 0 {
                info!("Cleared the board");
                break;
            }
            if !self.options.shuffle {
                // every pass would repeat the same scan
                break;
            }
        }

        let mut moves = prefix;
        moves.extend(best.unwrap_or_default());
        let elapsed = deadline.elapsed();
        info!(
            "Removed {} of {} tiles in {} passes ({:?})",
            moves.len() * 2,
            self.board.len(),
            passes,
            elapsed
        );
        Solution {
            moves,
            passes,
            elapsed,
        }
    }

    /// Shrinks a large board with one bounded pass. The removed pairs become a fixed prefix of
    /// every result and `source` is left holding the residual board.
    fn preprocess(
        &self,
        adjacency: &AdjacencyBoard,
        source: &mut PassState,
        color_order: &[Color],
        preprocess: Preprocess,
    ) -> Vec<Move> {
        let cells = self.board.len();
        if cells < preprocess.min_cells
            || self.board.color_count() < preprocess.min_colors
            || cells <= preprocess.residual_cells
        {
            return Vec::new();
        }
        let max_pairs = (cells - preprocess.residual_cells + 1) / 2;
        let removed = MatchingPass::new(adjacency, source, color_order)
            .max_pairs(max_pairs)
            .run();
        info!(
            "Preprocessing removed {} pairs, {} tiles remain",
            removed,
            source.present_count()
        );
        std::mem::take(&mut source.history)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::SearchLoop;
    use crate::board::Board;
    use crate::solve::replay::validate_moves;
    use crate::solve::{Preprocess, SolveOptions};

    fn options() -> SolveOptions {
        SolveOptions {
            time_limit: Duration::from_secs(60),
            max_passes: Some(20),
            ..SolveOptions::default()
        }
    }

    fn board() -> Board {
        Board::from_rows(&["01201", "12010", "20102", "01021", "10210", "22110"]).unwrap()
    }

    #[test]
    fn results_are_valid() {
        let board = board();
        let options = options();
        let solution = SearchLoop::new(&board, &options, StdRng::seed_from_u64(7)).run();
        assert!(solution.passes >= 1);
        validate_moves(&board, &solution.moves).unwrap();
    }

    #[test]
    fn same_seed_same_result() {
        let board = board();
        let options = options();
        let a = SearchLoop::new(&board, &options, StdRng::seed_from_u64(3)).run();
        let b = SearchLoop::new(&board, &options, StdRng::seed_from_u64(3)).run();
        assert_eq!(a.moves, b.moves);
    }

    #[test]
    fn no_shuffle_runs_one_pass() {
        let board = board();
        let options = SolveOptions {
            shuffle: false,
            ..options()
        };
        let a = SearchLoop::new(&board, &options, StdRng::seed_from_u64(1)).run();
        let b = SearchLoop::new(&board, &options, StdRng::seed_from_u64(2)).run();
        assert_eq!(1, a.passes);
        assert_eq!(a.moves, b.moves);
    }

    #[test]
    fn stops_on_perfect_clear() {
        let board = Board::from_rows(&["0011", "1100"]).unwrap();
        let options = SolveOptions {
            time_limit: Duration::from_secs(60),
            max_passes: None,
            ..SolveOptions::default()
        };
        let solution = SearchLoop::new(&board, &options, StdRng::seed_from_u64(0)).run();
        assert_eq!(4, solution.moves.len());
        validate_moves(&board, &solution.moves).unwrap();
    }

    #[test]
    fn expired_deadline_still_runs_once() {
        let board = board();
        let options = SolveOptions {
            time_limit: Duration::from_secs(0),
            max_passes: None,
            ..SolveOptions::default()
        };
        let solution = SearchLoop::new(&board, &options, StdRng::seed_from_u64(0)).run();
        assert_eq!(1, solution.passes);
    }

    #[test]
    fn preprocess_keeps_results_valid() {
        let rows: Vec<String> = (0..20)
            .map(|y| (0..20).map(|x| ((y * 7 + x * 3 + x * y) % 6).to_string()).collect())
            .collect();
        let board = Board::from_rows(&rows).unwrap();
        let options = SolveOptions {
            preprocess: Some(Preprocess {
                min_cells: 100,
                min_colors: 2,
                residual_cells: 150,
            }),
            ..options()
        };
        let solution = SearchLoop::new(&board, &options, StdRng::seed_from_u64(11)).run();
        validate_moves(&board, &solution.moves).unwrap();
        assert!(!solution.moves.is_empty());
    }
}
