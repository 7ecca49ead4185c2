use crate::game::{winner_of_board, Board, Player};

use super::evaluator::{Evaluator, WindowEvaluator};

/// Base score of a decided position, before the remaining-depth bonus.
pub const WIN_SCORE: i32 = 1000;

pub const DEFAULT_DEPTH: usize = 4;

/// Depth-limited minimax with optional alpha-beta pruning.
///
/// Columns are searched in ascending order and the root keeps the first
/// column reaching the best score.
pub struct Minimax {
    depth: usize,
    pruning: bool,
    evaluator: Box<dyn Evaluator>,
}

impl Minimax {
    pub fn new(depth: usize) -> Self {
        Self::with_evaluator(depth, Box::new(WindowEvaluator))
    }

    pub fn with_evaluator(depth: usize, evaluator: Box<dyn Evaluator>) -> Self {
        Minimax {
            depth: depth.max(1),
            pruning: true,
            evaluator,
        }
    }

    /// Turn alpha-beta cutoffs on or off. Both settings pick a column of
    /// the same score; pruning only visits fewer nodes.
    pub fn pruning(mut self, enabled: bool) -> Self {
        self.pruning = enabled;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Best column for `ai` and its score, or `None` on a full board.
    ///
    /// The board is used as scratch space and is restored before returning.
    pub fn best_column(
        &self,
        board: &mut Board,
        ai: Player,
        human: Player,
    ) -> Option<(usize, i32)> {
        let mut best: Option<(usize, i32)> = None;
        let mut alpha = i32::MIN;

        for col in board.legal_columns() {
            let Some(score) = board.with_piece(col, ai, |b, _| {
                self.minimax(b, self.depth - 1, alpha, i32::MAX, false, ai, human)
            }) else {
                continue;
            };
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((col, score));
            }
            if self.pruning {
                alpha = alpha.max(score);
            }
        }

        best
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &self,
        board: &mut Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        ai: Player,
        human: Player,
    ) -> i32 {
        // Terminal check; faster wins and slower losses score higher
        match winner_of_board(board) {
            Some(winner) if winner == ai => return WIN_SCORE + depth as i32,
            Some(_) => return -WIN_SCORE - depth as i32,
            None => {}
        }

        if depth == 0 || board.is_full() {
            return self.evaluator.score(board, ai);
        }

        if maximizing {
            let mut best = i32::MIN;
            for col in board.legal_columns() {
                let Some(score) = board.with_piece(col, ai, |b, _| {
                    self.minimax(b, depth - 1, alpha, beta, false, ai, human)
                }) else {
                    continue;
                };
                best = best.max(score);
                if self.pruning {
                    alpha = alpha.max(score);
                    if beta <= alpha {
                        break;
                    }
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for col in board.legal_columns() {
                let Some(score) = board.with_piece(col, human, |b, _| {
                    self.minimax(b, depth - 1, alpha, beta, true, ai, human)
                }) else {
                    continue;
                };
                best = best.min(score);
                if self.pruning {
                    beta = beta.min(score);
                    if beta <= alpha {
                        break;
                    }
                }
            }
            best
        }
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}
