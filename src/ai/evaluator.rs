use crate::game::{Board, Cell, Player};

/// Trait for scoring a non-terminal position from the AI's perspective.
/// Higher is better for `ai`.
pub trait Evaluator: Send {
    fn score(&self, board: &Board, ai: Player) -> i32;
}

/// Default evaluator: center-column control plus every 4-cell window on the
/// board, scored for both sides.
pub struct WindowEvaluator;

impl WindowEvaluator {
    const CENTER_WEIGHT: i32 = 3;

    fn score_window(own: usize, opp: usize, empty: usize) -> i32 {
        match (own, opp, empty) {
            (4, 0, 0) => 100,
            (3, 0, 1) => 5,
            (2, 0, 2) => 2,
            (0, 4, 0) => -100,
            (0, 3, 1) => -5,
            (0, 2, 2) => -2,
            _ => 0,
        }
    }

    /// Score the window of four cells starting at (row, col) stepping by (dr, dc).
    fn window(board: &Board, own_cell: Cell, row: usize, col: usize, dr: isize, dc: isize) -> i32 {
        let mut own = 0;
        let mut opp = 0;
        let mut empty = 0;
        for i in 0..4 {
            let r = (row as isize + dr * i) as usize;
            let c = (col as isize + dc * i) as usize;
            match board.get(r, c) {
                Cell::Empty => empty += 1,
                cell if cell == own_cell => own += 1,
                _ => opp += 1,
            }
        }
        Self::score_window(own, opp, empty)
    }
}

impl Evaluator for WindowEvaluator {
    fn score(&self, board: &Board, ai: Player) -> i32 {
        let own_cell = ai.to_cell();
        let rows = board.rows();
        let cols = board.columns();
        let mut score = 0;

        // Center column bonus
        let center = board.center_column();
        for row in 0..rows {
            if board.get(row, center) == own_cell {
                score += Self::CENTER_WEIGHT;
            }
        }

        // Horizontal
        for row in 0..rows {
            for col in 0..=cols - 4 {
                score += Self::window(board, own_cell, row, col, 0, 1);
            }
        }

        // Vertical
        for col in 0..cols {
            for row in 0..=rows - 4 {
                score += Self::window(board, own_cell, row, col, 1, 0);
            }
        }

        // Diagonal (bottom-left to top-right)
        for row in 0..=rows - 4 {
            for col in 0..=cols - 4 {
                score += Self::window(board, own_cell, row, col, 1, 1);
            }
        }

        // Diagonal (top-left to bottom-right)
        for row in 3..rows {
            for col in 0..=cols - 4 {
                score += Self::window(board, own_cell, row, col, -1, 1);
            }
        }

        score
    }
}
