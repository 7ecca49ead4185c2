use rand::Rng;

use crate::game::{has_four_in_a_row, Board, Player};

use super::random::random_column;

/// First column, ascending, where dropping `mark` completes a line.
pub fn winning_column(board: &mut Board, mark: Player) -> Option<usize> {
    board.legal_columns().into_iter().find(|&col| {
        board
            .with_piece(col, mark, |b, row| has_four_in_a_row(b, row, col, mark))
            .unwrap_or(false)
    })
}

/// One-ply greedy choice: win now, else block the opponent's immediate win,
/// else take the center, else play at random.
pub fn greedy_column<R: Rng + ?Sized>(
    board: &mut Board,
    ai: Player,
    human: Player,
    rng: &mut R,
) -> Option<usize> {
    if let Some(col) = winning_column(board, ai) {
        return Some(col);
    }
    if let Some(col) = winning_column(board, human) {
        return Some(col);
    }
    let center = board.center_column();
    if !board.is_column_full(center) {
        return Some(center);
    }
    random_column(board, rng)
}
