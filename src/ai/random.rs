use rand::Rng;

use crate::game::Board;

/// Pick uniformly among the columns that can still take a piece.
pub fn random_column<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let legal = board.legal_columns();
    if legal.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..legal.len());
    Some(legal[idx])
}
