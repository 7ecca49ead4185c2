//! Four-in-a-row detection. Every check takes the mark to test explicitly.

use super::{Board, Player};

/// Line directions as (row step, column step): horizontal, vertical,
/// diagonal up-right, diagonal down-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

const WIN_LENGTH: usize = 4;

/// Count consecutive `mark` cells starting one step away from (row, col).
fn count_direction(
    board: &Board,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    mark: Player,
) -> usize {
    let cell = mark.to_cell();
    let mut count = 0;
    let mut r = row as isize + dr;
    let mut c = col as isize + dc;
    while r >= 0
        && c >= 0
        && (r as usize) < board.rows()
        && (c as usize) < board.columns()
        && board.get(r as usize, c as usize) == cell
    {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Check whether `mark` at (row, col) sits on a line of four or more.
///
/// The origin cell is counted as `mark` whether or not it is occupied, so
/// this also answers "would a piece here win".
pub fn has_four_in_a_row(board: &Board, row: usize, col: usize, mark: Player) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + count_direction(board, row, col, dr, dc, mark)
            + count_direction(board, row, col, -dr, -dc, mark)
            >= WIN_LENGTH
    })
}

/// Cells of the first completed line through (row, col), ordered along
/// the line direction.
pub fn winning_line(
    board: &Board,
    row: usize,
    col: usize,
    mark: Player,
) -> Option<Vec<(usize, usize)>> {
    for &(dr, dc) in &DIRECTIONS {
        let back = count_direction(board, row, col, -dr, -dc, mark);
        let forward = count_direction(board, row, col, dr, dc, mark);
        if 1 + back + forward >= WIN_LENGTH {
            let start_r = row as isize - dr * back as isize;
            let start_c = col as isize - dc * back as isize;
            let cells = (0..=(back + forward) as isize)
                .map(|i| ((start_r + dr * i) as usize, (start_c + dc * i) as usize))
                .collect();
            return Some(cells);
        }
    }
    None
}

/// Scan every occupied cell for a completed line of its own mark.
/// Returns the first winner in row-major order from the bottom row.
pub fn winner_of_board(board: &Board) -> Option<Player> {
    for row in 0..board.rows() {
        for col in 0..board.columns() {
            if let Some(player) = board.get(row, col).player() {
                if has_four_in_a_row(board, row, col, player) {
                    return Some(player);
                }
            }
        }
    }
    None
}
