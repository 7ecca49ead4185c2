//! Core Connect Four game logic: board, players, win detection, and the turn
//! state machine.

mod board;
mod player;
mod session;
pub mod win;

pub use board::{Board, BoardError, Cell, COLS, MIN_DIMENSION, ROWS};
pub use player::Player;
pub use session::{AiSeat, GameSession, GameStatus, MoveError, MoveOutcome, SessionView};
pub use win::{has_four_in_a_row, winner_of_board, winning_line};
