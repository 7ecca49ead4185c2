use serde::Serialize;
use tracing::{debug, info};

use super::board::{Board, BoardError};
use super::win::winning_line;
use super::Player;
use crate::ai::{AiEngine, Difficulty};
use crate::error::SessionError;

/// Reason a move was rejected. The session is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column is out of range")]
    InvalidColumn,
    #[error("game is already over")]
    GameOver,
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// Game goes on with `next` to move.
    Continued { next: Player },
    /// `player` completed a line; `cells` are (row, column) pairs of that line.
    Won {
        player: Player,
        cells: Vec<(usize, usize)>,
    },
    Drawn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "player", rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Drawn,
}

/// Which mark the computer controls and how strongly it plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AiSeat {
    pub mark: Player,
    pub difficulty: Difficulty,
}

/// Read-only snapshot for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub board: Board,
    pub current_player: Player,
    pub is_over: bool,
    pub status: GameStatus,
    pub move_count: usize,
}

/// Turn state machine for one game. Owns the board.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    status: GameStatus,
    moves: Vec<usize>,
    ai_seat: Option<AiSeat>,
}

impl GameSession {
    /// Create a session on an empty board of the given size
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        Ok(Self::with_board(Board::new(rows, columns)?))
    }

    /// Create a session on the classic 6x7 board
    pub fn standard() -> Self {
        Self::with_board(Board::standard())
    }

    fn with_board(board: Board) -> Self {
        GameSession {
            board,
            current_player: Player::PlayerOne, // Player one starts
            status: GameStatus::InProgress,
            moves: Vec::new(),
            ai_seat: None,
        }
    }

    /// Hand one of the marks to the computer
    pub fn with_ai(mut self, seat: AiSeat) -> Self {
        self.ai_seat = Some(seat);
        self
    }

    pub fn ai_seat(&self) -> Option<AiSeat> {
        self.ai_seat
    }

    /// True when an AI seat is configured, the game is live, and it is the AI's move
    pub fn is_ai_turn(&self) -> bool {
        !self.is_over()
            && self
                .ai_seat
                .is_some_and(|seat| seat.mark == self.current_player)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Columns played so far, in order
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            board: self.board.clone(),
            current_player: self.current_player,
            is_over: self.is_over(),
            status: self.status,
            move_count: self.moves.len(),
        }
    }

    /// Drop the current player's piece into `column`.
    pub fn attempt_move(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if column >= self.board.columns() {
            return Err(MoveError::InvalidColumn);
        }
        let row = self
            .board
            .lowest_empty_row(column)
            .ok_or(MoveError::ColumnFull)?;

        let player = self.current_player;
        self.board.place(row, column, player);
        self.moves.push(column);
        debug!(player = player.name(), row, column, "piece placed");

        // A win on the last empty cell is still a win
        if let Some(cells) = winning_line(&self.board, row, column, player) {
            self.status = GameStatus::Won(player);
            info!(player = player.name(), moves = self.moves.len(), "game won");
            return Ok(MoveOutcome::Won { player, cells });
        }

        if self.board.is_full() {
            self.status = GameStatus::Drawn;
            info!(moves = self.moves.len(), "game drawn");
            return Ok(MoveOutcome::Drawn);
        }

        self.current_player = player.other();
        Ok(MoveOutcome::Continued {
            next: self.current_player,
        })
    }

    /// Ask `engine` for the AI seat's move and play it.
    pub fn play_ai_turn(&mut self, engine: &mut AiEngine) -> Result<MoveOutcome, SessionError> {
        let seat = self.ai_seat.ok_or(SessionError::NoAiSeat)?;
        if self.is_over() {
            return Err(MoveError::GameOver.into());
        }
        if seat.mark != self.current_player {
            return Err(SessionError::NotAiTurn);
        }
        let column =
            engine.select_move(&self.board, seat.mark, seat.mark.other(), seat.difficulty)?;
        Ok(self.attempt_move(column)?)
    }

    /// Start over on a fresh board of the same size. The AI seat is kept.
    pub fn restart(&mut self) {
        let rows = self.board.rows();
        let columns = self.board.columns();
        self.board = Board::new(rows, columns).unwrap_or_default();
        self.current_player = Player::PlayerOne;
        self.status = GameStatus::InProgress;
        self.moves = Vec::new();
        info!(rows, columns, "session ready");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::standard()
    }
}
