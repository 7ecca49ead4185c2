//! Headless AI-vs-AI matches played through [`GameSession`].

use serde::Serialize;
use tracing::{debug, info};

use crate::ai::{AiEngine, Difficulty};
use crate::config::ArenaConfig;
use crate::error::SessionError;
use crate::game::{Board, BoardError, GameSession, GameStatus, Player};

/// Result of a single game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub winner: Option<Player>,
    pub moves: Vec<usize>,
    pub final_board: Board,
}

impl GameRecord {
    pub fn game_length(&self) -> usize {
        self.moves.len()
    }
}

/// Tally of a series of games between two difficulties.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArenaReport {
    pub first: Difficulty,
    pub second: Difficulty,
    pub games: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
    pub total_moves: usize,
}

impl ArenaReport {
    fn new(first: Difficulty, second: Difficulty) -> Self {
        ArenaReport {
            first,
            second,
            ..Default::default()
        }
    }

    pub fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        self.total_moves += game.game_length();
        match game.winner {
            Some(Player::PlayerOne) => self.first_wins += 1,
            Some(Player::PlayerTwo) => self.second_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Win rate of the first seat.
    pub fn first_win_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.first_wins as f32 / self.games as f32
    }

    pub fn average_game_length(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.games as f32
    }
}

/// Plays complete games with one engine driving both seats.
pub struct Arena {
    fresh: GameSession,
    engine: AiEngine,
}

impl Arena {
    pub fn new(rows: usize, columns: usize, engine: AiEngine) -> Result<Self, BoardError> {
        Ok(Arena {
            fresh: GameSession::new(rows, columns)?,
            engine,
        })
    }

    /// Play one game; `first` moves for player one.
    pub fn play_game(
        &mut self,
        first: Difficulty,
        second: Difficulty,
    ) -> Result<GameRecord, SessionError> {
        let mut session = self.fresh.clone();

        while !session.is_over() {
            let mover = session.current_player();
            let difficulty = match mover {
                Player::PlayerOne => first,
                Player::PlayerTwo => second,
            };
            let column = self
                .engine
                .select_move(session.board(), mover, mover.other(), difficulty)?;
            let outcome = session.attempt_move(column)?;
            debug!(player = mover.name(), column, ?outcome, "arena move");
        }

        let winner = match session.status() {
            GameStatus::Won(player) => Some(player),
            _ => None,
        };
        Ok(GameRecord {
            winner,
            moves: session.moves().to_vec(),
            final_board: session.board().clone(),
        })
    }

    /// Play `config.games` games and tally them. `on_game` sees every
    /// finished game with its 1-based index.
    pub fn run(
        &mut self,
        config: &ArenaConfig,
        mut on_game: impl FnMut(usize, &GameRecord),
    ) -> Result<ArenaReport, SessionError> {
        let mut report = ArenaReport::new(config.first, config.second);
        info!(
            games = config.games,
            first = %config.first,
            second = %config.second,
            rows = self.fresh.board().rows(),
            columns = self.fresh.board().columns(),
            "arena started"
        );

        for index in 1..=config.games {
            let record = self.play_game(config.first, config.second)?;
            report.record(&record);
            on_game(index, &record);
        }

        info!(
            first_wins = report.first_wins,
            second_wins = report.second_wins,
            draws = report.draws,
            "arena finished"
        );
        Ok(report)
    }
}
