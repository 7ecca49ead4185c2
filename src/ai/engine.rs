use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AiConfig;
use crate::error::AiError;
use crate::game::{Board, Player};

use super::greedy::greedy_column;
use super::minimax::Minimax;
use super::random::random_column;

/// Which strategy the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal column.
    Easy,
    /// Win, else block, else center, else random.
    #[default]
    Medium,
    /// Minimax with alpha-beta pruning.
    Hard,
}

impl Difficulty {
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty '{0}' (expected 'easy', 'medium', or 'hard')")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Column picker for the computer player.
///
/// The engine never touches the caller's board: every strategy runs on a
/// private copy.
pub struct AiEngine {
    rng: StdRng,
    minimax: Minimax,
}

impl AiEngine {
    pub fn new() -> Self {
        AiEngine {
            rng: StdRng::from_os_rng(),
            minimax: Minimax::default(),
        }
    }

    /// Deterministic engine for tests and reproducible arena runs
    pub fn with_seed(seed: u64) -> Self {
        AiEngine {
            rng: StdRng::seed_from_u64(seed),
            minimax: Minimax::default(),
        }
    }

    pub fn from_config(config: &AiConfig) -> Self {
        let engine = match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        };
        engine.with_minimax(Minimax::new(config.depth).pruning(config.pruning))
    }

    /// Replace the search used for [`Difficulty::Hard`]
    pub fn with_minimax(mut self, minimax: Minimax) -> Self {
        self.minimax = minimax;
        self
    }

    pub fn search_depth(&self) -> usize {
        self.minimax.depth()
    }

    /// Choose a column for `ai` on `board`.
    ///
    /// Fails with [`AiError::NoLegalMoves`] when the board is full.
    pub fn select_move(
        &mut self,
        board: &Board,
        ai: Player,
        human: Player,
        difficulty: Difficulty,
    ) -> Result<usize, AiError> {
        if board.is_full() {
            return Err(AiError::NoLegalMoves);
        }

        let mut scratch = board.clone();
        let column = match difficulty {
            Difficulty::Easy => random_column(&scratch, &mut self.rng),
            Difficulty::Medium => greedy_column(&mut scratch, ai, human, &mut self.rng),
            Difficulty::Hard => self
                .minimax
                .best_column(&mut scratch, ai, human)
                .map(|(col, score)| {
                    debug!(column = col, score, depth = self.minimax.depth(), "minimax result");
                    col
                }),
        }
        .ok_or(AiError::NoLegalMoves)?;

        debug_assert_eq!(&scratch, board, "search left a simulated piece behind");
        debug!(player = ai.name(), %difficulty, column, "ai selected move");
        Ok(column)
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameSession, GameStatus, MoveOutcome};

    const ONE: Player = Player::PlayerOne;
    const TWO: Player = Player::PlayerTwo;
    const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[test]
    fn parses_difficulty() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("expert".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn board_is_unchanged_by_selection() {
        let mut board = Board::standard();
        for (i, col) in [3, 3, 2, 4, 4, 1, 5].into_iter().enumerate() {
            let mark = if i % 2 == 0 { ONE } else { TWO };
            board.drop_piece(col, mark).unwrap();
        }
        let before = board.clone();
        let mut engine = AiEngine::with_seed(11);
        for difficulty in ALL {
            let col = engine.select_move(&board, TWO, ONE, difficulty).unwrap();
            assert!(!board.is_column_full(col));
            assert_eq!(board, before, "{difficulty} changed the board");
        }
    }

    #[test]
    fn full_board_is_an_error() {
        let mut board = Board::new(4, 4).unwrap();
        for col in 0..4 {
            for _ in 0..4 {
                board.drop_piece(col, ONE).unwrap();
            }
        }
        let mut engine = AiEngine::with_seed(0);
        for difficulty in ALL {
            assert_eq!(
                engine.select_move(&board, TWO, ONE, difficulty),
                Err(AiError::NoLegalMoves)
            );
        }
    }

    #[test]
    fn medium_blocks_horizontal_three() {
        // Player one: (0,0) (0,1) (0,2). Player two answered high on column 6.
        let mut session = GameSession::standard();
        for (p1, p2) in [(0, 6), (1, 6)] {
            session.attempt_move(p1).unwrap();
            session.attempt_move(p2).unwrap();
        }
        session.attempt_move(2).unwrap();

        let mut engine = AiEngine::with_seed(5);
        let col = engine
            .select_move(session.board(), TWO, ONE, Difficulty::Medium)
            .unwrap();
        assert_eq!(col, 3);
    }

    #[test]
    fn hard_takes_immediate_win() {
        let mut board = Board::standard();
        for col in [1, 2, 3] {
            board.drop_piece(col, TWO).unwrap();
            board.drop_piece(col, ONE).unwrap();
        }
        for depth in 1..=4 {
            let mut engine = AiEngine::with_seed(0).with_minimax(Minimax::new(depth));
            // (0,0) and (0,4) both win; ascending order finds column 0 first
            assert_eq!(
                engine.select_move(&board, TWO, ONE, Difficulty::Hard),
                Ok(0),
                "depth {depth}"
            );
        }
    }

    #[test]
    fn seeded_engines_agree() {
        let board = Board::standard();
        let mut a = AiEngine::with_seed(42);
        let mut b = AiEngine::with_seed(42);
        for _ in 0..10 {
            assert_eq!(
                a.select_move(&board, ONE, TWO, Difficulty::Easy),
                b.select_move(&board, ONE, TWO, Difficulty::Easy)
            );
        }
    }

    #[test]
    fn from_config_uses_depth() {
        let config = AiConfig {
            depth: 2,
            pruning: false,
            seed: Some(1),
        };
        assert_eq!(AiEngine::from_config(&config).search_depth(), 2);
    }

    #[test]
    fn hard_beats_easy() {
        let games = 6;
        let mut hard_wins = 0;
        for seed in 0..games {
            let mut engine = AiEngine::with_seed(seed);
            let mut session = GameSession::standard();
            while !session.is_over() {
                let mover = session.current_player();
                let difficulty = if mover == ONE { Difficulty::Hard } else { Difficulty::Easy };
                let col = engine
                    .select_move(session.board(), mover, mover.other(), difficulty)
                    .unwrap();
                if let MoveOutcome::Won { player, .. } = session.attempt_move(col).unwrap() {
                    assert_eq!(session.status(), GameStatus::Won(player));
                }
            }
            if session.status() == GameStatus::Won(ONE) {
                hard_wins += 1;
            }
        }
        assert!(hard_wins >= 5, "hard won only {hard_wins}/{games}");
    }
}
