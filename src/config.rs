use std::path::Path;

use tracing::warn;

use crate::ai::{Difficulty, DEFAULT_DEPTH};
use crate::error::ConfigError;
use crate::game::{COLS, MIN_DIMENSION, ROWS};

/// Deepest search the config accepts.
pub const MAX_DEPTH: usize = 10;

/// Board dimensions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: ROWS,
            columns: COLS,
        }
    }
}

/// AI engine settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Minimax search depth in plies
    pub depth: usize,
    /// Alpha-beta cutoffs; off gives plain minimax
    pub pruning: bool,
    /// RNG seed for Easy/Medium; absent means OS entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            depth: DEFAULT_DEPTH,
            pruning: true,
            seed: None,
        }
    }
}

/// AI-vs-AI match settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    /// Difficulty playing the first seat (player one)
    pub first: Difficulty,
    /// Difficulty playing the second seat (player two)
    pub second: Difficulty,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 10,
            first: Difficulty::Hard,
            second: Difficulty::Medium,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub ai: AiConfig,
    pub arena: ArenaConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.rows must be >= {MIN_DIMENSION}"
            )));
        }
        if self.board.columns < MIN_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.columns must be >= {MIN_DIMENSION}"
            )));
        }
        if self.ai.depth == 0 || self.ai.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "ai.depth must be in [1, {MAX_DEPTH}]"
            )));
        }
        if self.arena.games == 0 {
            return Err(ConfigError::Validation(
                "arena.games must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
