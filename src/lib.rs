//! # Connect Four
//!
//! Rules engine and computer opponent for Connect Four on any board of at
//! least 4x4. The core is synchronous and presentation-agnostic: a
//! [`game::GameSession`] owns the board and accepts column drops, and an
//! [`ai::AiEngine`] picks columns for the computer at three difficulties.
//!
//! ## Modules
//!
//! - [`game`]: Board, players, win detection, turn state machine
//! - [`ai`]: Random, greedy and minimax strategies; window evaluator
//! - [`arena`]: Headless AI-vs-AI matches with result tallies
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
