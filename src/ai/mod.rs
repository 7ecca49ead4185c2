//! Computer opponent: three strategies behind one engine, plus the
//! positional evaluator used by the search.

mod engine;
pub mod evaluator;
pub mod greedy;
pub mod minimax;
pub mod random;

pub use engine::{AiEngine, Difficulty, ParseDifficultyError};
pub use evaluator::{Evaluator, WindowEvaluator};
pub use minimax::{Minimax, DEFAULT_DEPTH, WIN_SCORE};
