//! Computer opponents: the agent trait, the window heuristic, minimax search
//! with alpha-beta pruning, and the random picker used by the easier tiers.

mod agent;
mod difficulty;
pub mod heuristic;
pub mod minimax;
mod random;

pub use agent::Agent;
pub use difficulty::Difficulty;
pub use heuristic::{evaluate_window, score_position, Heuristic, WindowHeuristic};
pub use minimax::{
    choose_move_minimax, minimax, MinimaxAgent, SearchOptions, SearchResult, SearchStats,
    TieBreak, DEFAULT_DEPTH, WIN_SCORE,
};
pub use random::{choose_move_random, RandomAgent};
