//! Computer opponent: minimax search with alpha-beta pruning, the pluggable
//! heuristic seam, and the contestant kinds the turn controller drives.

mod contestant;
pub mod minimax;

pub use contestant::{Contestant, Difficulty, GameMode};
pub use minimax::{best_move, Heuristic, MinimaxAgent, SearchReport, WindowHeuristic, WIN_SCORE};
