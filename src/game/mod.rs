//! Core Connect Four game logic: board representation, line detection, the
//! positional heuristic, and the turn controller.

mod board;
mod engine;
mod evaluator;
mod player;

pub use board::{lines, Board, Cell, Coord, Line, CENTER_COL, COLS, CONNECT, ROWS};
pub use engine::{GameEngine, GameOutcome, GameStatus, MoveOutcome};
pub use evaluator::score_position;
pub use player::Player;
