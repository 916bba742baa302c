use log::debug;

use crate::error::SearchError;
use crate::game::{Board, Player, CENTER_COL};

/// Score of a decided game. Dominates any heuristic sum.
pub const WIN_SCORE: i32 = 1_000_000;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Default heuristic: center control plus four-cell window scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        board.score_position(player)
    }
}

/// Legal columns, center-first. Equal distances keep the left column first.
pub fn ordered_moves(board: &Board) -> Vec<usize> {
    let mut moves = board.valid_moves();
    moves.sort_by_key(|&col| col.abs_diff(CENTER_COL));
    moves
}

/// What the root search settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub column: usize,
    pub score: i32,
    /// Positions visited, root children included.
    pub nodes: u64,
}

/// Depth-limited minimax with alpha-beta pruning.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            depth,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent { depth, heuristic }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Pick the best column for `player`. Depth 0 searches one ply.
    pub fn search(&self, board: &Board, player: Player) -> Result<SearchReport, SearchError> {
        let moves = ordered_moves(board);
        let first = *moves.first().ok_or(SearchError::EmptyMoveSet)?;
        let depth = self.depth.max(1);

        let mut nodes = 0;
        let mut best_column = first;
        let mut best_score = i32::MIN;

        for col in moves {
            let mut child = *board;
            if child.drop_piece(col, player).is_err() {
                continue;
            }
            // A child that cannot beat the running best fails low, which the
            // strict comparison below ignores.
            let score = self.minimax(
                &child,
                depth - 1,
                best_score,
                i32::MAX,
                false,
                player,
                &mut nodes,
            );
            if score > best_score {
                best_score = score;
                best_column = col;
            }
        }

        debug!(
            "{player} depth {depth}: column {best_column} score {best_score} ({nodes} nodes)"
        );
        Ok(SearchReport {
            column: best_column,
            score: best_score,
            nodes,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        root: Player,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;

        let winner = board.check_winner();
        if depth == 0 || winner.is_some() || board.is_full() {
            // Depth cutoff and a full board both fall through to the heuristic
            return match winner {
                Some(player) if player == root => WIN_SCORE,
                Some(_) => -WIN_SCORE,
                None => self.heuristic.evaluate(board, root),
            };
        }

        let mover = if maximizing { root } else { root.other() };
        let mut value = if maximizing { i32::MIN } else { i32::MAX };

        for col in ordered_moves(board) {
            let mut child = *board;
            if child.drop_piece(col, mover).is_err() {
                continue;
            }
            let score = self.minimax(&child, depth - 1, alpha, beta, !maximizing, root, nodes);
            if maximizing {
                value = value.max(score);
                alpha = alpha.max(value);
            } else {
                value = value.min(score);
                beta = beta.min(value);
            }
            if alpha >= beta {
                break;
            }
        }

        value
    }
}

/// Best column for `player` searching `depth` plies with the default
/// heuristic.
pub fn best_move(board: &Board, depth: usize, player: Player) -> Result<usize, SearchError> {
    MinimaxAgent::new(depth)
        .search(board, player)
        .map(|report| report.column)
}
