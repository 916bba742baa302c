//! Static positional heuristic over four-cell windows.

use super::board::{lines, Board, Cell, Line, CENTER_COL, ROWS};
use super::player::Player;

pub const CENTER_WEIGHT: i32 = 3;
pub const FOUR_WEIGHT: i32 = 100;
pub const THREE_WEIGHT: i32 = 5;
pub const TWO_WEIGHT: i32 = 2;
pub const OPPONENT_THREE_PENALTY: i32 = -4;

/// Score one window from `own`'s point of view.
fn score_window(own: usize, opp: usize, empty: usize) -> i32 {
    let mut score = if own == 4 {
        FOUR_WEIGHT
    } else if own == 3 && empty == 1 {
        THREE_WEIGHT
    } else if own == 2 && empty == 2 {
        TWO_WEIGHT
    } else {
        0
    };
    if opp == 3 && empty == 1 {
        score += OPPONENT_THREE_PENALTY;
    }
    score
}

fn count_window(board: &Board, line: &Line, player: Player) -> (usize, usize, usize) {
    let mut own = 0;
    let mut opp = 0;
    let mut empty = 0;
    for &(row, col) in line {
        match board.get(row, col) {
            Cell::Empty => empty += 1,
            Cell::Occupied(p) if p == player => own += 1,
            Cell::Occupied(_) => opp += 1,
        }
    }
    (own, opp, empty)
}

/// Center-column bonus plus the sum of all window scores for `player`.
pub fn score_position(board: &Board, player: Player) -> i32 {
    let center = (0..ROWS)
        .filter(|&row| board.get(row, CENTER_COL) == Cell::Occupied(player))
        .count() as i32;

    let windows: i32 = lines()
        .map(|line| {
            let (own, opp, empty) = count_window(board, &line, player);
            score_window(own, opp, empty)
        })
        .sum();

    center * CENTER_WEIGHT + windows
}

impl Board {
    /// Heuristic value of this position for `player`.
    pub fn score_position(&self, player: Player) -> i32 {
        score_position(self, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_scores_zero() {
        let board = Board::new();
        assert_eq!(board.score_position(Player::One), 0);
        assert_eq!(board.score_position(Player::Two), 0);
    }

    #[test]
    fn single_center_piece() {
        let mut board = Board::new();
        board.drop_piece(3, Player::One).unwrap();
        // Center bonus only; a lone piece completes no scoring window
        assert_eq!(board.score_position(Player::One), 3);
        assert_eq!(board.score_position(Player::Two), 0);
    }

    #[test]
    fn center_beats_edge() {
        let mut center = Board::new();
        center.drop_piece(3, Player::One).unwrap();
        let mut edge = Board::new();
        edge.drop_piece(0, Player::One).unwrap();
        assert!(center.score_position(Player::One) > edge.score_position(Player::One));
    }

    #[test]
    fn two_in_a_row_windows() {
        let mut board = Board::new();
        board.drop_piece(0, Player::One).unwrap();
        board.drop_piece(1, Player::One).unwrap();
        // Only bottom-row window [0..4) holds both pieces
        assert_eq!(board.score_position(Player::One), 2);
    }

    #[test]
    fn three_in_a_row_and_penalty() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Player::One).unwrap();
        }
        // Window [0..4): 3 own + 1 empty = 5, window [1..5): 2 own + 2 empty = 2
        assert_eq!(board.score_position(Player::One), 7);
        // The same threat costs the opponent 4
        assert_eq!(board.score_position(Player::Two), -4);
    }

    #[test]
    fn completed_four_scores_hundred() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(0, Player::Two).unwrap();
        }
        // Vertical windows in col 0: rows 2..6 (4 own), rows 1..5 (3 own +
        // 1 empty), rows 0..4 (2 own + 2 empty)
        assert_eq!(board.score_position(Player::Two), 100 + 5 + 2);
    }

    #[test]
    fn window_scoring_table() {
        assert_eq!(score_window(4, 0, 0), 100);
        assert_eq!(score_window(3, 0, 1), 5);
        assert_eq!(score_window(2, 0, 2), 2);
        assert_eq!(score_window(0, 3, 1), -4);
        assert_eq!(score_window(1, 3, 0), 0);
        assert_eq!(score_window(2, 1, 1), 0);
    }
}
