use std::fmt;

use log::{debug, info};

use super::{Board, Player};
use crate::ai::Contestant;
use crate::error::{MoveError, SearchError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Winner(player) => write!(f, "{player} wins!"),
            GameOutcome::Draw => write!(f, "Draw!"),
        }
    }
}

/// Where the turn controller stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingMove(Player),
    Finished(GameOutcome),
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game goes on with `next` to move.
    Continue { next: Player },
    Finished(GameOutcome),
}

/// Owns the live board and both contestants, and enforces strict turn
/// alternation starting with [`Player::One`].
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    contestants: [Contestant; 2],
    current: Player,
    outcome: Option<GameOutcome>,
}

impl GameEngine {
    pub fn new(first: Contestant, second: Contestant) -> Self {
        GameEngine {
            board: Board::new(),
            contestants: [first, second],
            current: Player::One,
            outcome: None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move. After the game ends this is the player who moved last.
    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn current_contestant(&self) -> &Contestant {
        self.contestant(self.current)
    }

    pub fn contestant(&self, player: Player) -> &Contestant {
        &self.contestants[player.index()]
    }

    pub fn status(&self) -> GameStatus {
        match self.outcome {
            Some(outcome) => GameStatus::Finished(outcome),
            None => GameStatus::AwaitingMove(self.current),
        }
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full), empty once the game is over
    pub fn valid_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.valid_moves()
    }

    /// Ask the contestant to move for a column. Humans answer `None`; their
    /// column has to come from the front end.
    pub fn propose_move(&self) -> Result<Option<usize>, SearchError> {
        if self.is_terminal() {
            return Ok(None);
        }
        self.current_contestant().propose(&self.board, self.current)
    }

    /// Drop a piece for the side to move.
    ///
    /// Illegal columns are rejected without touching the board or the turn.
    pub fn make_move(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current;
        let row = self.board.drop_piece(column, player)?;
        debug!("{player} dropped into column {column} (row {row})");

        let outcome = if let Some(winner) = self.board.check_winner() {
            Some(GameOutcome::Winner(winner))
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        match outcome {
            Some(outcome) => {
                info!("game over after {} moves: {outcome}", self.board.piece_count());
                self.outcome = Some(outcome);
                Ok(MoveOutcome::Finished(outcome))
            }
            None => {
                self.current = player.other();
                Ok(MoveOutcome::Continue { next: self.current })
            }
        }
    }

    /// Start a new round with the same contestants.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = Player::One;
        self.outcome = None;
        info!("new round started");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, ROWS};

    fn human_game() -> GameEngine {
        GameEngine::new(Contestant::Human, Contestant::Human)
    }

    #[test]
    fn test_initial_state() {
        let engine = human_game();
        assert_eq!(engine.current_player(), Player::One);
        assert_eq!(engine.status(), GameStatus::AwaitingMove(Player::One));
        assert!(!engine.is_terminal());
        assert_eq!(engine.valid_moves().len(), 7);
    }

    #[test]
    fn test_make_move_alternates() {
        let mut engine = human_game();
        assert_eq!(
            engine.make_move(3),
            Ok(MoveOutcome::Continue { next: Player::Two })
        );
        assert_eq!(engine.board().get(5, 3), Cell::Occupied(Player::One));
        assert_eq!(
            engine.make_move(3),
            Ok(MoveOutcome::Continue { next: Player::One })
        );
        assert_eq!(engine.board().get(4, 3), Cell::Occupied(Player::Two));
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut engine = human_game();
        assert_eq!(engine.make_move(7), Err(MoveError::InvalidColumn(7)));
        assert_eq!(engine.current_player(), Player::One);

        for _ in 0..ROWS {
            engine.make_move(0).unwrap();
        }
        let before = *engine.board();
        let player = engine.current_player();
        assert_eq!(engine.make_move(0), Err(MoveError::ColumnFull(0)));
        assert_eq!(*engine.board(), before);
        assert_eq!(engine.current_player(), player);
    }

    #[test]
    fn test_vertical_win() {
        let mut engine = human_game();
        for _ in 0..3 {
            engine.make_move(0).unwrap(); // Player 1
            engine.make_move(1).unwrap(); // Player 2
        }
        let result = engine.make_move(0).unwrap();

        let outcome = GameOutcome::Winner(Player::One);
        assert_eq!(result, MoveOutcome::Finished(outcome));
        assert_eq!(engine.status(), GameStatus::Finished(outcome));
        assert_eq!(engine.board().check_winner(), Some(Player::One));
        assert!(engine.valid_moves().is_empty());
        assert_eq!(engine.make_move(2), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw() {
        let mut engine = human_game();
        // Fills the grid with no four in a row anywhere
        let pattern = [
            3, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 4,
            4, 5, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6, 3,
        ];

        let (last, rest) = pattern.split_last().unwrap();
        for &col in rest {
            assert!(matches!(
                engine.make_move(col),
                Ok(MoveOutcome::Continue { .. })
            ));
        }
        assert_eq!(
            engine.make_move(*last),
            Ok(MoveOutcome::Finished(GameOutcome::Draw))
        );
        assert!(engine.board().is_full());
        assert_eq!(engine.board().check_winner(), None);
    }

    #[test]
    fn test_reset() {
        let mut engine = human_game();
        engine.make_move(2).unwrap();
        engine.make_move(4).unwrap();
        engine.make_move(2).unwrap();
        engine.reset();
        assert_eq!(*engine.board(), Board::new());
        assert_eq!(engine.status(), GameStatus::AwaitingMove(Player::One));
    }

    #[test]
    fn test_human_proposes_nothing() {
        let engine = human_game();
        assert_eq!(engine.propose_move(), Ok(None));
    }

    #[test]
    fn test_automated_game_completes() {
        let mut engine = GameEngine::new(
            Contestant::Automated { depth: 2 },
            Contestant::Automated { depth: 2 },
        );
        let mut turns = 0;
        while !engine.is_terminal() {
            let column = engine.propose_move().unwrap().unwrap();
            assert!(engine.valid_moves().contains(&column));
            engine.make_move(column).unwrap();
            turns += 1;
            assert!(turns <= 42);
        }
        assert!(engine.outcome().is_some());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(
            GameOutcome::Winner(Player::Two).to_string(),
            "Player 2 wins!"
        );
        assert_eq!(GameOutcome::Draw.to_string(), "Draw!");
    }
}
