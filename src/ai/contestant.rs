use std::fmt;

use super::minimax::best_move;
use crate::error::SearchError;
use crate::game::{Board, Player};

/// Search depth presets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Plies searched at this level
    pub fn depth(self) -> usize {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Who sits on each side of the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
pub enum GameMode {
    /// Two humans
    #[serde(rename = "pvp")]
    #[value(name = "pvp")]
    PlayerVsPlayer,
    /// Human as player 1, computer as player 2
    #[default]
    #[serde(rename = "pva")]
    #[value(name = "pva")]
    PlayerVsComputer,
    /// Computer on both sides
    #[serde(rename = "ava")]
    #[value(name = "ava")]
    ComputerVsComputer,
}

impl GameMode {
    /// Contestants for player 1 and player 2
    pub fn contestants(self, depth: usize) -> [Contestant; 2] {
        let computer = Contestant::Automated { depth };
        match self {
            GameMode::PlayerVsPlayer => [Contestant::Human, Contestant::Human],
            GameMode::PlayerVsComputer => [Contestant::Human, computer],
            GameMode::ComputerVsComputer => [computer, computer],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "Player vs Player",
            GameMode::PlayerVsComputer => "Player vs Computer",
            GameMode::ComputerVsComputer => "Computer vs Computer",
        }
    }
}

/// One side of the game: a human whose column comes from the front end, or
/// the minimax search at a fixed depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contestant {
    Human,
    Automated { depth: usize },
}

impl Contestant {
    pub fn automated(difficulty: Difficulty) -> Self {
        Contestant::Automated {
            depth: difficulty.depth(),
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Contestant::Human)
    }

    /// Column this contestant wants to play, or `None` for a human.
    pub fn propose(&self, board: &Board, player: Player) -> Result<Option<usize>, SearchError> {
        match *self {
            Contestant::Human => Ok(None),
            Contestant::Automated { depth } => best_move(board, depth, player).map(Some),
        }
    }
}

impl fmt::Display for Contestant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contestant::Human => write!(f, "Human"),
            Contestant::Automated { depth } => write!(f, "Computer (depth {depth})"),
        }
    }
}
