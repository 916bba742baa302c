use std::fmt;
use std::str::FromStr;

use super::player::Player;
use crate::error::{BoardParseError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Pieces in a line needed to win.
pub const CONNECT: usize = 4;
pub const CENTER_COL: usize = COLS / 2;

/// `(row, col)`, row 0 is the top.
pub type Coord = (usize, usize);
/// A window of `CONNECT` consecutive cells along one orientation.
pub type Line = [Coord; CONNECT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    last_move: Option<Coord>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            last_move: None,
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Where the most recent piece landed, if any
    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        !self.cells[0][col].is_empty()
    }

    /// Columns that can still take a piece, in ascending order
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }

        // Top cell is empty, so a free row always exists
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col].is_empty())
            .ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = player.to_cell();
        self.last_move = Some((row, col));
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of pieces on the board
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Clear every cell and forget the last move
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Owner of the first complete line in scan order, if any.
    ///
    /// Recomputed from the full grid on every call.
    pub fn check_winner(&self) -> Option<Player> {
        lines().find_map(|line| self.line_owner(&line))
    }

    /// The first complete line in the same scan order as
    /// [`check_winner`](Self::check_winner).
    pub fn winning_positions(&self) -> Option<Line> {
        lines().find(|line| self.line_owner(line).is_some())
    }

    /// The player holding every cell of `line`, if one does
    fn line_owner(&self, line: &Line) -> Option<Player> {
        let (r0, c0) = line[0];
        let owner = self.cells[r0][c0].player()?;
        line[1..]
            .iter()
            .all(|&(r, c)| self.cells[r][c] == Cell::Occupied(owner))
            .then_some(owner)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Every window on the board, in scan order: horizontal (row-major),
/// vertical (column-major), diagonal `\` then diagonal `/`, each diagonal
/// family from the top-left.
pub fn lines() -> impl Iterator<Item = Line> {
    let horizontal = (0..ROWS)
        .flat_map(|row| (0..=COLS - CONNECT).map(move |col| line(row, col, 0, 1)));
    let vertical = (0..COLS)
        .flat_map(|col| (0..=ROWS - CONNECT).map(move |row| line(row, col, 1, 0)));
    let diagonal_down = (0..=ROWS - CONNECT)
        .flat_map(|row| (0..=COLS - CONNECT).map(move |col| line(row, col, 1, 1)));
    let diagonal_up = (CONNECT - 1..ROWS)
        .flat_map(|row| (0..=COLS - CONNECT).map(move |col| line(row, col, -1, 1)));

    horizontal
        .chain(vertical)
        .chain(diagonal_down)
        .chain(diagonal_up)
}

fn line(row: usize, col: usize, dr: isize, dc: isize) -> Line {
    std::array::from_fn(|i| {
        let step = i as isize;
        (
            (row as isize + dr * step) as usize,
            (col as isize + dc * step) as usize,
        )
    })
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "+---".repeat(COLS) + "+";
        writeln!(f, "{separator}")?;
        for row in &self.cells {
            write!(f, "|")?;
            for cell in row {
                let symbol = cell.player().map_or('.', Player::symbol);
                write!(f, " {symbol} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{separator}")?;
        }
        let labels: Vec<String> = (0..COLS).map(|col| col.to_string()).collect();
        write!(f, "  {}", labels.join("   "))
    }
}

/// Parses six lines of seven cells, top row first: `.` empty, `X`/`1`
/// player one, `O`/`2` player two. Whitespace inside a row is ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != ROWS {
            return Err(BoardParseError::RowCount { found: rows.len() });
        }

        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.chars().filter(|ch| !ch.is_whitespace()).collect();
            if symbols.len() != COLS {
                return Err(BoardParseError::RowWidth {
                    row,
                    found: symbols.len(),
                });
            }
            for (col, ch) in symbols.into_iter().enumerate() {
                board.cells[row][col] = match ch {
                    '.' => Cell::Empty,
                    'X' | 'x' | '1' => Cell::Occupied(Player::One),
                    'O' | 'o' | '2' => Cell::Occupied(Player::Two),
                    _ => return Err(BoardParseError::UnknownCell { ch, row, col }),
                };
            }
        }

        for col in 0..COLS {
            for row in 0..ROWS - 1 {
                if !board.cells[row][col].is_empty() && board.cells[row + 1][col].is_empty() {
                    return Err(BoardParseError::Floating { row, col });
                }
            }
        }

        Ok(board)
    }
}
