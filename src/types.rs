//! Core domain types for tic-tac-toe.

use crate::action::{Move, MoveError};
use serde::{Deserialize, Serialize};

/// Player in the game.
///
/// X is the human/maximizing side, O the computer/minimizing side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first by default).
    X,
    /// Player O (goes second by default).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board, addressed by 0-indexed (row, column) pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given coordinates, or `None` if out of bounds.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        Self::index(mv).map(|idx| self.cells[idx])
    }

    /// Checks if the cell at the given coordinates is empty.
    ///
    /// Out-of-bounds coordinates are reported as not empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Cell::Empty))
    }

    /// Applies a move for `player`.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfBounds` if either coordinate exceeds 2 and
    /// `MoveError::CellOccupied` if the target cell is not empty. On error
    /// the board is unchanged.
    pub fn apply_move(&mut self, mv: Move, player: Player) -> Result<(), MoveError> {
        let idx = Self::index(mv).ok_or(MoveError::OutOfBounds {
            row: mv.row,
            column: mv.column,
        })?;
        if self.cells[idx] != Cell::Empty {
            return Err(MoveError::CellOccupied(mv));
        }
        self.cells[idx] = Cell::Occupied(player);
        Ok(())
    }

    /// Returns all empty coordinates in row-major order.
    ///
    /// The order is fixed (row 0..2, then column 0..2 within each row); the
    /// solver relies on it for first-found tie-breaking.
    pub fn empty_cells(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..3 {
            for column in 0..3 {
                let mv = Move::new(row, column);
                if self.is_empty(mv) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// Checks whether any cell is still empty.
    pub fn has_moves_left(&self) -> bool {
        self.cells.iter().any(|&cell| cell == Cell::Empty)
    }

    /// Returns all cells as a slice, row-major.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Places a mark without validation. Callers guarantee `mv` is in bounds.
    pub(crate) fn place(&mut self, mv: Move, player: Player) {
        let idx = Self::index(mv).expect("place called with in-bounds coordinates");
        self.cells[idx] = Cell::Occupied(player);
    }

    /// Clears a cell without validation. Callers guarantee `mv` is in bounds.
    pub(crate) fn clear(&mut self, mv: Move) {
        let idx = Self::index(mv).expect("clear called with in-bounds coordinates");
        self.cells[idx] = Cell::Empty;
    }

    fn index(mv: Move) -> Option<usize> {
        if mv.row > 2 || mv.column > 2 {
            return None;
        }
        Some(mv.row as usize * 3 + mv.column as usize)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for column in 0..3 {
                let symbol = match self.cells[row * 3 + column] {
                    Cell::Empty => ".".to_string(),
                    Cell::Occupied(player) => player.to_string(),
                };
                f.write_str(&symbol)?;
                if column < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Current outcome of a game, derived from the board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win for the given player.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameOutcome {
    /// Checks whether the game has ended.
    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }
}
