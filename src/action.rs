//! First-class move types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They can be validated
//! independently of execution and serialized for replay.

use serde::{Deserialize, Serialize};

/// A move: the (row, column) coordinates of a target cell.
///
/// Coordinates are 0-indexed; valid moves have both in 0..=2. Out-of-range
/// values are representable on purpose so that validation happens at
/// application time, where the failure is reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Target row (0 = top).
    pub row: u8,
    /// Target column (0 = left).
    pub column: u8,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A coordinate lies outside the 3x3 grid.
    #[display("Coordinates ({}, {}) are out of bounds", row, column)]
    OutOfBounds {
        /// Offending row.
        row: u8,
        /// Offending column.
        column: u8,
    },

    /// The target cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Move),

    /// A move was requested on a board with no empty cells.
    #[display("No moves available")]
    NoMovesAvailable,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
