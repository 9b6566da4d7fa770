//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state. Rules are separated from
//! board storage so they can be composed and tested independently.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::types::{Board, GameOutcome};
use tracing::instrument;

/// Evaluates the board: a completed line wins, a full board with no line
/// is a draw, anything else is still in progress.
///
/// Deterministic and side-effect free; checks a fixed set of 8 lines.
#[instrument]
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(winner) = check_winner(board) {
        return GameOutcome::Won(winner);
    }
    if is_full(board) {
        return GameOutcome::Draw;
    }
    GameOutcome::InProgress
}
