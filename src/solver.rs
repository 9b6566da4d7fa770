//! Exhaustive search for the computer opponent.
//!
//! Scoring convention: X (the human side) scores +10, O (the computer)
//! scores -10, and the reduction takes the minimum at every ply while the
//! recursion always places O. `find_best_move` scans candidate X placements
//! at the root and keeps the highest-scoring one. Terminal scores carry no
//! depth adjustment, so equally scored branches are tied regardless of how
//! fast they end.

use crate::action::{Move, MoveError};
use crate::rules;
use crate::types::{Board, Cell, GameOutcome, Player};
use tracing::{debug, instrument};

/// Score of a terminal position won by X.
const WIN_SCORE: i32 = 10;
/// Score of a terminal position won by O.
const LOSS_SCORE: i32 = -10;

/// The center cell, preferred by [`choose_move`] when free.
const CENTER: Move = Move { row: 1, column: 1 };

/// Maps the board's outcome onto the solver's score convention.
fn score(board: &Board) -> i32 {
    match rules::evaluate(board) {
        GameOutcome::Won(Player::X) => WIN_SCORE,
        GameOutcome::Won(Player::O) => LOSS_SCORE,
        GameOutcome::Draw | GameOutcome::InProgress => 0,
    }
}

/// Full-depth search over the remaining empty cells.
///
/// Places O in every empty cell in row-major order, recurses, restores the
/// cell, and reduces with the minimum. The board is always left exactly as
/// it was received.
fn minimax(board: &mut Board) -> i32 {
    let value = score(board);
    if value == WIN_SCORE || value == LOSS_SCORE {
        return value;
    }
    if !board.has_moves_left() {
        return 0;
    }

    let mut best = 11;
    for mv in board.empty_cells() {
        board.place(mv, Player::O);
        best = best.min(minimax(board));
        board.clear(mv);
    }
    best
}

/// Finds the highest-scoring move on the board.
///
/// Each empty cell is tried as an X placement in row-major order and scored
/// with [`minimax`]; ties keep the first candidate found. The search runs on
/// a private copy, so the caller's board is never mutated.
///
/// # Errors
///
/// Returns `MoveError::NoMovesAvailable` if the board has no empty cells.
#[instrument(skip(board))]
pub fn find_best_move(board: &Board) -> Result<Move, MoveError> {
    let mut scratch = board.clone();
    let mut best_value = -1000;
    let mut best_move = None;

    for mv in scratch.empty_cells() {
        scratch.place(mv, Player::X);
        let value = minimax(&mut scratch);
        scratch.clear(mv);

        if value > best_value {
            best_value = value;
            best_move = Some(mv);
        }
    }

    match best_move {
        Some(mv) => {
            debug!(%mv, best_value, "solver picked a move");
            Ok(mv)
        }
        None => Err(MoveError::NoMovesAvailable),
    }
}

/// The computer's move policy: take the center when it is free, otherwise
/// fall back to the exhaustive search.
///
/// # Errors
///
/// Returns `MoveError::NoMovesAvailable` if the board has no empty cells.
#[instrument(skip(board))]
pub fn choose_move(board: &Board) -> Result<Move, MoveError> {
    if board.get(CENTER) == Some(Cell::Empty) {
        debug!(center = %CENTER, "center cell is free");
        return Ok(CENTER);
    }
    find_best_move(board)
}
