//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    const LINES: [[usize; 3]; 8] = [
        [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
        [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
        [0, 4, 8], [2, 4, 6],            // Diagonals
    ];

    let cells = board.cells();
    for [a, b, c] in LINES {
        let cell = cells[a];
        if cell != Cell::Empty && cell == cells[b] && cell == cells[c] {
            if let Cell::Occupied(player) = cell {
                return Some(player);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.apply_move(Move::new(0, 0), Player::X).unwrap();
        board.apply_move(Move::new(0, 1), Player::X).unwrap();
        board.apply_move(Move::new(0, 2), Player::X).unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        board.apply_move(Move::new(0, 1), Player::O).unwrap();
        board.apply_move(Move::new(1, 1), Player::O).unwrap();
        board.apply_move(Move::new(2, 1), Player::O).unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.apply_move(Move::new(0, 0), Player::O).unwrap();
        board.apply_move(Move::new(1, 1), Player::O).unwrap();
        board.apply_move(Move::new(2, 2), Player::O).unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.apply_move(Move::new(0, 2), Player::X).unwrap();
        board.apply_move(Move::new(1, 1), Player::X).unwrap();
        board.apply_move(Move::new(2, 0), Player::X).unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.apply_move(Move::new(0, 0), Player::X).unwrap();
        board.apply_move(Move::new(0, 1), Player::X).unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
