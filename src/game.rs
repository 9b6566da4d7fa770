//! Game session: turn tracking over a board.

use crate::action::{Move, MoveError};
use crate::rules;
use crate::solver;
use crate::types::{Board, GameOutcome, Player};
use tracing::{debug, instrument};

/// A tic-tac-toe game session.
///
/// Owns the board and the turn marker; the outcome is always recomputed
/// from the board rather than cached. The caller drives the session one
/// move at a time, either supplying coordinates or asking the computer
/// to take its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    starting_player: Player,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with the given player moving first.
    pub fn new(starting_player: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: starting_player,
            starting_player,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose move is next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the moves played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current outcome, recomputed from the board.
    pub fn outcome(&self) -> GameOutcome {
        rules::evaluate(&self.board)
    }

    /// Checks whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome().is_over()
    }

    /// Plays a move for the side whose turn it is.
    ///
    /// On success the turn marker flips exactly once and the fresh outcome
    /// is returned. On error the board and the turn marker are unchanged.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameOver` if the game has ended, otherwise
    /// whatever `Board::apply_move` reports for the coordinates.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, mv: Move) -> Result<GameOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.to_move;
        self.board.apply_move(mv, player)?;
        self.history.push(mv);
        self.to_move = player.opponent();
        debug!(%player, %mv, "move applied");

        Ok(self.outcome())
    }

    /// Lets the computer take the current turn.
    ///
    /// Picks a move with [`solver::choose_move`] and applies it, returning
    /// the move together with the fresh outcome.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameOver` if the game has ended and
    /// `MoveError::NoMovesAvailable` if the board is full.
    #[instrument(skip(self))]
    pub fn play_ai_turn(&mut self) -> Result<(Move, GameOutcome), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let mv = solver::choose_move(&self.board)?;
        let outcome = self.play(mv)?;
        Ok((mv, outcome))
    }

    /// Resets the session to an empty board with the original starting player.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = self.starting_player;
        self.history.clear();
        debug!(starting_player = %self.starting_player, "game reset");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::X)
    }
}
