//! Pure tic-tac-toe game logic with an exhaustive minimax opponent.
//!
//! The crate exposes a board-state API that a UI layer drives by feeding
//! cell coordinates and reading back state transitions. No rendering,
//! input handling, or persistence lives here.
//!
//! # Architecture
//!
//! - **Board state**: [`Board`] owns the 3x3 grid; [`evaluate`] derives the
//!   [`GameOutcome`] from it on demand.
//! - **Solver**: [`find_best_move`] runs a full-depth exhaustive search over
//!   a snapshot of the board; [`choose_move`] is the computer's move policy.
//! - **Session**: [`Game`] tracks whose turn it is and applies moves.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameOutcome, Move, Player};
//!
//! let mut game = Game::new(Player::X);
//! game.play(Move::new(0, 0))?;
//! let (reply, outcome) = game.play_ai_turn()?;
//! assert_eq!(reply, Move::new(1, 1));
//! assert_eq!(outcome, GameOutcome::InProgress);
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod rules;
mod solver;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use rules::{check_winner, evaluate, is_full};
pub use solver::{choose_move, find_best_move};
pub use types::{Board, Cell, GameOutcome, Player};
