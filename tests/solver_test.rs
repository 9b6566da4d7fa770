//! Tests for the minimax solver and the computer's move policy.

use tictactoe_core::{
    Board, Game, GameOutcome, Move, MoveError, Player, choose_move, find_best_move,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn board_with(marks: &[(Move, Player)]) -> Board {
    let mut board = Board::new();
    for &(mv, player) in marks {
        board.apply_move(mv, player).expect("Valid move");
    }
    board
}

#[test]
fn test_completes_winning_row() {
    // X X . / O . . / . . .  — X wins by taking (0, 2).
    let board = board_with(&[
        (Move::new(0, 0), Player::X),
        (Move::new(0, 1), Player::X),
        (Move::new(1, 0), Player::O),
    ]);

    assert_eq!(find_best_move(&board).expect("Moves left"), Move::new(0, 2));
}

#[test]
fn test_caller_board_never_mutated() {
    let board = board_with(&[
        (Move::new(0, 0), Player::X),
        (Move::new(0, 1), Player::X),
        (Move::new(1, 0), Player::O),
    ]);
    let snapshot = board.clone();

    find_best_move(&board).expect("Moves left");
    assert_eq!(board, snapshot);

    choose_move(&board).expect("Moves left");
    assert_eq!(board, snapshot);
}

#[test]
fn test_full_board_reports_no_moves() {
    // X O X / O X X / O X O  — full, no line.
    let board = board_with(&[
        (Move::new(0, 0), Player::X),
        (Move::new(0, 1), Player::O),
        (Move::new(0, 2), Player::X),
        (Move::new(1, 0), Player::O),
        (Move::new(1, 1), Player::X),
        (Move::new(1, 2), Player::X),
        (Move::new(2, 0), Player::O),
        (Move::new(2, 1), Player::X),
        (Move::new(2, 2), Player::O),
    ]);

    assert!(!board.has_moves_left());
    assert_eq!(find_best_move(&board), Err(MoveError::NoMovesAvailable));
    assert_eq!(choose_move(&board), Err(MoveError::NoMovesAvailable));
}

#[test]
fn test_policy_takes_free_center() {
    let board = Board::new();
    assert_eq!(choose_move(&board).expect("Moves left"), Move::new(1, 1));

    let board = board_with(&[(Move::new(0, 0), Player::X)]);
    assert_eq!(choose_move(&board).expect("Moves left"), Move::new(1, 1));
}

#[test]
fn test_optimal_human_against_policy_ends_in_draw() {
    init_tracing();

    // X plays its first-found optimal reply each turn; the computer answers
    // through its move policy. The game fills all nine cells and draws.
    let x_moves = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(2, 0),
        Move::new(1, 2),
        Move::new(2, 2),
    ];
    let o_replies = [
        Move::new(1, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(2, 1),
    ];

    let mut game = Game::new(Player::X);
    for (turn, &mv) in x_moves.iter().enumerate() {
        game.play(mv).expect("Valid move");
        if turn < o_replies.len() {
            let (reply, _) = game.play_ai_turn().expect("Moves left");
            assert_eq!(reply, o_replies[turn]);
        }
    }

    assert_eq!(game.outcome(), GameOutcome::Draw);
    assert!(!game.board().has_moves_left());
    assert_eq!(game.history().len(), 9);
}

#[test]
fn test_policy_game_never_leaves_stale_state() {
    // Driving a fresh game entirely through the computer policy on both
    // sides terminates without errors and reaches a terminal outcome.
    let mut game = Game::new(Player::X);
    while !game.is_over() {
        let mv = if game.to_move() == Player::X {
            find_best_move(game.board()).expect("Moves left")
        } else {
            choose_move(game.board()).expect("Moves left")
        };
        game.play(mv).expect("Valid move");
    }
    assert!(game.outcome().is_over());
}
