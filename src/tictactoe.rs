//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod rules;
pub mod validation;

pub use board::{Action, Board, Cell, Player};
pub use game::{Game, GameOutcome, Ply};
pub use lines::{LineAnalyzer, WINNING_LINES};

/// The all-empty starting board, X to move
pub fn initial_board() -> Board {
    Board::new()
}
