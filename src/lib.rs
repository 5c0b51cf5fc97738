//! Tic-Tac-Toe engine with exhaustive minimax search
//!
//! This crate provides:
//! - Board representation with value semantics and a plain-text form
//! - The rules: turn order, legal actions, move application, outcomes
//! - Minimax search choosing an optimal action for the side to move
//! - A game record and a small command-line front end
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{search::best_action, tictactoe::{Action, Board}};
//!
//! // X X .
//! // O O .
//! // . . .
//! let board: Board = "XX./OO./...".parse().unwrap();
//! assert_eq!(best_action(&board), Some(Action::new(0, 2)));
//! ```

pub mod cli;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{Minimax, OptimalPolicy, SearchConfig, best_action};
pub use tictactoe::{Action, Board, Cell, Game, GameOutcome, Player, initial_board};
