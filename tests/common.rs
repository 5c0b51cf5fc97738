//! Common test utilities for the engine test suite.
//!
//! Random playouts used by several property tests.

#![allow(dead_code)]

use rand::{Rng, rngs::StdRng};
use tictactoe_engine::{Action, Board};

/// Pick a uniformly random empty cell, `None` on a full board.
pub fn random_action(board: &Board, rng: &mut StdRng) -> Option<Action> {
    let actions = board.empty_cells();
    if actions.is_empty() {
        return None;
    }
    Some(actions[rng.random_range(0..actions.len())])
}

/// Play uniformly random moves until the game ends.
///
/// Returns every board visited, the initial one included.
pub fn random_game(rng: &mut StdRng) -> Vec<Board> {
    let mut boards = vec![Board::new()];
    let mut board = Board::new();
    while !board.is_terminal() {
        let Some(action) = random_action(&board, rng) else {
            break;
        };
        board = board
            .apply_action(action)
            .expect("random action is drawn from the empty cells");
        boards.push(board);
    }
    boards
}
