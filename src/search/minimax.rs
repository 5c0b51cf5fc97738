//! Exhaustive minimax search
//!
//! Values are always from X's point of view: X maximizes, O minimizes.
//! Root actions are scored in row-major order and ties go to the earliest
//! one, so the chosen action for a given board never changes between runs.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::SearchConfig;
use crate::tictactoe::{Action, Board, Player};

/// Result of searching a non-terminal position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimalPolicy {
    /// Player to move in the searched position
    pub player: Player,
    /// Minimax value of the position
    pub value: i32,
    /// Every action reaching `value`, in row-major order
    pub optimal_actions: Vec<Action>,
    /// Positions visited, root included
    pub nodes: u64,
}

impl OptimalPolicy {
    /// The first optimal action in row-major order
    pub fn best_action(&self) -> Option<Action> {
        self.optimal_actions.first().copied()
    }
}

/// Minimax searcher.
///
/// Holds only its configuration, so one instance can be shared freely across
/// threads; per-search bookkeeping lives on the stack of each call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax {
    config: SearchConfig,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Optimal action for the player to move, `None` on a terminal board
    pub fn best_action(&self, board: &Board) -> Option<Action> {
        self.analyze(board)?.best_action()
    }

    /// Score every legal action and collect the optimal ones.
    ///
    /// Returns `None` on a terminal board. Each root action is searched with
    /// an unbounded window, so its value is exact even when pruning is
    /// enabled and the set of optimal actions does not depend on the
    /// configuration.
    pub fn analyze(&self, board: &Board) -> Option<OptimalPolicy> {
        if board.is_terminal() {
            return None;
        }
        let player = board.current_player()?;

        let mut search = Search::new(self.config);
        search.nodes += 1;

        let mut best_value = match player {
            Player::X => i32::MIN,
            Player::O => i32::MAX,
        };
        let mut optimal_actions = Vec::new();

        for action in board.empty_cells() {
            let child = board
                .apply_action(action)
                .expect("legal move generation should not fail");
            let value = match player {
                Player::X => search.min_value(&child, i32::MIN, i32::MAX),
                Player::O => search.max_value(&child, i32::MIN, i32::MAX),
            };
            trace!(%action, value, "scored root action");

            let improves = match player {
                Player::X => value > best_value,
                Player::O => value < best_value,
            };
            if improves {
                best_value = value;
                optimal_actions.clear();
                optimal_actions.push(action);
            } else if value == best_value {
                optimal_actions.push(action);
            }
        }

        let policy = OptimalPolicy {
            player,
            value: best_value,
            optimal_actions,
            nodes: search.nodes,
        };
        debug!(
            board = %board.encode(),
            %player,
            value = policy.value,
            best = ?policy.best_action(),
            optimal = policy.optimal_actions.len(),
            nodes = policy.nodes,
            pruning = self.config.pruning,
            "minimax search complete"
        );
        Some(policy)
    }

    /// Minimax value of any board; the utility when it is terminal
    pub fn evaluate(&self, board: &Board) -> i32 {
        let mut search = Search::new(self.config);
        match board.current_player() {
            Some(Player::O) => search.min_value(board, i32::MIN, i32::MAX),
            // X to move, or a full board which is terminal anyway
            _ => search.max_value(board, i32::MIN, i32::MAX),
        }
    }
}

/// Optimal action for the player to move using exhaustive search
pub fn best_action(board: &Board) -> Option<Action> {
    Minimax::default().best_action(board)
}

/// State of one search call
struct Search {
    pruning: bool,
    nodes: u64,
}

impl Search {
    fn new(config: SearchConfig) -> Self {
        Self {
            pruning: config.pruning,
            nodes: 0,
        }
    }

    /// Value of `board` with X to move
    fn max_value(&mut self, board: &Board, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;
        if board.is_terminal() {
            return board.utility();
        }

        let mut value = i32::MIN;
        for action in board.empty_cells() {
            let child = board
                .apply_action(action)
                .expect("legal move generation should not fail");
            value = value.max(self.min_value(&child, alpha, beta));
            if self.pruning {
                if value >= beta {
                    return value;
                }
                alpha = alpha.max(value);
            }
        }
        value
    }

    /// Value of `board` with O to move
    fn min_value(&mut self, board: &Board, alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;
        if board.is_terminal() {
            return board.utility();
        }

        let mut value = i32::MAX;
        for action in board.empty_cells() {
            let child = board
                .apply_action(action)
                .expect("legal move generation should not fail");
            value = value.min(self.max_value(&child, alpha, beta));
            if self.pruning {
                if value <= alpha {
                    return value;
                }
                beta = beta.min(value);
            }
        }
        value
    }
}
