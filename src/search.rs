//! Adversarial search over Tic-Tac-Toe positions

pub mod config;
pub mod minimax;

pub use config::SearchConfig;
pub use minimax::{Minimax, OptimalPolicy, best_action};
