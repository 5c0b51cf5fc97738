//! Output formatting for CLI
//!
//! Commands render their report into a `String` so the text can be checked
//! without capturing stdout.

use crate::tictactoe::{Action, Board, GameOutcome};

/// Append a section header
pub fn push_section(out: &mut String, title: &str) {
    let rule = "=".repeat(40);
    out.push_str(&format!("\n{rule}\n{title}\n{rule}\n"));
}

/// Append a key-value pair
pub fn push_kv(out: &mut String, key: &str, value: &str) {
    out.push_str(&format!("  {:20} {}\n", format!("{}:", key), value));
}

/// Append a board indented under a heading
pub fn push_board(out: &mut String, board: &Board) {
    for line in board.to_string().lines() {
        out.push_str(&format!("    {line}\n"));
    }
}

/// Human-readable game result
pub fn describe_outcome(outcome: Option<GameOutcome>) -> String {
    match outcome {
        Some(GameOutcome::Win(player)) => format!("{player} wins"),
        Some(GameOutcome::Draw) => "draw".to_string(),
        None => "in progress".to_string(),
    }
}

/// Comma-separated list of actions
pub fn format_actions(actions: &[Action]) -> String {
    actions
        .iter()
        .map(Action::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
