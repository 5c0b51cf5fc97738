//! Subcommands of the `tictactoe` binary

use anyhow::{Context, Result};
use tracing::warn;

use crate::tictactoe::Board;

pub mod analyze;
pub mod best;
pub mod self_play;

/// Parse a board argument such as `"XX./OO./..."`.
///
/// Boards that legal play cannot produce are accepted with a warning; the
/// engine still searches them deterministically.
pub fn parse_board(input: &str) -> Result<Board> {
    let board = Board::from_string(input).with_context(|| format!("invalid board '{input}'"))?;
    if !board.is_reachable() {
        warn!(board = %board.encode(), "board cannot arise from legal play");
    }
    Ok(board)
}
