//! Best command - Print the optimal move for a position

use anyhow::Result;
use clap::Parser;

use crate::search::{Minimax, SearchConfig};

#[derive(Parser, Debug)]
#[command(about = "Print the optimal move for a position")]
pub struct BestArgs {
    /// Board as nine cells, row-major, e.g. "XX./OO./..."
    pub board: String,
}

pub fn execute(args: BestArgs, config: SearchConfig) -> Result<()> {
    print!("{}", render(&args, config)?);
    Ok(())
}

/// "row col" of the chosen move, or "none" on a finished board
pub fn render(args: &BestArgs, config: SearchConfig) -> Result<String> {
    let board = super::parse_board(&args.board)?;

    Ok(match Minimax::new(config).best_action(&board) {
        Some(action) => format!("{} {}\n", action.row, action.col),
        None => "none\n".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn best(board: &str) -> String {
        let args = BestArgs {
            board: board.to_string(),
        };
        render(&args, SearchConfig::default()).unwrap()
    }

    #[test]
    fn prints_winning_move() {
        assert_eq!(best("XX./OO./..."), "0 2\n");
    }

    #[test]
    fn prints_none_on_finished_board() {
        assert_eq!(best("XXXOO...."), "none\n");
        assert_eq!(best("XOXXOOOXX"), "none\n");
    }

    #[test]
    fn rejects_bad_board() {
        let args = BestArgs {
            board: "XX".to_string(),
        };
        assert!(render(&args, SearchConfig::default()).is_err());
    }
}
