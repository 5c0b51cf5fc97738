//! Self-play command - Optimal play for both sides

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{describe_outcome, push_board, push_kv, push_section},
    search::{Minimax, SearchConfig},
    tictactoe::Game,
};

#[derive(Parser, Debug)]
#[command(about = "Play optimal moves for both sides and print the game")]
pub struct SelfPlayArgs {
    /// Start from this board instead of the empty one
    #[arg(long)]
    pub from: Option<String>,
}

pub fn execute(args: SelfPlayArgs, config: SearchConfig) -> Result<()> {
    print!("{}", render(&args, config)?);
    Ok(())
}

/// Every ply of the game followed by its result
pub fn render(args: &SelfPlayArgs, config: SearchConfig) -> Result<String> {
    let mut game = match &args.from {
        Some(board) => Game::from_board(super::parse_board(board)?),
        None => Game::new(),
    };

    game.play_out(&Minimax::new(config)).context("self-play failed")?;
    let boards = game.boards()?;

    let mut out = String::new();
    push_section(&mut out, "Self-play");
    push_board(&mut out, &game.initial);
    for (ply, board) in game.plies.iter().zip(boards.iter().skip(1)) {
        out.push_str(&format!("\n  {} plays {}\n", ply.player, ply.action));
        push_board(&mut out, board);
    }

    let last = boards.last().copied().unwrap_or(game.initial);
    out.push('\n');
    push_kv(&mut out, "Plies", &game.plies.len().to_string());
    push_kv(&mut out, "Result", &describe_outcome(game.outcome()?));
    push_kv(&mut out, "Utility", &last.utility().to_string());

    Ok(out)
}
