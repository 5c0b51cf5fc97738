//! Tic-Tac-Toe CLI - query the minimax engine from the command line
//!
//! This CLI provides:
//! - The optimal move for a position
//! - A full analysis of a position (value and every optimal move)
//! - Optimal self-play from the empty board or a given position
//!
//! Set `RUST_LOG=debug` to see search diagnostics on stderr.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tictactoe_engine::cli::{
    commands::{analyze, best, self_play},
    config::SearchArgs,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Optimal Tic-Tac-Toe via minimax search", long_about = None)]
struct Cli {
    #[command(flatten)]
    search: SearchArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the optimal move for a position
    Best(best::BestArgs),

    /// Show the minimax value and every optimal move
    Analyze(analyze::AnalyzeArgs),

    /// Play optimal moves for both sides
    SelfPlay(self_play::SelfPlayArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.search.resolve()?;

    match cli.command {
        Commands::Best(args) => best::execute(args, config),
        Commands::Analyze(args) => analyze::execute(args, config),
        Commands::SelfPlay(args) => self_play::execute(args, config),
    }
}
