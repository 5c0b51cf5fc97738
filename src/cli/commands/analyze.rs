//! Analyze command - Show the minimax value and every optimal move

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{describe_outcome, format_actions, push_board, push_kv, push_section},
    search::{Minimax, SearchConfig},
    tictactoe::GameOutcome,
};

#[derive(Parser, Debug)]
#[command(about = "Show the minimax value and every optimal move")]
pub struct AnalyzeArgs {
    /// Board as nine cells, row-major, e.g. "XX./OO./..."
    pub board: String,

    /// Print the analysis as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: AnalyzeArgs, config: SearchConfig) -> Result<()> {
    print!("{}", render(&args, config)?);
    Ok(())
}

/// Analysis report; with `--json` the policy, or `null` on a finished board
pub fn render(args: &AnalyzeArgs, config: SearchConfig) -> Result<String> {
    let board = super::parse_board(&args.board)?;
    let policy = Minimax::new(config).analyze(&board);

    if args.json {
        let json = serde_json::to_string_pretty(&policy).context("failed to encode analysis")?;
        return Ok(format!("{json}\n"));
    }

    let mut out = String::new();
    push_section(&mut out, "Position");
    push_board(&mut out, &board);

    let Some(policy) = policy else {
        push_kv(&mut out, "Result", &describe_outcome(GameOutcome::of(&board)));
        push_kv(&mut out, "Utility", &board.utility().to_string());
        return Ok(out);
    };

    push_section(&mut out, "Minimax");
    push_kv(&mut out, "To move", &policy.player.to_string());
    push_kv(&mut out, "Value", &policy.value.to_string());
    push_kv(&mut out, "Optimal moves", &format_actions(&policy.optimal_actions));
    if let Some(best) = policy.best_action() {
        push_kv(&mut out, "Chosen move", &best.to_string());
    }
    push_kv(&mut out, "Nodes", &policy.nodes.to_string());
    push_kv(&mut out, "Pruning", if config.pruning { "on" } else { "off" });

    Ok(out)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn analyze(board: &str, json: bool) -> String {
        let args = AnalyzeArgs {
            board: board.to_string(),
            json,
        };
        render(&args, SearchConfig::default()).unwrap()
    }

    #[test]
    fn json_is_null_on_finished_board() {
        assert_eq!(analyze("XXXOO....", true).trim(), "null");
    }

    #[test]
    fn json_carries_policy_fields() {
        let value: Value = serde_json::from_str(&analyze("XX./OO./...", true)).unwrap();
        assert_eq!(value["player"], "X");
        assert_eq!(value["value"], 1);
        assert_eq!(value["optimal_actions"][0]["row"], 0);
        assert_eq!(value["optimal_actions"][0]["col"], 2);
        assert!(value["nodes"].as_u64().unwrap() > 0);
    }

    #[test]
    fn report_lists_value_and_moves() {
        let out = analyze("XX./OO./...", false);
        assert!(out.contains("Minimax"));
        assert!(out.contains("(0, 2)"));
        assert!(out.contains("Pruning:"));
    }

    #[test]
    fn report_on_finished_board_shows_result() {
        let out = analyze("XOXXOOOXX", false);
        assert!(out.contains("draw"));
        assert!(!out.contains("Minimax"));
    }
}
