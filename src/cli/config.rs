//! Shared configuration for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::search::SearchConfig;

/// Search options accepted by every command
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Enable alpha-beta pruning (never changes the chosen move)
    #[arg(long, global = true, conflicts_with = "no_pruning")]
    pub pruning: bool,

    /// Disable alpha-beta pruning even if the config file enables it
    #[arg(long, global = true)]
    pub no_pruning: bool,

    /// JSON file with search settings, e.g. {"pruning": true}
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl SearchArgs {
    /// Combine the config file (if any) with command-line flags.
    ///
    /// `--pruning` and `--no-pruning` take precedence over the file.
    pub fn resolve(&self) -> Result<SearchConfig> {
        let config = match &self.config {
            Some(path) => SearchConfig::from_json_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => SearchConfig::default(),
        };

        if self.pruning {
            Ok(config.with_pruning(true))
        } else if self.no_pruning {
            Ok(config.with_pruning(false))
        } else {
            Ok(config)
        }
    }
}
