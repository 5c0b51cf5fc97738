//! Configuration types for the searcher.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

/// Options controlling how [`Minimax`](super::Minimax) explores the tree.
///
/// None of the options change which action is chosen; they only affect how
/// much of the tree is visited.
///
/// # Examples
///
/// ```
/// use tictactoe_engine::search::SearchConfig;
///
/// let config = SearchConfig::new().with_pruning(true);
/// assert!(config.pruning);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Cut subtrees with alpha-beta bounds below the root
    pub pruning: bool,
}

impl SearchConfig {
    /// Exhaustive search with no pruning
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable alpha-beta pruning.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Load a configuration from a JSON file such as `{"pruning": true}`.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid JSON for this
    /// type.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read search config {}", path.display()),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Parse a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, crate::Error> {
        Ok(serde_json::from_str(json)?)
    }
}
