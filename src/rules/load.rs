//! Secret pattern data file parsing.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use super::RuleSet;

/// Errors that make the whole data file unusable.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse patterns JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level layout of `secret-patterns.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleFile {
    pub rules: Vec<RuleEntry>,
}

/// One rule as written in the data file.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleEntry {
    pub id: String,
    pub description: String,
    /// Regular expression; `pattern` is accepted as an alias.
    #[serde(alias = "pattern")]
    pub regex: String,
}

impl RuleSet {
    /// Load and compile rules from a JSON data file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let set = Self::from_json(&content)?;
        debug!(
            path = %path.display(),
            rules = set.len(),
            skipped = set.skipped().len(),
            "loaded secret patterns"
        );
        Ok(set)
    }

    /// Parse and compile rules from JSON text.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let file: RuleFile = serde_json::from_str(json)?;
        Ok(Self::from_entries(file.rules))
    }
}
