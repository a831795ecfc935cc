//! Detection rules loaded from the secret pattern data file.

mod load;

pub use load::{LoadError, RuleEntry, RuleFile};

use regex::{Regex, RegexBuilder};
use thiserror::Error;
use tracing::warn;

/// A single rule whose pattern could not be compiled.
///
/// Contained by [`RuleSet`]; it never aborts loading of the other rules.
#[derive(Debug, Clone, Error)]
#[error("rule '{id}' has an invalid pattern: {reason}")]
pub struct RuleCompileError {
    /// Id of the rejected rule.
    pub id: String,
    /// Compiler message.
    pub reason: String,
}

/// A compiled detection rule.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Opaque identifier, used only to correlate output.
    pub id: String,
    /// Human-readable category, e.g. "AWS Access Key ID".
    pub description: String,
    /// Source pattern as written in the data file.
    pub pattern: String,
    matcher: Regex,
}

impl Rule {
    /// Compile a rule. Matching is always case-insensitive.
    pub fn compile(
        id: impl Into<String>,
        description: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Result<Self, RuleCompileError> {
        let id = id.into();
        let pattern = pattern.into();
        let matcher = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| RuleCompileError {
                id: id.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            id,
            description: description.into(),
            pattern,
            matcher,
        })
    }

    /// Count non-overlapping matches in `text`.
    pub fn count_matches(&self, text: &str) -> usize {
        self.matcher.find_iter(text).count()
    }
}

/// Ordered, immutable collection of compiled rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
    skipped: Vec<RuleCompileError>,
}

impl RuleSet {
    /// Build from data-file entries, keeping file order.
    ///
    /// Entries whose pattern fails to compile are logged and set aside.
    pub fn from_entries(entries: impl IntoIterator<Item = RuleEntry>) -> Self {
        let mut set = RuleSet::default();
        for entry in entries {
            match Rule::compile(entry.id, entry.description, entry.regex) {
                Ok(rule) => set.rules.push(rule),
                Err(err) => {
                    warn!(rule = %err.id, reason = %err.reason, "skipping rule");
                    set.skipped.push(err);
                }
            }
        }
        set
    }

    /// Rules that compiled, in load order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules that were rejected at load time.
    pub fn skipped(&self) -> &[RuleCompileError] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
