//! Content scanning against a rule set.

use serde::Serialize;

use crate::rules::RuleSet;

/// A rule that matched the scanned content.
///
/// Holds rule metadata and a count only; the matched text is never kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub rule_id: String,
    pub description: String,
    pub match_count: usize,
}

/// Scan `content` with every rule, in rule set order.
///
/// An empty result means nothing suspicious was found.
pub fn scan(content: &str, rules: &RuleSet) -> Vec<Finding> {
    rules
        .rules()
        .iter()
        .filter_map(|rule| {
            let match_count = rule.count_matches(content);
            (match_count > 0).then(|| Finding {
                rule_id: rule.id.clone(),
                description: rule.description.clone(),
                match_count,
            })
        })
        .collect()
}
