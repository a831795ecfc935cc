//! Block message formatting.

use crate::analysis::Finding;

const REMEDIATION: &[&str] = &[
    "Ready Check files must not contain secrets. Please:",
    "  1. Remove the actual secret values from the content",
    "  2. Report only the TYPE and LOCATION of secrets (e.g., \"OpenAI API key found in config.js:15\")",
    "  3. Never include the actual key/token/password values",
];

/// Format the message shown to the requester when a write is blocked.
///
/// Only rule metadata and counts are included, never the matched text.
pub fn format_block_message(file_path: &str, findings: &[Finding]) -> String {
    let mut lines = vec![
        format!(
            "BLOCKED: Potential secrets detected in write to {}",
            base_name(file_path)
        ),
        String::new(),
        "The following secret patterns were found:".to_string(),
        String::new(),
    ];

    for finding in findings {
        lines.push(format!(
            "  - {} ({}): {} match(es)",
            finding.description, finding.rule_id, finding.match_count
        ));
    }

    lines.push(String::new());
    lines.extend(REMEDIATION.iter().map(|line| line.to_string()));

    lines.join("\n")
}

/// Last `/`-separated component, ignoring trailing slashes.
fn base_name(file_path: &str) -> &str {
    let trimmed = file_path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
