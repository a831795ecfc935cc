//! Write and Edit analysis: gate, scan, decide.

use tracing::debug;

use super::gate::ProtectedDir;
use super::scanner::scan;
use crate::decision::Decision;
use crate::input::ToolInput;
use crate::output::format_block_message;
use crate::rules::RuleSet;

/// Analyze a pending write to decide whether it may proceed.
pub fn analyze_write(input: &ToolInput, rules: &RuleSet, protected: &ProtectedDir) -> Decision {
    let path = input.file_path();

    if !protected.covers(path) {
        debug!(path, marker = protected.marker(), "outside protected directory");
        return Decision::allow();
    }

    let content = input.scan_subject();
    if content.is_empty() {
        debug!(path, "nothing to scan");
        return Decision::allow();
    }

    let findings = scan(content, rules);
    if findings.is_empty() {
        debug!(path, rules = rules.len(), "no secrets found");
        return Decision::allow();
    }

    let message = format_block_message(path, &findings);
    Decision::block(message, findings)
}
