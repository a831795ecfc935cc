//! Audit logging of scan outcomes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::hook::Outcome;
use crate::input::HookRequest;

/// An audit log entry. Carries rule ids and counts, never content.
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the event.
    pub timestamp: DateTime<Utc>,
    /// Session ID if available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Write target, when the request could be parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    /// `allow`, `block` or `fail_open`.
    pub outcome: &'static str,
    /// Matched rules (block only).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub findings: Vec<AuditFinding>,
}

/// Rule id and hit count for one finding.
#[derive(Debug, Serialize)]
pub struct AuditFinding {
    pub rule_id: String,
    pub match_count: usize,
}

impl AuditEntry {
    /// Create a new audit entry from the request (if parsed) and outcome.
    pub fn new(request: Option<&HookRequest>, outcome: &Outcome) -> Self {
        let findings = match outcome {
            Outcome::Block(info) => info
                .findings
                .iter()
                .map(|f| AuditFinding {
                    rule_id: f.rule_id.clone(),
                    match_count: f.match_count,
                })
                .collect(),
            Outcome::Allow | Outcome::FailOpen(_) => Vec::new(),
        };

        Self {
            timestamp: Utc::now(),
            session_id: request.and_then(|r| r.session_id.clone()),
            file_path: request
                .map(|r| r.tool_input().file_path())
                .filter(|p| !p.is_empty())
                .map(String::from),
            outcome: outcome.label(),
            findings,
        }
    }
}

/// Audit logger for writing entries to a file.
pub struct AuditLogger {
    file: File,
}

impl AuditLogger {
    /// Open or create an audit log file.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    /// Write an audit entry to the log.
    pub fn log(&mut self, entry: &AuditEntry) -> std::io::Result<()> {
        let json = serde_json::to_string(entry)?;
        writeln!(self.file, "{}", json)?;
        self.file.flush()
    }

    /// Log an outcome for a request.
    pub fn log_outcome(
        &mut self,
        request: Option<&HookRequest>,
        outcome: &Outcome,
    ) -> std::io::Result<()> {
        let entry = AuditEntry::new(request, outcome);
        self.log(&entry)
    }
}
