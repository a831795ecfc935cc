//! Hook boundary: request in, outcome out.
//!
//! Every failure here resolves to [`Outcome::FailOpen`]. Only a successful
//! scan with findings may block a write.

use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::analysis::analyze_write;
use crate::audit::AuditLogger;
use crate::config::{Config, ConfigError};
use crate::decision::{BlockInfo, Decision};
use crate::input::{HookRequest, InputError};
use crate::rules::{LoadError, RuleSet};

/// Exit status that tells the host to deny the write.
pub const EXIT_BLOCK: u8 = 2;

/// Anything that stops the pipeline before a decision is reached.
#[derive(Debug, Error)]
pub enum HookError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Patterns(#[from] LoadError),

    #[error("failed to read stdin: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Input(#[from] InputError),
}

impl HookError {
    /// Short diagnostic written before failing open.
    pub fn warning(&self) -> String {
        match self {
            HookError::Patterns(e) => format!("Warning: Could not load secret patterns: {}", e),
            other => format!("Warning: Secret scanner error: {}", other),
        }
    }
}

/// Terminal state of one invocation.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Permit the write silently.
    Allow,
    /// Deny the write and show the message to the requester.
    Block(BlockInfo),
    /// Internal failure; permit the write with a warning.
    FailOpen(String),
}

impl Outcome {
    /// Fail open on an error.
    pub fn from_error(err: HookError) -> Self {
        warn!(error = %err, "failing open");
        Outcome::FailOpen(err.warning())
    }

    /// Process exit status for the host.
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Block(_) => EXIT_BLOCK,
            Outcome::Allow | Outcome::FailOpen(_) => 0,
        }
    }

    /// Text for stderr, if any.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Outcome::Allow => None,
            Outcome::Block(info) => Some(info.message.as_str()),
            Outcome::FailOpen(warning) => Some(warning.as_str()),
        }
    }

    /// Short name used in the audit log.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Allow => "allow",
            Outcome::Block(_) => "block",
            Outcome::FailOpen(_) => "fail_open",
        }
    }
}

impl From<Decision> for Outcome {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Allow => Outcome::Allow,
            Decision::Block(info) => Outcome::Block(info),
        }
    }
}

/// Run one hook invocation: load rules, read the request, decide.
pub fn run<R: Read>(input: R, config: &Config) -> Outcome {
    let (request, outcome) = match evaluate(input, config) {
        Ok((request, decision)) => (Some(request), Outcome::from(decision)),
        Err(err) => (None, Outcome::from_error(err)),
    };

    debug!(outcome = outcome.label(), "scan finished");

    if config.audit.enabled
        && let Some(path) = &config.audit.path
    {
        audit(path, request.as_ref(), &outcome);
    }

    outcome
}

fn evaluate<R: Read>(mut input: R, config: &Config) -> Result<(HookRequest, Decision), HookError> {
    let rules = RuleSet::load(&config.patterns_path()?)?;

    // Invalid UTF-8 is replaced rather than rejected so a stray byte cannot
    // push a write past the scan.
    let mut raw = Vec::new();
    input.read_to_end(&mut raw)?;
    let request = HookRequest::parse(&String::from_utf8_lossy(&raw))?;

    let decision = analyze_write(request.tool_input(), &rules, &config.protected());
    Ok((request, decision))
}

fn audit(path: &Path, request: Option<&HookRequest>, outcome: &Outcome) {
    match AuditLogger::open(path) {
        Ok(mut logger) => {
            if let Err(e) = logger.log_outcome(request, outcome) {
                debug!(error = %e, "audit write failed");
            }
        }
        Err(e) => debug!(error = %e, path = %path.display(), "audit log unavailable"),
    }
}
