//! Ready Check secret scanner.
//!
//! A PreToolUse hook that scans content written into the Ready Check output
//! directory and blocks the write when it looks like it contains secrets.
//! Findings report rule ids and match counts only, never the secret itself.

pub mod analysis;
pub mod audit;
pub mod config;
pub mod decision;
pub mod hook;
pub mod input;
pub mod output;
pub mod rules;

pub use analysis::{Finding, ProtectedDir, analyze_write, scan};
pub use config::Config;
pub use decision::Decision;
pub use hook::{HookError, Outcome};
pub use input::HookRequest;
pub use output::format_block_message;
pub use rules::{Rule, RuleSet};
