//! Decision types for hook responses.

use crate::analysis::Finding;

/// The result of scanning a pending write.
#[derive(Debug, Clone)]
pub enum Decision {
    /// Allow the write to proceed.
    Allow,
    /// Block the write.
    Block(BlockInfo),
}

/// Information about why a write was blocked.
#[derive(Debug, Clone)]
pub struct BlockInfo {
    /// Message for the requester's diagnostic channel.
    pub message: String,
    /// Rules that matched, in rule set order.
    pub findings: Vec<Finding>,
}

impl Decision {
    /// Create an allow decision.
    pub fn allow() -> Self {
        Decision::Allow
    }

    /// Create a block decision.
    pub fn block(message: impl Into<String>, findings: Vec<Finding>) -> Self {
        Decision::Block(BlockInfo {
            message: message.into(),
            findings,
        })
    }

    /// Check if this is a block decision.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Decision::Block(_))
    }

    /// Get the block info if blocked.
    pub fn block_info(&self) -> Option<&BlockInfo> {
        match self {
            Decision::Block(info) => Some(info),
            Decision::Allow => None,
        }
    }
}
