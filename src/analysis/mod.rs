//! Write analysis: applicability gate, content scanner and decision.

mod gate;
mod scanner;
mod write;

pub use gate::{PathMatch, ProtectedDir};
pub use scanner::{Finding, scan};
pub use write::analyze_write;
