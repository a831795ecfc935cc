//! Output formatting for blocked writes.

mod response;

pub use response::format_block_message;
