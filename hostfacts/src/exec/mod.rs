//! External tool runner
//!
//! Facts with no native source (PCI enumeration, release queries) come from
//! command-line tools. This module spawns them with a timeout and reports a
//! missing tool as a distinct error so callers can fall through to the next
//! tier.

pub mod error;
pub mod executor;

pub use error::{ToolError, ToolResult};
pub use executor::run_tool;
