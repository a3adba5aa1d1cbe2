//! Facts Common - Shared utilities for host fact collectors
//!
//! This crate provides the ambient functionality every collector binary needs:
//!
//! - **Initialization**: [`init_tracing`] for standardized stderr logging
//! - **Errors**: [`FactError`] for failures of required sources
//! - **Results**: Helpers for rendering reports as JSON
//!
//! # Example
//!
//! ```rust,ignore
//! use facts_common::{init_tracing, render_json};
//!
//! init_tracing("hostfacts", 1)?;
//! let report = collector.collect("all").await?;
//! println!("{}", render_json(&report, false)?);
//! ```

pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use error::{FactError, FactResult};
pub use init::{init_tracing, level_for_verbosity};
pub use result::{json_compact, json_pretty, render_json};
