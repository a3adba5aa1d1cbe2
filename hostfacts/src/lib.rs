//! Host Facts Library
//!
//! Point-in-time host facts: distribution, kernel, motherboard, CPU count,
//! memory totals and disk usage.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use hostfacts::{Config, HostFactCollector};
//!
//! let collector = HostFactCollector::new(Config::default());
//! let facts = collector.collect_all().await?;
//! let report = collector.collect("mem_total").await?;
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `hostfacts --field kernel`

pub mod collector;
pub mod config;
pub mod exec;
pub mod info;
pub mod source;
pub mod types;

// Re-export main collector type
pub use collector::HostFactCollector;
pub use config::Config;

// Re-export report types for direct API usage
pub use types::{DiskUsage, FactSheet, Field, HostFacts, Report, SystemInformation};

pub use facts_common::{FactError, FactResult};
