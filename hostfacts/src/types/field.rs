//! Field selector

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One named fact, or the whole aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Distro,
    Board,
    Kernel,
    Cpu,
    MemTotal,
    MemFree,
    MemAvailable,
    DiskTotal,
    DiskUsed,
    DiskFree,
    All,
}

impl Field {
    /// Every single-fact selector, in report order
    pub const FACTS: [Field; 10] = [
        Field::Distro,
        Field::Board,
        Field::Kernel,
        Field::Cpu,
        Field::MemTotal,
        Field::MemFree,
        Field::MemAvailable,
        Field::DiskTotal,
        Field::DiskUsed,
        Field::DiskFree,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Distro => "distro",
            Field::Board => "board",
            Field::Kernel => "kernel",
            Field::Cpu => "cpu",
            Field::MemTotal => "mem_total",
            Field::MemFree => "mem_free",
            Field::MemAvailable => "mem_available",
            Field::DiskTotal => "disk_total",
            Field::DiskUsed => "disk_used",
            Field::DiskFree => "disk_free",
            Field::All => "all",
        }
    }

    /// Parse a selector, treating anything unrecognized as [`Field::All`]
    pub fn from_selector(selector: &str) -> Field {
        match selector.parse() {
            Ok(field) => field,
            Err(UnknownField(name)) => {
                tracing::warn!(selector = %name, "unrecognized field selector, reporting all facts");
                Field::All
            }
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selector outside the recognized set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::FACTS
            .iter()
            .chain(std::iter::once(&Field::All))
            .find(|field| field.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
