//! Host fact snapshot

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Field;

/// Placeholder for a fact no source could provide
pub const SENTINEL: &str = "None";

/// Filesystem usage in whole GiB, `None` when statistics are unavailable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskUsage {
    pub total_gb: Option<u64>,
    pub used_gb: Option<u64>,
    pub free_gb: Option<u64>,
}

const GIB: u64 = 1024 * 1024 * 1024;

impl DiskUsage {
    /// All three figures degraded to the sentinel
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Derive usage from raw `statvfs` counters
    ///
    /// `used` counts every allocated block (`blocks - bfree`), `free` only what
    /// unprivileged users may allocate (`bavail`), matching `df`. Blocks
    /// reserved for root therefore appear in neither.
    pub fn from_statvfs(frsize: u64, blocks: u64, bfree: u64, bavail: u64) -> Self {
        let total = blocks.saturating_mul(frsize);
        let used = blocks.saturating_sub(bfree).saturating_mul(frsize);
        let free = bavail.saturating_mul(frsize);
        Self::from_bytes(total, used, free)
    }

    /// Convert byte counts, truncating to whole GiB
    pub fn from_bytes(total: u64, used: u64, free: u64) -> Self {
        Self {
            total_gb: Some(total / GIB),
            used_gb: Some(used / GIB),
            free_gb: Some(free / GIB),
        }
    }

    pub fn is_available(&self) -> bool {
        self.total_gb.is_some()
    }
}

/// A complete, immutable snapshot of host facts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostFacts {
    pub distro: String,
    /// Vendor, board name and chipset on one line
    pub board: String,
    pub kernel: String,
    pub cpu_count: usize,
    pub mem_total_mb: u64,
    pub mem_free_mb: u64,
    pub mem_available_mb: u64,
    pub disk: DiskUsage,
}

/// One fact with its unit; `Display` is the only place units are rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactValue {
    Text(String),
    Count(usize),
    Megabytes(u64),
    Gigabytes(Option<u64>),
}

impl fmt::Display for FactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactValue::Text(text) => f.write_str(text),
            FactValue::Count(n) => write!(f, "{}", n),
            FactValue::Megabytes(mb) => write!(f, "{} MB", mb),
            FactValue::Gigabytes(Some(gb)) => write!(f, "{} GB", gb),
            FactValue::Gigabytes(None) => write!(f, "{} GB", SENTINEL),
        }
    }
}

impl HostFacts {
    /// Typed value of a single fact; `None` for [`Field::All`]
    pub fn get(&self, field: Field) -> Option<FactValue> {
        let value = match field {
            Field::Distro => FactValue::Text(self.distro.clone()),
            Field::Board => FactValue::Text(self.board.clone()),
            Field::Kernel => FactValue::Text(self.kernel.clone()),
            Field::Cpu => FactValue::Count(self.cpu_count),
            Field::MemTotal => FactValue::Megabytes(self.mem_total_mb),
            Field::MemFree => FactValue::Megabytes(self.mem_free_mb),
            Field::MemAvailable => FactValue::Megabytes(self.mem_available_mb),
            Field::DiskTotal => FactValue::Gigabytes(self.disk.total_gb),
            Field::DiskUsed => FactValue::Gigabytes(self.disk.used_gb),
            Field::DiskFree => FactValue::Gigabytes(self.disk.free_gb),
            Field::All => return None,
        };
        Some(value)
    }

    /// Formatted value of a single fact; `None` for [`Field::All`]
    pub fn value_of(&self, field: Field) -> Option<String> {
        self.get(field).map(|value| value.to_string())
    }
}

/// Convert a kilobyte count to MB, rounding half to even
pub fn kb_to_mb(kb: u64) -> u64 {
    (kb as f64 / 1024.0).round_ties_even() as u64
}
