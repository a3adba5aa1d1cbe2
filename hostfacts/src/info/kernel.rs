//! Kernel release

use facts_common::{FactError, FactResult};
use sysinfo::System;

/// Kernel release as reported by `uname`
pub fn get_kernel_release() -> FactResult<String> {
    System::kernel_version()
        .map(|release| release.trim().to_string())
        .filter(|release| !release.is_empty())
        .ok_or(FactError::Unavailable("kernel release"))
}
