//! Processor count from the kernel's processor-info file

use std::path::Path;

use facts_common::{FactError, FactResult};

/// Count logical processors listed in `<proc_dir>/cpuinfo`
pub async fn get_cpu_count(proc_dir: &Path) -> FactResult<usize> {
    let path = proc_dir.join("cpuinfo");
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| FactError::io(&path, e))?;
    Ok(count_processors(&content))
}

/// Number of `processor : N` entries
pub fn count_processors(cpuinfo: &str) -> usize {
    cpuinfo
        .lines()
        .filter_map(|line| line.split_once(':'))
        .filter(|(key, _)| key.trim() == "processor")
        .count()
}
