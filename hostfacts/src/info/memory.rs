//! Memory totals from the kernel's memory-info file

use std::path::Path;

use facts_common::{FactError, FactResult};

use crate::types::kb_to_mb;

pub const MEM_TOTAL: &str = "MemTotal";
pub const MEM_FREE: &str = "MemFree";
pub const MEM_AVAILABLE: &str = "MemAvailable";

/// Read `key` from `<proc_dir>/meminfo` and convert kB to MB
pub async fn get_memory_mb(proc_dir: &Path, key: &str) -> FactResult<u64> {
    let path = proc_dir.join("meminfo");
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| FactError::io(&path, e))?;

    let raw = meminfo_value(&content, key).ok_or_else(|| FactError::missing_key(key, &path))?;
    let kb: u64 = raw
        .parse()
        .map_err(|_| FactError::parse(format!("{} value", key), raw))?;

    Ok(kb_to_mb(kb))
}

/// Raw numeric column for `key` in a `Key:   1234 kB` listing
pub fn meminfo_value<'a>(meminfo: &'a str, key: &str) -> Option<&'a str> {
    meminfo.lines().find_map(|line| {
        let (name, rest) = line.split_once(':')?;
        if name.trim() != key {
            return None;
        }
        rest.split_whitespace().next()
    })
}
