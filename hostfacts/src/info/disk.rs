//! Filesystem usage for the configured mount point

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::types::DiskUsage;

/// Usage of the filesystem holding `mount_point`
///
/// Degrades to [`DiskUsage::unavailable`] only when the statistics query
/// itself fails.
pub async fn get_disk_usage(mount_point: &Path) -> DiskUsage {
    let mount_point: PathBuf = mount_point.to_path_buf();
    let target = mount_point.clone();

    match tokio::task::spawn_blocking(move || query_statvfs(&target)).await {
        Ok(Ok(usage)) => usage,
        Ok(Err(e)) => {
            warn!(mount_point = %mount_point.display(), error = %e, "filesystem statistics unavailable");
            DiskUsage::unavailable()
        }
        Err(e) => {
            warn!(error = %e, "filesystem statistics query failed");
            DiskUsage::unavailable()
        }
    }
}

#[cfg(unix)]
fn query_statvfs(path: &Path) -> Result<DiskUsage, String> {
    let stats = nix::sys::statvfs::statvfs(path).map_err(|e| e.to_string())?;

    Ok(DiskUsage::from_statvfs(
        stats.fragment_size() as u64,
        stats.blocks() as u64,
        stats.blocks_free() as u64,
        stats.blocks_available() as u64,
    ))
}

#[cfg(not(unix))]
fn query_statvfs(_path: &Path) -> Result<DiskUsage, String> {
    Err("statvfs is not supported on this platform".to_string())
}
