//! Host fact collector
//!
//! One accessor per fact category plus the aggregate and field-filtered
//! entry points used by the CLI.

use facts_common::FactResult;
use tracing::debug;

use crate::config::Config;
use crate::info;
use crate::info::memory::{MEM_AVAILABLE, MEM_FREE, MEM_TOTAL};
use crate::types::{DiskUsage, FactValue, Field, HostFacts, Report};

/// Reads host facts from the sources described by a [`Config`]
///
/// Every call reads fresh host state; nothing is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct HostFactCollector {
    config: Config,
}

impl HostFactCollector {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ========================================================================
    // Required facts
    // ========================================================================

    pub async fn cpu_count(&self) -> FactResult<usize> {
        info::cpu::get_cpu_count(&self.config.paths.proc_dir).await
    }

    pub async fn mem_total_mb(&self) -> FactResult<u64> {
        info::memory::get_memory_mb(&self.config.paths.proc_dir, MEM_TOTAL).await
    }

    pub async fn mem_free_mb(&self) -> FactResult<u64> {
        info::memory::get_memory_mb(&self.config.paths.proc_dir, MEM_FREE).await
    }

    pub async fn mem_available_mb(&self) -> FactResult<u64> {
        info::memory::get_memory_mb(&self.config.paths.proc_dir, MEM_AVAILABLE).await
    }

    pub async fn kernel(&self) -> FactResult<String> {
        info::kernel::get_kernel_release()
    }

    // ========================================================================
    // Optional facts (fall back, never fail)
    // ========================================================================

    pub async fn distro(&self) -> String {
        info::distro::get_distro(&self.config).await
    }

    pub async fn baseboard(&self) -> String {
        info::board::get_baseboard(&self.config).await
    }

    pub async fn disk_usage(&self) -> DiskUsage {
        info::disk::get_disk_usage(&self.config.disk.mount_point).await
    }

    // ========================================================================
    // Aggregate
    // ========================================================================

    /// Collect every fact
    ///
    /// Accessors run concurrently and all of them complete before the first
    /// required-fact error, if any, is returned.
    pub async fn collect_all(&self) -> FactResult<HostFacts> {
        let (cpu_count, mem_total, mem_free, mem_available, kernel, distro, board, disk) = tokio::join!(
            self.cpu_count(),
            self.mem_total_mb(),
            self.mem_free_mb(),
            self.mem_available_mb(),
            self.kernel(),
            self.distro(),
            self.baseboard(),
            self.disk_usage(),
        );

        Ok(HostFacts {
            distro,
            board,
            kernel: kernel?,
            cpu_count: cpu_count?,
            mem_total_mb: mem_total?,
            mem_free_mb: mem_free?,
            mem_available_mb: mem_available?,
            disk,
        })
    }

    /// Formatted value of one fact, reading only the sources it needs
    ///
    /// Returns `None` for [`Field::All`].
    pub async fn fact(&self, field: Field) -> FactResult<Option<String>> {
        let value = match field {
            Field::Distro => FactValue::Text(self.distro().await),
            Field::Board => FactValue::Text(self.baseboard().await),
            Field::Kernel => FactValue::Text(self.kernel().await?),
            Field::Cpu => FactValue::Count(self.cpu_count().await?),
            Field::MemTotal => FactValue::Megabytes(self.mem_total_mb().await?),
            Field::MemFree => FactValue::Megabytes(self.mem_free_mb().await?),
            Field::MemAvailable => FactValue::Megabytes(self.mem_available_mb().await?),
            Field::DiskTotal => FactValue::Gigabytes(self.disk_usage().await.total_gb),
            Field::DiskUsed => FactValue::Gigabytes(self.disk_usage().await.used_gb),
            Field::DiskFree => FactValue::Gigabytes(self.disk_usage().await.free_gb),
            Field::All => return Ok(None),
        };
        Ok(Some(value.to_string()))
    }

    /// Build the report for a field selector
    ///
    /// `all` and any unrecognized selector produce the full fact sheet.
    pub async fn collect(&self, selector: &str) -> FactResult<Report> {
        let field = Field::from_selector(selector);
        tracing::info!(%field, "collecting host facts");

        match self.fact(field).await? {
            Some(value) => {
                debug!(%field, %value, "collected single fact");
                Ok(Report::single(field, &value))
            }
            None => {
                let facts = self.collect_all().await?;
                debug!(?facts, "collected all facts");
                Ok(Report::all(&facts))
            }
        }
    }
}
