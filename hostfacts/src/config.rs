//! Collector configuration
//!
//! Every key is optional; the defaults describe a stock Linux host. Paths and
//! tool names are configurable so a collector can be pointed at a fake host
//! tree.

use std::path::{Path, PathBuf};
use std::time::Duration;

use facts_common::{FactError, FactResult};
use serde::{Deserialize, Serialize};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "HOSTFACTS_CONFIG_PATH";

/// Top-level configuration (from hostfacts.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub disk: DiskConfig,
}

/// Locations of the pseudo-files and release files that are read directly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Kernel process-info mount (cpuinfo, meminfo)
    #[serde(default = "default_proc_dir")]
    pub proc_dir: PathBuf,

    /// Hardware identity files (board_vendor, sys_vendor, ...)
    #[serde(default = "default_dmi_dir")]
    pub dmi_dir: PathBuf,

    /// Vendor release file used when no release-query tool is installed
    #[serde(default = "default_release_file")]
    pub release_file: PathBuf,
}

/// External tools consulted for facts without a native source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_release_query")]
    pub release_query: String,

    #[serde(default = "default_pci_list")]
    pub pci_list: String,

    /// Upper bound for each tool invocation, must be non-zero
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskConfig {
    /// Mount point whose filesystem usage is reported
    #[serde(default = "default_mount_point")]
    pub mount_point: PathBuf,
}

// Default value functions
fn default_proc_dir() -> PathBuf {
    PathBuf::from("/proc")
}

fn default_dmi_dir() -> PathBuf {
    PathBuf::from("/sys/devices/virtual/dmi/id")
}

fn default_release_file() -> PathBuf {
    PathBuf::from("/etc/redhat-release")
}

fn default_release_query() -> String {
    "lsb_release".to_string()
}

fn default_pci_list() -> String {
    "lspci".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_mount_point() -> PathBuf {
    PathBuf::from("/")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            proc_dir: default_proc_dir(),
            dmi_dir: default_dmi_dir(),
            release_file: default_release_file(),
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            release_query: default_release_query(),
            pci_list: default_pci_list(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            mount_point: default_mount_point(),
        }
    }
}

impl ToolsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load config from an explicit path or the standard locations
    ///
    /// Search order:
    /// 1. `explicit` (the `--config` flag)
    /// 2. `HOSTFACTS_CONFIG_PATH` env var
    /// 3. `./hostfacts.toml`
    /// 4. `$XDG_CONFIG_HOME/hostfacts/config.toml`
    /// 5. `~/.hostfacts.toml`
    /// 6. Default config if none found
    ///
    /// A file named by 1 or 2 must exist and parse. Discovered files that fail
    /// to parse are skipped with a warning.
    pub fn load(explicit: Option<&Path>) -> FactResult<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(&env_path);
            tracing::info!("Loading config from {}={}", CONFIG_ENV, path.display());
            return Self::load_from_path(&path);
        }

        for path in Self::search_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from_path(&path) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    return Ok(config);
                }
                Err(e) => {
                    tracing::warn!("Skipping config {}: {}", path.display(), e);
                }
            }
        }

        tracing::debug!("Using default configuration");
        Ok(Config::default())
    }

    /// Load from a specific path
    pub fn load_from_path(path: &Path) -> FactResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FactError::io(path, e))?;
        Self::from_toml(&content).map_err(|message| FactError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    fn from_toml(content: &str) -> Result<Self, String> {
        let config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.tools.timeout_secs == 0 {
            return Err("tools.timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut config_paths = vec![PathBuf::from("hostfacts.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            config_paths.push(config_dir.join("hostfacts").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            config_paths.push(home.join(".hostfacts.toml"));
        }

        config_paths
    }
}
