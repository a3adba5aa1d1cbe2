//! Error handling for fact collectors
//!
//! Only required sources (processor info, memory info, kernel identity) and
//! explicitly requested configuration surface errors. Optional sources fall
//! back locally and never produce a [`FactError`].

use std::path::{Path, PathBuf};

/// Errors that can abort a collection request
#[derive(Debug, thiserror::Error)]
pub enum FactError {
    /// A required pseudo-file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A key was absent from a key/value pseudo-file
    #[error("{key} not found in {}", .path.display())]
    MissingKey { key: String, path: PathBuf },

    /// A value was present but could not be interpreted
    #[error("invalid {what}: {value:?}")]
    Parse { what: String, value: String },

    /// The OS did not report a required fact
    #[error("{0} is not reported by this host")]
    Unavailable(&'static str),

    /// A configuration file was explicitly requested but is unusable
    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// Report serialization failed
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FactError {
    /// Wrap an I/O error with the path that produced it
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        FactError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn missing_key(key: impl Into<String>, path: impl AsRef<Path>) -> Self {
        FactError::MissingKey {
            key: key.into(),
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn parse(what: impl Into<String>, value: impl Into<String>) -> Self {
        FactError::Parse {
            what: what.into(),
            value: value.into(),
        }
    }
}

/// Result type for fact collection
pub type FactResult<T> = Result<T, FactError>;
