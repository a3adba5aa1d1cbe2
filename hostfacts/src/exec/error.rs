//! Error types for external tool invocations

use thiserror::Error;

/// Errors that can occur when running an external tool
#[derive(Error, Debug)]
pub enum ToolError {
    /// The tool is not installed or not in PATH
    #[error("{0} not found in PATH")]
    NotFound(String),

    /// The tool exists but could not be started or awaited
    #[error("failed to run {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool did not finish within the configured bound
    #[error("{program} timed out after {millis} ms")]
    Timeout { program: String, millis: u128 },

    /// The tool exited with a non-zero status
    #[error("{program} failed (exit code {code}): {stderr}")]
    Failed {
        program: String,
        code: i32,
        stderr: String,
    },
}

/// Result type alias for tool invocations
pub type ToolResult<T> = Result<T, ToolError>;
