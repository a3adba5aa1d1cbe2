//! Async executor for external tools

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, instrument};

use super::error::{ToolError, ToolResult};

/// Run `program` with `args` and return its stdout
///
/// stdin is closed and the child is killed if `timeout` elapses first.
///
/// # Errors
///
/// - [`ToolError::NotFound`] if the executable does not exist
/// - [`ToolError::Timeout`] if the child outlives `timeout`
/// - [`ToolError::Failed`] on a non-zero exit status
/// - [`ToolError::Io`] for any other spawn or wait failure
#[instrument(skip(timeout), fields(cmd = %format!("{} {}", program, args.join(" "))))]
pub async fn run_tool(program: &str, args: &[&str], timeout: Duration) -> ToolResult<String> {
    debug!("executing: {} {}", program, args.join(" "));

    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ToolError::NotFound(program.to_string())
            } else {
                ToolError::Io {
                    program: program.to_string(),
                    source: e,
                }
            }
        })?;

    let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(result) => result.map_err(|e| ToolError::Io {
            program: program.to_string(),
            source: e,
        })?,
        // The child is dropped (killed) together with the wait future
        Err(_elapsed) => {
            return Err(ToolError::Timeout {
                program: program.to_string(),
                millis: timeout.as_millis(),
            });
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let code = output.status.code().unwrap_or(-1);
        debug!(code, stderr = %stderr, "tool exited unsuccessfully");
        return Err(ToolError::Failed {
            program: program.to_string(),
            code,
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
