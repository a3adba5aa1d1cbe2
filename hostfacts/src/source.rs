//! Fallback chains
//!
//! Optional facts are described as an ordered table of [`Source`]s. The first
//! source that yields a non-empty value wins; everything else (missing file,
//! missing tool, failing tool, empty output) falls through to the next entry.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::exec::run_tool;

/// Post-processing applied to a tool's stdout
pub type Extract = fn(&str) -> Option<String>;

/// One tier of a fallback chain
#[derive(Clone)]
pub enum Source {
    /// Contents of a file, trimmed
    File(PathBuf),
    /// Output of an external tool, passed through `extract`
    Command {
        program: String,
        args: Vec<String>,
        extract: Extract,
    },
}

impl Source {
    pub fn file(path: impl AsRef<Path>) -> Self {
        Source::File(path.as_ref().to_path_buf())
    }

    pub fn command(program: impl Into<String>, args: &[&str], extract: Extract) -> Self {
        Source::Command {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            extract,
        }
    }

    /// Read this source, returning `None` when it has nothing to offer
    pub async fn read(&self, timeout: Duration) -> Option<String> {
        let value = match self {
            Source::File(path) => match tokio::fs::read_to_string(path).await {
                Ok(content) => Some(content.trim().to_string()),
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "source file unavailable");
                    None
                }
            },
            Source::Command {
                program,
                args,
                extract,
            } => {
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                match run_tool(program, &args, timeout).await {
                    Ok(stdout) => extract(&stdout),
                    Err(e) => {
                        debug!(error = %e, "source tool unavailable");
                        None
                    }
                }
            }
        };

        value.filter(|v| !v.is_empty())
    }
}

/// Evaluate `sources` in order and return the first value found
pub async fn resolve_first(sources: &[Source], timeout: Duration) -> Option<String> {
    for source in sources {
        if let Some(value) = source.read(timeout).await {
            return Some(value);
        }
    }
    None
}

/// Default extraction: the whole output, trimmed
pub fn trimmed(stdout: &str) -> Option<String> {
    Some(stdout.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn first_line(stdout: &str) -> Option<String> {
        stdout.lines().next().map(str::to_string)
    }

    #[tokio::test]
    async fn test_first_present_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b"), "second\n").unwrap();
        std::fs::write(dir.path().join("c"), "third\n").unwrap();

        let chain = [
            Source::file(dir.path().join("a")),
            Source::file(dir.path().join("b")),
            Source::file(dir.path().join("c")),
        ];

        assert_eq!(resolve_first(&chain, TIMEOUT).await.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_empty_file_falls_through() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("blank"), "  \n").unwrap();
        std::fs::write(dir.path().join("real"), "value").unwrap();

        let chain = [
            Source::file(dir.path().join("blank")),
            Source::file(dir.path().join("real")),
        ];

        assert_eq!(resolve_first(&chain, TIMEOUT).await.as_deref(), Some("value"));
    }

    #[tokio::test]
    async fn test_exhausted_chain_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let chain = [
            Source::command("hostfacts-no-such-tool", &[], trimmed),
            Source::file(dir.path().join("missing")),
        ];

        assert_eq!(resolve_first(&chain, TIMEOUT).await, None);
    }

    #[tokio::test]
    async fn test_command_output_is_extracted() {
        let chain = [Source::command(
            "sh",
            &["-c", "printf 'one\\ntwo\\n'"],
            first_line,
        )];

        assert_eq!(resolve_first(&chain, TIMEOUT).await.as_deref(), Some("one"));
    }

    #[tokio::test]
    async fn test_failing_command_falls_through() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("fallback"), "from file").unwrap();

        let chain = [
            Source::command("sh", &["-c", "exit 1"], trimmed),
            Source::file(dir.path().join("fallback")),
        ];

        assert_eq!(
            resolve_first(&chain, TIMEOUT).await.as_deref(),
            Some("from file")
        );
    }
}
