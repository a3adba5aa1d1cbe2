//! Distribution name
//!
//! Tier 1 is the release-query tool (`lsb_release -sirc`), tier 2 the vendor
//! release file, tier 3 an empty string.

use crate::config::Config;
use crate::source::{resolve_first, Source};

pub async fn get_distro(config: &Config) -> String {
    let chain = [
        Source::command(&config.tools.release_query, &["-sirc"], join_lines),
        Source::file(&config.paths.release_file),
    ];

    resolve_first(&chain, config.tools.timeout())
        .await
        .unwrap_or_default()
}

/// `Ubuntu\n22.04\njammy\n` -> `Ubuntu 22.04 jammy`
pub fn join_lines(stdout: &str) -> Option<String> {
    let joined = stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    Some(joined)
}
