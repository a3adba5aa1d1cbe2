//! Motherboard identity
//!
//! Composed as `"<vendor> <board>, <chipset>"`, each part resolved through
//! its own fallback chain and defaulting to the sentinel.

use std::path::Path;

use crate::config::Config;
use crate::source::{resolve_first, Source};
use crate::types::SENTINEL;

/// Host bridge address queried for the chipset description
const HOST_BRIDGE: &str = "0:0.0";

fn vendor_chain(dmi_dir: &Path) -> [Source; 2] {
    [
        Source::file(dmi_dir.join("board_vendor")),
        Source::file(dmi_dir.join("sys_vendor")),
    ]
}

fn board_chain(dmi_dir: &Path) -> [Source; 2] {
    [
        Source::file(dmi_dir.join("board_name")),
        Source::file(dmi_dir.join("chassis_vendor")),
    ]
}

fn chipset_chain(pci_tool: &str) -> [Source; 1] {
    [Source::command(
        pci_tool,
        &["-s", HOST_BRIDGE, "-xxx"],
        chipset_from_lspci,
    )]
}

pub async fn get_baseboard(config: &Config) -> String {
    let timeout = config.tools.timeout();
    let dmi_dir = &config.paths.dmi_dir;

    let vendor_sources = vendor_chain(dmi_dir);
    let board_sources = board_chain(dmi_dir);
    let chipset_sources = chipset_chain(&config.tools.pci_list);

    let (vendor, board, chipset) = tokio::join!(
        resolve_first(&vendor_sources, timeout),
        resolve_first(&board_sources, timeout),
        resolve_first(&chipset_sources, timeout),
    );

    compose(vendor, board, chipset)
}

pub fn compose(vendor: Option<String>, board: Option<String>, chipset: Option<String>) -> String {
    let part = |value: Option<String>| value.unwrap_or_else(|| SENTINEL.to_string());
    format!("{} {}, {}", part(vendor), part(board), part(chipset))
}

/// Device description from the first line of an `lspci -xxx` dump
///
/// `00:00.0 Host bridge: Intel Corporation 8th Gen Core` yields
/// `Intel Corporation 8th Gen Core`.
pub fn chipset_from_lspci(stdout: &str) -> Option<String> {
    let line = stdout.lines().next()?;
    let without_slot = line.split_once(' ').map_or(line, |(_, rest)| rest);
    let description = without_slot
        .split_once(':')
        .map_or(without_slot, |(_, rest)| rest);
    Some(description.trim().to_string())
}
