//! Host Facts CLI
//!
//! Prints a `{"system_information": ...}` JSON report for one fact or all of
//! them.
//!
//! # Usage
//!
//! ```text
//! hostfacts                     # every fact
//! hostfacts --field mem_total   # one fact
//! hostfacts -f board --compact -vv
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};

use hostfacts::{Config, HostFactCollector};

#[derive(Parser)]
#[command(name = "hostfacts")]
#[command(about = "Report a snapshot of host facts as JSON")]
struct Cli {
    /// Fact to report: distro, board, kernel, cpu, mem_total, mem_free,
    /// mem_available, disk_total, disk_used, disk_free or all
    #[arg(short, long, env = "HOSTFACTS_FIELD", default_value = "all")]
    field: String,

    /// Config file (default: HOSTFACTS_CONFIG_PATH, ./hostfacts.toml, ~/.config/hostfacts/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    facts_common::init_tracing("hostfacts", cli.verbose)?;

    let config = Config::load(cli.config.as_deref())?;
    let collector = HostFactCollector::new(config);

    let report = collector.collect(&cli.field).await?;
    println!("{}", facts_common::render_json(&report, cli.compact)?);

    Ok(())
}
