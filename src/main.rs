//! creepdir - Catalog the files of a folder by extension
//!
//! creepdir provides:
//! - A native folder picker (or a folder given on the command line)
//! - Recursive traversal with every file grouped by lowercased extension
//! - A sorted plain text report written next to the executable

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .init();

    cli::run(cli)
}
