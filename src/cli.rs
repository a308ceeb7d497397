//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use crate::backends::dialog::NativeDialog;
use crate::core::paths::tool_output_dir;
use crate::flows::catalog::{run_catalog, CatalogRequest, OutputTarget};

/// creepdir - catalog every file in a folder by extension.
#[derive(Parser, Debug)]
#[command(name = "creepdir")]
#[command(
    author,
    version,
    about,
    long_about = r#"creepdir scans a folder recursively and writes a plain text report that
lists every file grouped by lowercased extension, extensions sorted alphabetically.

Run without arguments to choose the folder with a native folder picker. The
report is written to <directory of creepdir>/output/<folder name>.txt.

Report format:
    --- .ext ---
    relative/path/one
    relative/path/two

Examples:
    creepdir
    creepdir ./extracted
    creepdir ./extracted ./reports
    creepdir --select
"#
)]
pub struct Cli {
    /// Folder to scan (skips the folder picker).
    #[arg(
        value_name = "FOLDER",
        long_help = "Folder to scan. When omitted, a folder picker is opened.\n\n\
Relative paths are resolved against the current directory."
    )]
    pub folder: Option<PathBuf>,

    /// Where to write the report.
    #[arg(
        value_name = "OUTPUT",
        requires = "folder",
        long_help = "Where to write the report.\n\n\
If OUTPUT is an existing directory, the report is saved inside it as\n\
<folder name>.txt. Any other path is used as the report file itself.\n\
Defaults to <directory of creepdir>/output/<folder name>.txt."
    )]
    pub output: Option<PathBuf>,

    /// Pick both the folder and the output file with dialogs.
    #[arg(
        short,
        long,
        conflicts_with_all = ["folder", "output"],
        long_help = "Open a folder picker for the folder to scan, then a save dialog for\n\
the report location. Cannot be combined with FOLDER or OUTPUT."
    )]
    pub select: bool,

    /// Quiet mode (no diagnostics).
    #[arg(
        short,
        long,
        conflicts_with = "verbose",
        long_help = "Silence diagnostics on stderr. The result line (\"Saved to: ...\" or\n\
a cancellation notice) is still printed."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Enable debug diagnostics on stderr: selected folder, report path,\n\
skipped directory links, and file/group counts."
    )]
    pub verbose: bool,
}

impl Cli {
    /// Log level selected by -q/-v
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Off
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    /// Turn the parsed arguments into a catalog request
    pub fn to_request(&self) -> Result<CatalogRequest> {
        if self.select {
            return Ok(CatalogRequest {
                folder: None,
                output: OutputTarget::Prompt,
            });
        }

        let output = match &self.output {
            Some(path) => OutputTarget::Explicit(path.clone()),
            None => OutputTarget::ToolDir(tool_output_dir()?),
        };

        Ok(CatalogRequest {
            folder: self.folder.clone(),
            output,
        })
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let request = cli.to_request()?;
    log::debug!("Request: {:?}", request);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_catalog(&request, &NativeDialog, &mut out)?;
    Ok(())
}
