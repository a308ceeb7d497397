//! Catalog flow - Pick a folder, group its files by extension, save the report
//!
//! The whole run is sequential: select, scan, write. Cancelling a dialog ends
//! the run early without writing anything.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::backends::dialog::{DirectoryPicker, FOLDER_DIALOG_TITLE, SAVE_DIALOG_TITLE};
use crate::backends::scan::scan_files;
use crate::core::model::CatalogError;
use crate::core::paths::{absolutize, report_file_name, report_path_in};
use crate::core::render::save_report;

/// Where the report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// `<dir>/<folder name>.txt`, with `dir` being the tool's output directory
    ToolDir(PathBuf),
    /// A path from the command line: an existing directory receives
    /// `<folder name>.txt`, anything else is the report file itself
    Explicit(PathBuf),
    /// Ask with a save dialog
    Prompt,
}

/// One catalog run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    /// Folder to scan; `None` opens the folder picker
    pub folder: Option<PathBuf>,
    pub output: OutputTarget,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Saved(PathBuf),
    NoFolder,
    NoOutput,
}

/// Check a command-line folder and make it absolute
fn resolve_folder(folder: &Path) -> Result<PathBuf> {
    let folder = absolutize(folder).context("failed to resolve the folder path")?;

    if !folder.exists() {
        return Err(CatalogError::FolderNotFound { path: folder }.into());
    }
    if !folder.is_dir() {
        return Err(CatalogError::NotADirectory { path: folder }.into());
    }
    Ok(folder)
}

/// Resolve the report path; `None` if the save dialog was cancelled
fn resolve_output<P: DirectoryPicker + ?Sized>(
    target: &OutputTarget,
    folder: &Path,
    picker: &P,
) -> Result<Option<PathBuf>> {
    let path = match target {
        OutputTarget::ToolDir(dir) => Some(report_path_in(dir, folder)),
        OutputTarget::Explicit(path) => {
            let path = absolutize(path).context("failed to resolve the output path")?;
            if path.is_dir() {
                Some(report_path_in(&path, folder))
            } else {
                Some(path)
            }
        }
        OutputTarget::Prompt => {
            picker.pick_save_file(SAVE_DIALOG_TITLE, &report_file_name(folder))
        }
    };
    Ok(path)
}

/// Run the catalog, printing the result line to `out`
pub fn run_catalog<P, W>(request: &CatalogRequest, picker: &P, out: &mut W) -> Result<Outcome>
where
    P: DirectoryPicker + ?Sized,
    W: Write,
{
    let folder = match &request.folder {
        Some(folder) => resolve_folder(folder)?,
        None => match picker.pick_folder(FOLDER_DIALOG_TITLE) {
            Some(folder) => absolutize(&folder).context("failed to resolve the folder path")?,
            None => {
                writeln!(out, "No folder selected.")?;
                return Ok(Outcome::NoFolder);
            }
        },
    };
    log::debug!("Selected folder {}", folder.display());

    let output_path = match resolve_output(&request.output, &folder, picker)? {
        Some(path) => path,
        None => {
            writeln!(out, "No output location selected.")?;
            return Ok(Outcome::NoOutput);
        }
    };
    log::debug!("Report path {}", output_path.display());

    let groups = scan_files(&folder)?;
    save_report(&groups, &output_path)?;

    writeln!(out, "Saved to: {}", output_path.display())?;
    Ok(Outcome::Saved(output_path))
}
