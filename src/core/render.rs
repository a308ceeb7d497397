//! Report renderer
//!
//! Renders ExtensionGroups as the plain text report:
//!
//! ```text
//! --- .ext ---
//! relative/path
//!
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::model::{CatalogError, ExtensionGroups};

/// Header line for an extension group
pub fn header_line(extension: &str) -> String {
    format!("--- {} ---", extension)
}

/// Write the report for a group table to any writer
pub fn render_report<W: Write>(groups: &ExtensionGroups, out: &mut W) -> std::io::Result<()> {
    for (extension, paths) in groups {
        writeln!(out, "{}", header_line(extension))?;
        for path in paths {
            writeln!(out, "{}", path)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Render the report into a string
#[allow(dead_code)]
pub fn render_to_string(groups: &ExtensionGroups) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = render_report(groups, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write the report to `path`, creating parent directories and replacing any existing file
pub fn save_report(groups: &ExtensionGroups, path: &Path) -> Result<(), CatalogError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CatalogError::CreateOutputDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let write_err = |source: std::io::Error| CatalogError::WriteReport {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    render_report(groups, &mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    log::debug!(
        "Wrote {} groups ({} files) to {}",
        groups.group_count(),
        groups.file_count(),
        path.display()
    );
    Ok(())
}
