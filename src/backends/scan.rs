//! File scanning backend
//!
//! Walks a folder with walkdir and groups every file it finds by extension.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::core::model::{CatalogError, ExtensionGroups};
use crate::core::paths::{extension_key, make_relative};

/// Files before subdirectories, then by name, so a tree always walks the same way
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Whether a walked entry is reported as a file.
///
/// Links are not followed: a link to a directory is skipped, anything else
/// (including a dangling link) counts as a file.
fn is_reportable(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    if file_type.is_symlink() {
        if let Ok(target) = fs::metadata(entry.path()) {
            if target.is_dir() {
                log::debug!("Skipping directory link {}", entry.path().display());
                return false;
            }
        }
    }
    true
}

/// Lazily enumerate every file under `root`.
///
/// Traversal errors are yielded rather than skipped.
pub fn walk_files(root: &Path) -> impl Iterator<Item = Result<DirEntry, CatalogError>> + '_ {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by(files_first)
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(e) if is_reportable(&e) => Some(Ok(e)),
            Ok(_) => None,
            Err(source) => Some(Err(CatalogError::Walk {
                root: root.to_path_buf(),
                source,
            })),
        })
}

/// Scan `root` and group every file's relative path by extension
pub fn scan_files(root: &Path) -> Result<ExtensionGroups, CatalogError> {
    log::debug!("Scanning {}", root.display());

    let mut groups = ExtensionGroups::new();

    for entry in walk_files(root) {
        let entry = entry?;
        let path = entry.path();

        let file_name = entry.file_name().to_string_lossy();
        let extension = extension_key(&file_name);

        // Every walked entry lives under root
        let relative = match make_relative(path, root) {
            Some(r) => r,
            None => continue,
        };

        groups.insert(extension, relative);
    }

    log::debug!(
        "Found {} files in {} extension groups",
        groups.file_count(),
        groups.group_count()
    );
    Ok(groups)
}
