//! Catalog Model
//!
//! The extension group table built by a scan, and the error taxonomy shared
//! by every step of a catalog run.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Relative file paths grouped by lowercased extension.
///
/// Keys iterate in ascending byte order, which is the order the report uses.
/// Within a key, paths keep the order they were inserted in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionGroups {
    groups: BTreeMap<String, Vec<String>>,
}

impl ExtensionGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a relative path under its extension key, creating the group on first use
    pub fn insert(&mut self, extension: impl Into<String>, relative_path: impl Into<String>) {
        self.groups
            .entry(extension.into())
            .or_default()
            .push(relative_path.into());
    }

    /// Paths recorded under an extension key
    #[allow(dead_code)]
    pub fn get(&self, extension: &str) -> Option<&[String]> {
        self.groups.get(extension).map(Vec::as_slice)
    }

    /// Number of distinct extension keys
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of recorded paths across all groups
    pub fn file_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Extension keys in report order
    #[allow(dead_code)]
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a ExtensionGroups {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Failures that end a catalog run
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("folder '{}' does not exist", path.display())]
    FolderNotFound { path: PathBuf },

    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to scan '{}'", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to create output directory '{}'", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report '{}'", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to locate the creepdir executable")]
    ToolLocation(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order_within_group() {
        let mut groups = ExtensionGroups::new();
        groups.insert(".txt", "z.txt");
        groups.insert(".txt", "a.txt");
        groups.insert(".txt", "m.txt");

        assert_eq!(groups.get(".txt").unwrap(), ["z.txt", "a.txt", "m.txt"]);
    }

    #[test]
    fn test_extensions_are_sorted() {
        let mut groups = ExtensionGroups::new();
        groups.insert(".zip", "a.zip");
        groups.insert("", "README");
        groups.insert(".bin", "x.bin");
        groups.insert(".Bin", "y.Bin");

        let keys: Vec<_> = groups.extensions().collect();
        assert_eq!(keys, vec!["", ".Bin", ".bin", ".zip"]);
    }

    #[test]
    fn test_no_deduplication() {
        let mut groups = ExtensionGroups::new();
        groups.insert(".rs", "main.rs");
        groups.insert(".rs", "main.rs");

        assert_eq!(groups.file_count(), 2);
        assert_eq!(groups.group_count(), 1);
    }

    #[test]
    fn test_empty_table() {
        let groups = ExtensionGroups::new();
        assert!(groups.is_empty());
        assert_eq!(groups.file_count(), 0);
        assert_eq!(groups.get(""), None);
    }

    #[test]
    fn test_error_messages_name_the_path() {
        let err = CatalogError::NotADirectory {
            path: PathBuf::from("/tmp/notes.txt"),
        };
        assert_eq!(err.to_string(), "'/tmp/notes.txt' is not a directory");

        let err = CatalogError::FolderNotFound {
            path: PathBuf::from("/missing"),
        };
        assert_eq!(err.to_string(), "folder '/missing' does not exist");
    }
}
