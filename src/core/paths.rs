//! Path utilities
//!
//! Extension classification, root-relative paths and report locations.
//! Paths keep the host separator; nothing here rewrites '\\' or '/'.

use std::path::{Path, PathBuf};

use crate::core::model::CatalogError;

/// Name of the directory, next to the executable, that receives reports
pub const OUTPUT_DIR_NAME: &str = "output";

/// Report stem used when the scanned folder has no usable name (e.g. `/`)
const FALLBACK_STEM: &str = "output";

/// Extension key for a file name: the text from the last '.' onward, lowercased.
///
/// Leading dots do not start an extension, so `.bashrc` and `..foo` have none.
/// Returns an empty string when there is no extension.
pub fn extension_key(file_name: &str) -> String {
    let stem_start = file_name.trim_start_matches('.');
    match stem_start.rfind('.') {
        Some(idx) => stem_start[idx..].to_lowercase(),
        None => String::new(),
    }
}

/// Make a path relative to the root directory, keeping host separators
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root)
        .ok()
        .map(|p| p.to_string_lossy().into_owned())
}

/// Resolve a command-line path against the current directory
pub fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// File stem for the report of a scanned folder (its base name)
pub fn report_stem(folder: &Path) -> String {
    if let Some(name) = folder.file_name() {
        return name.to_string_lossy().into_owned();
    }

    // `..` and friends have no file name until resolved
    folder
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| FALLBACK_STEM.to_string())
}

/// `<stem>.txt` for a scanned folder
pub fn report_file_name(folder: &Path) -> String {
    format!("{}.txt", report_stem(folder))
}

/// Report path inside an output directory
pub fn report_path_in(output_dir: &Path, folder: &Path) -> PathBuf {
    output_dir.join(report_file_name(folder))
}

/// The `output` directory next to the running executable
pub fn tool_output_dir() -> Result<PathBuf, CatalogError> {
    let exe = std::env::current_exe().map_err(CatalogError::ToolLocation)?;
    let tool_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(tool_dir.join(OUTPUT_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_key_lowercases() {
        assert_eq!(extension_key("a.TXT"), ".txt");
        assert_eq!(extension_key("b.txt"), ".txt");
        assert_eq!(extension_key("Photo.JpEg"), ".jpeg");
    }

    #[test]
    fn test_extension_key_uses_last_dot() {
        assert_eq!(extension_key("archive.tar.GZ"), ".gz");
        assert_eq!(extension_key("v1.2.3.bin"), ".bin");
    }

    #[test]
    fn test_extension_key_none() {
        assert_eq!(extension_key("README"), "");
        assert_eq!(extension_key(""), "");
    }

    #[test]
    fn test_extension_key_leading_dots() {
        assert_eq!(extension_key(".bashrc"), "");
        assert_eq!(extension_key("..foo"), "");
        assert_eq!(extension_key("..."), "");
        assert_eq!(extension_key(".config.json"), ".json");
    }

    #[test]
    fn test_extension_key_trailing_dot() {
        assert_eq!(extension_key("name."), ".");
    }

    #[test]
    fn test_extension_key_unicode() {
        assert_eq!(extension_key("数据.ÄBC"), ".äbc");
    }

    #[test]
    fn test_make_relative() {
        let root = Path::new("/project");
        let path = Path::new("/project/sub/c.txt");
        assert_eq!(
            make_relative(path, root),
            Some(Path::new("sub").join("c.txt").to_string_lossy().into_owned())
        );
    }

    #[test]
    fn test_make_relative_not_under_root() {
        let root = Path::new("/project");
        let path = Path::new("/other/file.rs");
        assert_eq!(make_relative(path, root), None);
    }

    #[test]
    fn test_make_relative_preserves_case() {
        let root = Path::new("/project");
        let path = Path::new("/project/a.TXT");
        assert_eq!(make_relative(path, root), Some("a.TXT".to_string()));
    }

    #[test]
    fn test_absolutize_relative() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(absolutize(Path::new("data")).unwrap(), cwd.join("data"));
    }

    #[test]
    fn test_absolutize_absolute() {
        let temp = tempfile::tempdir().unwrap();
        assert_eq!(absolutize(temp.path()).unwrap(), temp.path());
    }

    #[test]
    fn test_report_stem() {
        assert_eq!(report_stem(Path::new("/data/extracted_dat")), "extracted_dat");
        assert_eq!(report_stem(Path::new("/data/extracted_dat/")), "extracted_dat");
    }

    #[test]
    fn test_report_stem_root_falls_back() {
        assert_eq!(report_stem(Path::new("/")), "output");
    }

    #[test]
    fn test_report_stem_parent_dir_resolves() {
        let temp = tempfile::tempdir().unwrap();
        let inner = temp.path().join("inner");
        std::fs::create_dir(&inner).unwrap();

        let expected = temp
            .path()
            .canonicalize()
            .unwrap()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        assert_eq!(report_stem(&inner.join("..")), expected);
    }

    #[test]
    fn test_report_path_in() {
        let out = Path::new("/tool/output");
        assert_eq!(
            report_path_in(out, Path::new("/data/Game Files")),
            PathBuf::from("/tool/output/Game Files.txt")
        );
    }

    #[test]
    fn test_tool_output_dir_is_next_to_executable() {
        let dir = tool_output_dir().unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(dir.parent(), exe.parent());
        assert!(dir.ends_with(OUTPUT_DIR_NAME));
    }
}
