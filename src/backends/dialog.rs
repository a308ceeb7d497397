//! Native dialogs for choosing the folder to scan and where to save the report
//!
//! The picker is a trait so the catalog flow can be driven without a display.

use std::path::PathBuf;

/// Title of the folder picker
pub const FOLDER_DIALOG_TITLE: &str = "Select your extracted DAT folder";

/// Title of the save dialog used by `--select`
pub const SAVE_DIALOG_TITLE: &str = "Select Output Location";

/// Blocking directory and file selection.
///
/// `None` means the user cancelled.
pub trait DirectoryPicker {
    fn pick_folder(&self, title: &str) -> Option<PathBuf>;

    fn pick_save_file(&self, title: &str, default_name: &str) -> Option<PathBuf>;
}

/// OS-native dialogs via rfd
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeDialog;

impl DirectoryPicker for NativeDialog {
    fn pick_folder(&self, title: &str) -> Option<PathBuf> {
        rfd::FileDialog::new().set_title(title).pick_folder()
    }

    fn pick_save_file(&self, title: &str, default_name: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(title)
            .set_file_name(default_name)
            .save_file()
    }
}
