//! Backends module - File system traversal and user dialogs
//!
//! Provides:
//! - scan: Recursive file enumeration with walkdir
//! - dialog: Native folder/save pickers with rfd

pub mod dialog;
pub mod scan;
