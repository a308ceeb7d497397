//! Flows module - End-to-end operations combining backends and core
//!
//! Provides:
//! - catalog: Select a folder, group its files by extension, write the report

pub mod catalog;
