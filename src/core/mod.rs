//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Extension group table and error types
//! - Report rendering
//! - Path and extension utilities

pub mod model;
pub mod paths;
pub mod render;
