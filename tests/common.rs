//! Shared test utilities for integration tests.
//!
//! Provides helpers for creating temporary post directories used across
//! multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

/// Creates temporary directory holding the given posts.
///
/// # Arguments
///
/// * `posts`: Pairs of file name and markdown content
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn create_posts_dir(posts: &[(&str, &str)]) -> Result<TempDir> {
    let dir = TempDir::new()?;
    for (name, content) in posts {
        write_file(dir.path(), name, content)?;
    }
    Ok(dir)
}

/// Writes file, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
