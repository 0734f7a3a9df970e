/*!
 * Common test utilities for the subconv test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Three-cue SRT used across tests
pub const SAMPLE_SRT: &str = "1
00:00:01,000 --> 00:00:04,000
This is a test subtitle.

2
00:00:05,000 --> 00:00:09,500
It contains
two lines.

3
00:00:10,000 --> 00:00:14,250
For testing purposes.
";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample subtitle file for testing
pub fn create_test_subtitle(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_SRT)
}

/// Asserts two second values agree to the millisecond
pub fn assert_seconds_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.0005,
        "expected {} seconds, got {}",
        expected,
        actual
    );
}
