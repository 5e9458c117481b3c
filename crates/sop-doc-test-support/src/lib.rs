//! Shared test harness utilities for sop-doc crates.

use std::fs;
use std::path::{Path, PathBuf};

use sop_doc_config::Config;

/// Returns the built-in default configuration for tests.
pub fn test_config() -> Config {
    Config::default()
}

/// Write `contents` to `relative` under `dir`, creating parent directories
/// as needed. Returns the full path.
pub fn setup_file(dir: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directory");
    }
    fs::write(&path, contents).expect("write file");
    path
}
