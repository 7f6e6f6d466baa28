// SPDX-License-Identifier: MIT
//
// Platform-aware data directory resolution.

use std::path::PathBuf;

/// Return the application data directory, creating it if needed.
///
/// Desktop builds use a conventional location; on mobile the platform bridge
/// would provide the documents directory instead.
pub fn data_dir() -> PathBuf {
    let base = dirs_fallback();
    let dir = base.join("scandeck");
    std::fs::create_dir_all(&dir).ok();
    dir
}

/// Return a subdirectory inside the data dir (e.g. "exports").
pub fn data_subdir(name: &str) -> PathBuf {
    let dir = data_dir().join(name);
    std::fs::create_dir_all(&dir).ok();
    dir
}

fn dirs_fallback() -> PathBuf {
    // Try XDG data dir, then fallback to home
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local").join("share");
    }
    // Last resort
    PathBuf::from("/tmp")
}
