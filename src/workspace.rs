//! Locates candidate repositories under a workspace root.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WsrError};

/// Immediate child directories of `root`, sorted by name so downstream
/// processing order (and the cross-repository tie-break) is deterministic.
pub fn list_candidates(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(WsrError::WorkspaceNotFound(root.to_path_buf()));
    }

    let mut dirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        }
    }
    dirs.sort();
    Ok(dirs)
}
