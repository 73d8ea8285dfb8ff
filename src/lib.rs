#![forbid(unsafe_code)]
//! dirtree — print a directory hierarchy as a Windows `tree` style listing.

pub mod cli;
pub mod error;
pub mod output;
pub mod tree;

use error::{Result, TreeError};
use std::path::{Path, PathBuf};

/// Resolve `path` to an absolute directory, rejecting missing paths and non-directories.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let resolved = path
        .canonicalize()
        .map_err(|source| TreeError::RootNotFound {
            path: path.to_path_buf(),
            source,
        })?;
    if !resolved.is_dir() {
        return Err(TreeError::NotADirectory { path: resolved });
    }
    Ok(resolved)
}
