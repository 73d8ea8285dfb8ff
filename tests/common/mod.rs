#![allow(dead_code)]

use dirtree::tree::{render, RenderOptions};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Files hidden, Unicode glyphs, unlimited depth.
pub fn default_options() -> RenderOptions {
    RenderOptions::default()
}

/// Files shown, Unicode glyphs, unlimited depth.
pub fn with_files() -> RenderOptions {
    RenderOptions {
        show_files: true,
        ..RenderOptions::default()
    }
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    populate(tmp.path(), paths);
    tmp
}

/// Same as [`create_fixture`], rooted at an existing directory.
pub fn populate(root: &Path, paths: &[&str]) {
    for p in paths {
        let full = root.join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
}

/// Render `root` and return only the lines, asserting nothing failed.
pub fn render_lines(root: &Path, options: &RenderOptions) -> Vec<String> {
    let rendering = render(root, options);
    assert!(
        rendering.failures.is_empty(),
        "unexpected failures: {:?}",
        rendering.failures
    );
    rendering.lines
}

