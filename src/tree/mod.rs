//! Directory reading, ordering, and tree line rendering.

mod collate;
mod layout;
mod read;
pub(crate) mod walk;

use std::fmt;
use std::path::{Path, PathBuf};

pub use collate::NameOrder;
pub use layout::GlyphSet;
pub use read::{order_entries, read_children, Listing, WalkdirReader};
pub use walk::{render, render_with};

/// Kind of a directory entry as far as the tree is concerned.
///
/// Symbolic links are classified by their own type and therefore show up as files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    Directory,
    File,
}

/// One child of a directory, read fresh on every traversal step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// Display name (filename component only).
    pub name: String,
    /// Full filesystem path.
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirEntryInfo {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Options for a single render call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// List files as well as directories.
    pub show_files: bool,
    /// Draw connectors with ASCII characters instead of box-drawing glyphs.
    pub use_ascii: bool,
    /// Deepest level that is still listed; the root's children are level 0.
    /// `None` means unlimited.
    pub max_depth: Option<usize>,
}

/// A directory or entry that could not be read during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtreeFailure {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for SubtreeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}

/// Result of rendering a whole tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendering {
    /// Tree lines, depth-first pre-order, without trailing newlines.
    pub lines: Vec<String>,
    /// Every subtree or entry that was skipped because it could not be read.
    pub failures: Vec<SubtreeFailure>,
}

/// Source of directory listings, so the walk can be driven without a real filesystem.
pub trait DirReader {
    /// Direct children of `dir` in any order, or a failure if `dir` cannot be listed.
    fn read_children(&self, dir: &Path) -> Result<Listing, SubtreeFailure>;
}
