use super::collate::NameOrder;
use super::{DirEntryInfo, DirReader, EntryKind, SubtreeFailure};
use std::cmp::Ordering;
use std::path::Path;
use walkdir::WalkDir;

/// Default [`DirReader`] backed by walkdir.
pub struct WalkdirReader;

impl DirReader for WalkdirReader {
    fn read_children(&self, dir: &Path) -> Result<Listing, SubtreeFailure> {
        read_children(dir)
    }
}

/// Direct children of one directory.
#[derive(Debug, Default)]
pub struct Listing {
    pub entries: Vec<DirEntryInfo>,
    /// Children that were seen but could not be inspected.
    pub skipped: Vec<SubtreeFailure>,
}

/// Read the direct children of `dir`, in native enumeration order.
///
/// Fails only when the directory itself cannot be listed. Symlinks are not followed.
pub fn read_children(dir: &Path) -> Result<Listing, SubtreeFailure> {
    let walker = WalkDir::new(dir).max_depth(1).follow_links(false);

    let mut listing = Listing::default();
    for entry_result in walker {
        match entry_result {
            Ok(entry) => {
                // Skip the directory itself
                if entry.depth() == 0 {
                    continue;
                }
                let kind = if entry.file_type().is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                };
                let name = entry.file_name().to_string_lossy().into_owned();
                listing.entries.push(DirEntryInfo {
                    name,
                    path: entry.into_path(),
                    kind,
                });
            }
            Err(e) => {
                let failure = SubtreeFailure {
                    path: e.path().unwrap_or(dir).to_path_buf(),
                    reason: match e.io_error() {
                        Some(io_err) => io_err.to_string(),
                        None => e.to_string(),
                    },
                };
                if e.depth() == 0 {
                    return Err(failure);
                }
                listing.skipped.push(failure);
            }
        }
    }
    Ok(listing)
}

/// Apply the display policy: drop files unless `show_files`, then sort directories
/// first and by name within each kind.
pub fn order_entries(
    mut entries: Vec<DirEntryInfo>,
    show_files: bool,
    names: &NameOrder,
) -> Vec<DirEntryInfo> {
    if !show_files {
        entries.retain(DirEntryInfo::is_dir);
    }
    entries.sort_by(|a, b| compare_entries(a, b, names));
    entries
}

fn compare_entries(a: &DirEntryInfo, b: &DirEntryInfo, names: &NameOrder) -> Ordering {
    a.kind
        .cmp(&b.kind)
        .then_with(|| names.compare(&a.name, &b.name))
}
