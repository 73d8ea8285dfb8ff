use super::collate::NameOrder;
use super::layout::GlyphSet;
use super::read::{order_entries, WalkdirReader};
use super::{DirReader, Rendering, RenderOptions, SubtreeFailure};
use std::path::Path;
use tracing::{debug, trace};

/// Outcome of rendering one directory.
#[derive(Debug)]
enum Subtree {
    Rendered {
        lines: Vec<String>,
        failures: Vec<SubtreeFailure>,
    },
    /// The directory could not be listed; it contributes no lines.
    Unreadable(SubtreeFailure),
}

/// Everything fixed for the duration of one render call.
struct Walk<'a> {
    options: &'a RenderOptions,
    glyphs: GlyphSet,
    names: NameOrder,
    reader: &'a dyn DirReader,
}

/// Render the children of `root` as tree lines.
///
/// The caller is expected to have checked that `root` is a directory, and to print
/// its own header line; the root itself is never part of the output. Directories that
/// cannot be read along the way are reported in [`Rendering::failures`] and skipped.
pub fn render(root: &Path, options: &RenderOptions) -> Rendering {
    render_with(root, options, &WalkdirReader)
}

/// [`render`] with listings taken from `reader`.
pub fn render_with(root: &Path, options: &RenderOptions, reader: &dyn DirReader) -> Rendering {
    debug!(
        root = %root.display(),
        show_files = options.show_files,
        ascii = options.use_ascii,
        max_depth = ?options.max_depth,
        "rendering tree"
    );
    let walk = Walk {
        options,
        glyphs: GlyphSet::select(options.use_ascii),
        names: NameOrder::english(),
        reader,
    };

    match walk.render_dir(root, "", 0) {
        Subtree::Rendered { lines, failures } => Rendering { lines, failures },
        Subtree::Unreadable(failure) => Rendering {
            lines: Vec::new(),
            failures: vec![failure],
        },
    }
}

impl Walk<'_> {
    /// Render the entries of `dir`, which sit at `depth` (the root's children are depth 0).
    fn render_dir(&self, dir: &Path, prefix: &str, depth: usize) -> Subtree {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            trace!(dir = %dir.display(), depth, "depth limit reached");
            return Subtree::Rendered {
                lines: Vec::new(),
                failures: Vec::new(),
            };
        }

        // Failures are reported to the user by the caller; only log them here.
        let listing = match self.reader.read_children(dir) {
            Ok(listing) => listing,
            Err(failure) => {
                debug!(path = %failure.path.display(), reason = %failure.reason, "cannot read directory");
                return Subtree::Unreadable(failure);
            }
        };
        for skipped in &listing.skipped {
            debug!(path = %skipped.path.display(), reason = %skipped.reason, "cannot read entry");
        }
        let mut failures = listing.skipped;

        let entries = order_entries(listing.entries, self.options.show_files, &self.names);
        trace!(dir = %dir.display(), count = entries.len(), "listed directory");

        let mut lines = Vec::with_capacity(entries.len());
        let count = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            let is_last = i + 1 == count;
            lines.push(self.glyphs.line(prefix, is_last, entry));

            if entry.is_dir() {
                let child_prefix = self.glyphs.child_prefix(prefix, is_last);
                match self.render_dir(&entry.path, &child_prefix, depth + 1) {
                    Subtree::Rendered {
                        lines: child_lines,
                        failures: child_failures,
                    } => {
                        lines.extend(child_lines);
                        failures.extend(child_failures);
                    }
                    Subtree::Unreadable(failure) => failures.push(failure),
                }
            }
        }

        Subtree::Rendered { lines, failures }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{DirEntryInfo, EntryKind, Listing};
    use std::collections::HashMap;
    use std::io;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    /// In-memory directory listings; any path listed in `denied` fails to read.
    #[derive(Default)]
    struct FakeReader {
        dirs: HashMap<PathBuf, Vec<DirEntryInfo>>,
        denied: Vec<PathBuf>,
    }

    impl FakeReader {
        fn dir(mut self, path: &str, children: &[(&str, EntryKind)]) -> Self {
            let parent = PathBuf::from(path);
            let entries = children
                .iter()
                .map(|(name, kind)| DirEntryInfo {
                    name: name.to_string(),
                    path: parent.join(name),
                    kind: *kind,
                })
                .collect();
            self.dirs.insert(parent, entries);
            self
        }

        fn deny(mut self, path: &str) -> Self {
            self.denied.push(PathBuf::from(path));
            self
        }
    }

    impl DirReader for FakeReader {
        fn read_children(&self, dir: &Path) -> Result<Listing, SubtreeFailure> {
            if self.denied.iter().any(|d| d == dir) {
                return Err(SubtreeFailure {
                    path: dir.to_path_buf(),
                    reason: "Permission denied (os error 13)".to_string(),
                });
            }
            Ok(Listing {
                entries: self.dirs.get(dir).cloned().unwrap_or_default(),
                skipped: Vec::new(),
            })
        }
    }

    fn three_siblings() -> FakeReader {
        use EntryKind::{Directory, File};
        FakeReader::default()
            .dir(
                "/root",
                &[("gamma", Directory), ("beta", Directory), ("alpha", Directory)],
            )
            .dir("/root/alpha", &[("a.txt", File)])
            .dir("/root/beta", &[("secret.txt", File)])
            .dir("/root/gamma", &[("nested", Directory)])
            .deny("/root/beta")
    }

    fn with_files() -> RenderOptions {
        RenderOptions {
            show_files: true,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn test_unreadable_sibling_does_not_stop_others() {
        let rendering = render_with(Path::new("/root"), &with_files(), &three_siblings());

        assert_eq!(
            rendering.lines,
            vec![
                "├── alpha/",
                "│   └── a.txt",
                "├── beta/",
                "└── gamma/",
                "    └── nested/",
            ]
        );
        assert_eq!(
            rendering.failures,
            vec![SubtreeFailure {
                path: PathBuf::from("/root/beta"),
                reason: "Permission denied (os error 13)".to_string(),
            }]
        );
    }

    #[test]
    fn test_unreadable_root_contributes_no_lines() {
        let reader = three_siblings().deny("/root");
        let rendering = render_with(Path::new("/root"), &with_files(), &reader);
        assert!(rendering.lines.is_empty());
        assert_eq!(rendering.failures.len(), 1);
        assert_eq!(rendering.failures[0].path, PathBuf::from("/root"));
    }

    #[test]
    fn test_pruned_directory_is_never_read() {
        let options = RenderOptions {
            max_depth: Some(0),
            ..with_files()
        };
        let rendering = render_with(Path::new("/root"), &options, &three_siblings());
        assert_eq!(rendering.lines, vec!["├── alpha/", "├── beta/", "└── gamma/"]);
        assert!(rendering.failures.is_empty());
    }

    #[test]
    fn test_skipped_entries_are_kept_as_failures() {
        struct PartialReader;
        impl DirReader for PartialReader {
            fn read_children(&self, dir: &Path) -> Result<Listing, SubtreeFailure> {
                if dir != Path::new("/root") {
                    return Ok(Listing::default());
                }
                Ok(Listing {
                    entries: vec![DirEntryInfo {
                        name: "ok".to_string(),
                        path: PathBuf::from("/root/ok"),
                        kind: EntryKind::Directory,
                    }],
                    skipped: vec![SubtreeFailure {
                        path: PathBuf::from("/root/vanished"),
                        reason: "No such file or directory (os error 2)".to_string(),
                    }],
                })
            }
        }

        let rendering = render_with(Path::new("/root"), &with_files(), &PartialReader);
        assert_eq!(rendering.lines, vec!["└── ok/"]);
        assert_eq!(rendering.failures.len(), 1);
        assert_eq!(rendering.failures[0].path, PathBuf::from("/root/vanished"));
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_unreadable_directory_not_logged_at_default_level() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let rendering = tracing::subscriber::with_default(subscriber, || {
            render_with(Path::new("/root"), &with_files(), &three_siblings())
        });

        assert_eq!(rendering.failures.len(), 1);
        let logged = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(logged.is_empty(), "unexpected log output: {logged}");
    }
}
