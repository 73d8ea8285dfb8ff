//! Delivery of a rendered tree to the console or a file.

use crate::error::{Result, TreeError};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where the rendered tree goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    /// Created fresh; existing content is discarded.
    File(PathBuf),
}

impl Destination {
    pub fn describe(&self) -> String {
        match self {
            Destination::Stdout => "standard output".to_string(),
            Destination::File(path) => path.display().to_string(),
        }
    }
}

/// Header line naming the root: separators normalized to `/`, with a trailing `/`.
pub fn header_line(root: &Path) -> String {
    let mut header = root.to_string_lossy().replace('\\', "/");
    // Verbatim prefix left behind by canonicalize on Windows
    if let Some(stripped) = header.strip_prefix("//?/") {
        header = stripped.to_string();
    }
    if !header.ends_with('/') {
        header.push('/');
    }
    header
}

/// Write the header and every line, each terminated by a single `\n`.
pub fn write_lines<W: Write>(out: &mut W, header: &str, lines: &[String]) -> io::Result<()> {
    writeln!(out, "{header}")?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

/// Send a rendered tree to `dest`.
pub fn write_tree(dest: &Destination, header: &str, lines: &[String]) -> Result<()> {
    let sink_error = |source: io::Error| TreeError::OutputSink {
        target: dest.describe(),
        source,
    };

    match dest {
        Destination::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            match write_lines(&mut handle, header, lines) {
                // Reader went away (e.g. piped into `head`)
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
                other => other.map_err(sink_error),
            }
        }
        Destination::File(path) => {
            let file = File::create(path).map_err(sink_error)?;
            let mut writer = BufWriter::new(file);
            write_lines(&mut writer, header, lines).map_err(sink_error)
        }
    }
}
