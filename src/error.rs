//! Error types shared by the renderer and the output sinks.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("{}: {source}", path.display())]
    RootNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: Not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to write {target}: {source}")]
    OutputSink {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

impl TreeError {
    /// Process exit status for this error.
    ///
    /// Usage errors are reported by clap itself with status 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            TreeError::RootNotFound { .. } | TreeError::NotADirectory { .. } => 1,
            TreeError::OutputSink { .. } => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;
