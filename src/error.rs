//! Error types for tree listing

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a listing from being written.
///
/// None of these are recovered from inside the library. A failed run leaves
/// the output file with whatever had been flushed before the failure.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("cannot access '{}': No such file or directory", .path.display())]
    RootNotFound { path: PathBuf },

    #[error("cannot list '{}': Not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot write '{}': {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read directory '{}': {source}", .path.display())]
    TraversalAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TreeError>;

impl TreeError {
    pub(crate) fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn traversal(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::TraversalAccess {
            path: path.into(),
            source,
        }
    }
}
