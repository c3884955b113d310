//! Error and warning types for tree walking

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Errors that abort a walk. Only failures at the walk root surface here;
/// per-entry failures become [`WalkWarning`]s.
#[derive(Debug, Error)]
pub enum TreeError {
    /// No root directory was given.
    #[error("need params: `cwd`")]
    MissingCwd,

    /// The walk root does not exist.
    #[error("{} is not exist.", path.display())]
    NotFound { path: PathBuf },

    /// The walk root is not a directory.
    #[error("{} [error opening dir]", path.display())]
    NotADirectory { path: PathBuf },

    /// The walk root exists but could not be read.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TreeError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Process exit code used by the command-line tool.
    pub fn exit_code(&self) -> i32 {
        match self {
            TreeError::NotADirectory { .. } => 2,
            _ => 1,
        }
    }
}

/// What could not be read for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Metadata lookup failed (permission denied, removed mid-walk, broken symlink).
    Metadata,
    /// The directory listing could not be read.
    ReadDir,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::Metadata => write!(f, "metadata"),
            WarningKind::ReadDir => write!(f, "read_dir"),
        }
    }
}

/// An entry that was unreadable and left out of the tree.
#[derive(Debug, Clone, Serialize)]
pub struct WalkWarning {
    pub path: PathBuf,
    pub kind: WarningKind,
    pub message: String,
}

impl WalkWarning {
    pub fn unreadable(path: impl Into<PathBuf>, kind: WarningKind, error: &std::io::Error) -> Self {
        Self {
            path: path.into(),
            kind,
            message: error.to_string(),
        }
    }
}
