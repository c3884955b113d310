//! Directory and file counters for the summary line

use std::fmt;

use serde::Serialize;

/// Counts of the nodes kept in one walk's tree, root included.
///
/// Owned by a single walk and returned with its tree, so nothing carries
/// over between walks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkStats {
    pub directories: usize,
    pub files: usize,
}

impl WalkStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directory kept in the tree.
    pub fn record_directory(&mut self) {
        self.directories += 1;
    }

    /// Record a file kept in the tree.
    pub fn record_file(&mut self) {
        self.files += 1;
    }

    /// The trailing summary, e.g. `2 directories, 2 files`.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WalkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} directories, {} files", self.directories, self.files)
    }
}
