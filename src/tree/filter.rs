//! Path and extension exclusion rules

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::node::EntryKind;

/// How a matched exclusion path is hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExcludeMode {
    /// Hide the entry and everything beneath it.
    #[default]
    #[serde(rename = "all")]
    All,
    /// Keep the entry but never descend into it. Must be used together with
    /// exclusion paths; a directory left without children collapses like any
    /// other empty directory.
    #[serde(rename = "children")]
    ChildrenOnly,
}

/// Outcome of checking one entry against the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    Keep,
    DropEntirely,
    DropChildrenOnly,
}

/// Exclusion configuration: absolute paths, a mode, and file extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionRules {
    pub paths: HashSet<PathBuf>,
    pub mode: ExcludeMode,
    /// Lowercase extensions with their leading dot, e.g. `.log`; the empty
    /// string stands for files without an extension
    pub extensions: HashSet<String>,
}

impl ExclusionRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn with_mode(mut self, mode: ExcludeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Add extensions; `log`, `.log` and `.LOG` are all stored as `.log`.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions
            .extend(extensions.into_iter().map(|e| normalize_extension(e.as_ref())));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.extensions.is_empty()
    }
}

/// Lowercase with a leading dot. An empty extension stays empty and matches
/// files that have no extension at all; a bare `.` matches names like `notes.`.
fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.is_empty() || ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}

/// Per-walk exclusion state.
///
/// Paths excluded with [`ExcludeMode::All`] are forgotten after their first
/// match, so a long exclusion list is not re-tested against whole subtrees.
#[derive(Debug)]
pub struct ExclusionFilter {
    paths: HashSet<PathBuf>,
    mode: ExcludeMode,
    extensions: HashSet<String>,
}

impl ExclusionFilter {
    pub fn new(rules: &ExclusionRules) -> Self {
        Self {
            paths: rules.paths.clone(),
            mode: rules.mode,
            extensions: rules.extensions.clone(),
        }
    }

    /// Decide what happens to the entry at `path`.
    pub fn check(&mut self, path: &Path, kind: EntryKind) -> FilterDecision {
        if kind == EntryKind::File && self.has_excluded_extension(path) {
            return FilterDecision::DropEntirely;
        }

        if self.paths.contains(path) {
            return match self.mode {
                ExcludeMode::All => {
                    self.paths.remove(path);
                    FilterDecision::DropEntirely
                }
                ExcludeMode::ChildrenOnly => FilterDecision::DropChildrenOnly,
            };
        }

        FilterDecision::Keep
    }

    /// Number of configured paths not yet consumed by a match.
    pub fn pending_paths(&self) -> usize {
        self.paths.len()
    }

    fn has_excluded_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return false;
        }
        let ext = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .unwrap_or_default();
        self.extensions.contains(&ext)
    }
}
