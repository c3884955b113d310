//! TreeWalker - builds the full tree in memory

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{TreeError, WalkWarning, WarningKind};
use crate::stats::WalkStats;

use super::config::WalkerConfig;
use super::filter::{ExclusionFilter, FilterDecision};
use super::node::{EntryKind, TreeNode};
use super::utils::{absolute_path, entry_name, is_hidden};

/// Result of one walk.
#[derive(Debug, Clone)]
pub struct Walk {
    /// `None` when every entry was filtered out
    pub root: Option<TreeNode>,
    pub stats: WalkStats,
    /// Entries left out because they could not be read
    pub warnings: Vec<WalkWarning>,
}

/// Tree walker that builds the full tree in memory.
///
/// Text rendering and JSON output both consume the same [`TreeNode`] tree, so
/// a walk is never repeated per output format.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk the tree below `root`.
    ///
    /// Only failures at the root are errors. Unreadable entries further down
    /// are dropped from the tree and reported in [`Walk::warnings`].
    pub fn walk(&self, root: &Path) -> Result<Walk, TreeError> {
        let root = absolute_path(root).map_err(|e| TreeError::io(root, e))?;
        let metadata = fs::metadata(&root).map_err(|e| TreeError::io(&root, e))?;
        if !metadata.is_dir() {
            return Err(TreeError::NotADirectory { path: root });
        }

        if !self.config.exclude.is_empty() {
            debug!(
                paths = self.config.exclude.paths.len(),
                extensions = self.config.exclude.extensions.len(),
                mode = ?self.config.exclude.mode,
                "exclusion rules active"
            );
        }

        let mut state = WalkState::new(&self.config, &root);
        let node = match state.filter.check(&root, EntryKind::Directory) {
            FilterDecision::Keep if state.past_max_depth(1) => Some(state.truncated(&root)),
            FilterDecision::Keep => {
                let entries = list_dir(&root).map_err(|e| TreeError::io(&root, e))?;
                state.directory(&root, 1, entries)
            }
            FilterDecision::DropEntirely | FilterDecision::DropChildrenOnly => {
                debug!(path = %root.display(), "walk root is excluded");
                None
            }
        };

        debug!(
            root = %root.display(),
            directories = state.stats.directories,
            files = state.stats.files,
            warnings = state.warnings.len(),
            unmatched_exclusions = state.filter.pending_paths(),
            "walk complete"
        );

        Ok(Walk {
            root: node,
            stats: state.stats,
            warnings: state.warnings,
        })
    }
}

/// Mutable state for a single walk.
struct WalkState<'a> {
    config: &'a WalkerConfig,
    root: &'a Path,
    filter: ExclusionFilter,
    stats: WalkStats,
    warnings: Vec<WalkWarning>,
}

impl<'a> WalkState<'a> {
    fn new(config: &'a WalkerConfig, root: &'a Path) -> Self {
        Self {
            config,
            root,
            filter: ExclusionFilter::new(&config.exclude),
            stats: WalkStats::new(),
            warnings: Vec::new(),
        }
    }

    fn past_max_depth(&self, depth: usize) -> bool {
        depth > self.config.max_depth
    }

    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(self.root)
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    fn skip(&mut self, path: &Path, kind: WarningKind, error: &io::Error) {
        debug!(path = %path.display(), %kind, %error, "skipping unreadable entry");
        self.warnings.push(WalkWarning::unreadable(path, kind, error));
    }

    /// Visit one entry below the root.
    fn visit(&mut self, path: &Path, depth: usize) -> Option<TreeNode> {
        let metadata = match fs::metadata(path) {
            Ok(m) => m,
            Err(e) => {
                self.skip(path, WarningKind::Metadata, &e);
                return None;
            }
        };

        let kind = entry_kind(&metadata)?;
        let decision = self.filter.check(path, kind);
        if decision == FilterDecision::DropEntirely {
            debug!(path = %path.display(), "excluded");
            return None;
        }

        match kind {
            EntryKind::File => Some(self.file(path, &metadata)),
            EntryKind::Directory => {
                if decision == FilterDecision::DropChildrenOnly {
                    // Nothing is left to show once the children are hidden
                    debug!(path = %path.display(), "children excluded, directory collapses");
                    return None;
                }
                if self.past_max_depth(depth) {
                    return Some(self.truncated(path));
                }
                let entries = match list_dir(path) {
                    Ok(entries) => entries,
                    Err(e) => {
                        self.skip(path, WarningKind::ReadDir, &e);
                        return None;
                    }
                };
                self.directory(path, depth, entries)
            }
        }
    }

    fn file(&mut self, path: &Path, metadata: &Metadata) -> TreeNode {
        self.stats.record_file();
        TreeNode::file(entry_name(path), self.relative(path), path, metadata.len())
    }

    /// A directory at the depth limit: reported, but not descended into.
    fn truncated(&mut self, path: &Path) -> TreeNode {
        self.stats.record_directory();
        TreeNode::directory(entry_name(path), self.relative(path), path, Vec::new())
    }

    /// Build a directory from its listing. Returns `None` when no child survives.
    ///
    /// An entry the listing could not yield is recorded against `path`.
    fn directory(
        &mut self,
        path: &Path,
        depth: usize,
        entries: Vec<io::Result<PathBuf>>,
    ) -> Option<TreeNode> {
        let mut children = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    self.skip(path, WarningKind::ReadDir, &e);
                    continue;
                }
            };
            if !self.config.show_hidden && is_hidden(&entry) {
                continue;
            }
            if let Some(node) = self.visit(&entry, depth + 1) {
                children.push(node);
            }
        }

        if children.is_empty() {
            return None;
        }

        self.stats.record_directory();
        Some(TreeNode::directory(
            entry_name(path),
            self.relative(path),
            path,
            children,
        ))
    }
}

fn entry_kind(metadata: &Metadata) -> Option<EntryKind> {
    if metadata.is_file() {
        Some(EntryKind::File)
    } else if metadata.is_dir() {
        Some(EntryKind::Directory)
    } else {
        None
    }
}

/// Read a directory listing in enumeration order. The handle is closed before
/// returning, so none stay open across recursion.
fn list_dir(path: &Path) -> io::Result<Vec<io::Result<PathBuf>>> {
    Ok(fs::read_dir(path)?
        .map(|entry| entry.map(|e| e.path()))
        .collect())
}
