//! Tree node types shared by the walker, the renderer and JSON output

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Kind of filesystem entry a node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One retained entry of a walked tree.
///
/// Serializes as `{"type": "file" | "directory", "name", "path", "fullPath",
/// "size", "children"}` where `children` is only present on directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        /// Path relative to the walk root
        path: PathBuf,
        #[serde(rename = "fullPath")]
        full_path: PathBuf,
        size: u64,
    },
    Directory {
        name: String,
        path: PathBuf,
        #[serde(rename = "fullPath")]
        full_path: PathBuf,
        /// Sum of the children's sizes
        size: u64,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn file(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        full_path: impl Into<PathBuf>,
        size: u64,
    ) -> Self {
        TreeNode::File {
            name: name.into(),
            path: path.into(),
            full_path: full_path.into(),
            size,
        }
    }

    /// Build a directory node, computing its size from `children`.
    pub fn directory(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        full_path: impl Into<PathBuf>,
        children: Vec<TreeNode>,
    ) -> Self {
        TreeNode::Directory {
            name: name.into(),
            path: path.into(),
            full_path: full_path.into(),
            size: children.iter().map(TreeNode::size).sum(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Directory { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            TreeNode::File { path, .. } => path,
            TreeNode::Directory { path, .. } => path,
        }
    }

    pub fn full_path(&self) -> &Path {
        match self {
            TreeNode::File { full_path, .. } => full_path,
            TreeNode::Directory { full_path, .. } => full_path,
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            TreeNode::File { size, .. } => *size,
            TreeNode::Directory { size, .. } => *size,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Directory { .. })
    }

    /// Children in enumeration order; empty for files.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Directory { children, .. } => children,
        }
    }

    /// Find a direct child by name.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children().iter().find(|c| c.name() == name)
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(TreeNode::node_count).sum::<usize>()
    }
}
