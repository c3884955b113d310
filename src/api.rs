//! Programmatic entry point
//!
//! [`tree`] takes a [`TreeOptions`] value, walks `cwd` and returns either the
//! rendered text or the node tree. Failures degrade to an empty result;
//! [`scan`] exposes the same walk with errors and statistics intact.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::TreeError;
use crate::output::render;
use crate::tree::{
    ExcludeMode, ExclusionRules, MAX_DEPTH, TreeNode, TreeWalker, Walk, WalkerConfig,
    absolute_path, resolve_against,
};

fn default_depth() -> i64 {
    MAX_DEPTH as i64
}

fn default_true() -> bool {
    true
}

/// A single path or a list of paths.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PathList {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

impl PathList {
    pub fn as_slice(&self) -> &[PathBuf] {
        match self {
            PathList::One(path) => std::slice::from_ref(path),
            PathList::Many(paths) => paths,
        }
    }
}

impl Default for PathList {
    fn default() -> Self {
        PathList::Many(Vec::new())
    }
}

/// Exclusion options as given by the caller. Paths may be relative to `cwd`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExcludeOptions {
    pub path: PathList,
    pub mode: ExcludeMode,
    /// Extensions such as `.log`; matched case-insensitively
    pub extensions: Vec<String>,
}

/// Options for [`tree`] and [`scan`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TreeOptions {
    /// Directory to walk
    #[serde(default)]
    pub cwd: Option<PathBuf>,
    /// Depth limit, clamped to `0..=30`
    #[serde(default = "default_depth")]
    pub depth: i64,
    #[serde(default)]
    pub exclude: ExcludeOptions,
    /// Return the node tree instead of rendered text
    #[serde(default)]
    pub json: bool,
    /// Suppress diagnostics for failed walks
    #[serde(default = "default_true")]
    pub silent: bool,
    #[serde(default = "default_true")]
    pub show_hidden: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            cwd: None,
            depth: default_depth(),
            exclude: ExcludeOptions::default(),
            json: false,
            silent: true,
            show_hidden: true,
        }
    }
}

impl TreeOptions {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(cwd.into()),
            ..Default::default()
        }
    }

    /// The depth limit actually used by the walker.
    pub fn clamped_depth(&self) -> usize {
        self.depth.clamp(0, MAX_DEPTH as i64) as usize
    }
}

/// What [`tree`] returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeOutput {
    /// Rendered tree, empty when nothing could be shown
    Text(String),
    /// Node tree, `None` when nothing could be shown
    Json(Option<TreeNode>),
}

impl TreeOutput {
    pub fn is_empty(&self) -> bool {
        match self {
            TreeOutput::Text(text) => text.is_empty(),
            TreeOutput::Json(node) => node.is_none(),
        }
    }
}

/// Build the walker configuration for `root` from the caller's options.
///
/// Exclusion paths are resolved against `root`; those that do not exist are
/// dropped so a typo has no effect.
pub fn walker_config(options: &TreeOptions, root: &Path) -> WalkerConfig {
    let paths: Vec<PathBuf> = options
        .exclude
        .path
        .as_slice()
        .iter()
        .map(|p| resolve_against(root, p))
        .filter(|p| {
            let exists = p.exists();
            if !exists {
                debug!(path = %p.display(), "ignoring exclusion for missing path");
            }
            exists
        })
        .collect();

    let exclude = ExclusionRules::new()
        .with_paths(paths)
        .with_mode(options.exclude.mode)
        .with_extensions(&options.exclude.extensions);

    WalkerConfig {
        show_hidden: options.show_hidden,
        ..Default::default()
    }
    .with_max_depth(options.clamped_depth())
    .with_exclude(exclude)
}

/// Walk `options.cwd`, reporting failures to the caller.
pub fn scan(options: &TreeOptions) -> Result<Walk, TreeError> {
    let cwd = options.cwd.as_deref().ok_or(TreeError::MissingCwd)?;
    let root = absolute_path(cwd).map_err(|e| TreeError::io(cwd, e))?;
    if !root.exists() {
        return Err(TreeError::NotFound { path: root });
    }

    let config = walker_config(options, &root);
    TreeWalker::new(config).walk(&root)
}

/// Walk `options.cwd` and return the rendered text or the node tree.
///
/// Never fails: any error yields an empty result, printed as a diagnostic
/// first unless `options.silent` is set.
pub fn tree(options: &TreeOptions) -> TreeOutput {
    let root = match scan(options) {
        Ok(walk) => walk.root,
        Err(e) => {
            if !options.silent {
                eprintln!("{}", e);
            }
            debug!(error = %e, "walk failed");
            None
        }
    };

    if options.json {
        TreeOutput::Json(root)
    } else {
        TreeOutput::Text(root.as_ref().map(render).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn sample_dir() -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("a");
        fs::create_dir_all(root.join("b")).unwrap();
        fs::write(root.join("x.txt"), "0123456789").unwrap();
        fs::write(root.join("b/y.txt"), "01234").unwrap();
        (temp, root)
    }

    #[test]
    fn test_defaults() {
        let options = TreeOptions::default();
        assert_eq!(options.depth, 30);
        assert!(options.silent);
        assert!(!options.json);
        assert!(options.show_hidden);
        assert_eq!(options.exclude.mode, ExcludeMode::All);
    }

    #[test]
    fn test_depth_is_clamped() {
        let mut options = TreeOptions::default();
        options.depth = -4;
        assert_eq!(options.clamped_depth(), 0);
        options.depth = 99;
        assert_eq!(options.clamped_depth(), 30);
        options.depth = 7;
        assert_eq!(options.clamped_depth(), 7);
    }

    #[test]
    fn test_options_from_json() {
        let options: TreeOptions = serde_json::from_str(
            r#"{
                "cwd": "/srv/app",
                "depth": 2,
                "json": true,
                "exclude": { "path": "node_modules", "mode": "children", "extensions": [".log"] }
            }"#,
        )
        .unwrap();

        assert_eq!(options.cwd, Some(PathBuf::from("/srv/app")));
        assert_eq!(options.depth, 2);
        assert!(options.json);
        assert!(options.silent);
        assert_eq!(options.exclude.path.as_slice(), &[PathBuf::from("node_modules")]);
        assert_eq!(options.exclude.mode, ExcludeMode::ChildrenOnly);
        assert_eq!(options.exclude.extensions, vec![".log".to_string()]);
    }

    #[test]
    fn test_options_path_list_from_json() {
        let options: TreeOptions =
            serde_json::from_str(r#"{ "exclude": { "path": ["a", "b/c"] } }"#).unwrap();
        assert_eq!(options.exclude.path.as_slice().len(), 2);
        assert_eq!(options.depth, 30);
        assert!(options.cwd.is_none());
    }

    #[test]
    fn test_missing_exclusions_are_dropped() {
        let (_temp, root) = sample_dir();
        let mut options = TreeOptions::new(&root);
        options.exclude.path = PathList::Many(vec![PathBuf::from("b"), PathBuf::from("typo")]);

        let config = walker_config(&options, &root);
        assert_eq!(config.exclude.paths.len(), 1);
        assert!(config.exclude.paths.contains(&root.join("b")));
    }

    #[test]
    fn test_tree_text() {
        let (_temp, root) = sample_dir();
        let TreeOutput::Text(text) = tree(&TreeOptions::new(&root)) else {
            panic!("expected text output");
        };
        // Children come in enumeration order, so take it from a walk
        let walk = scan(&TreeOptions::new(&root)).unwrap();
        let first = walk.root.as_ref().unwrap().children()[0].name().to_string();
        let expected = if first == "x.txt" {
            "a\n├── x.txt\n└── b\n    └── y.txt\n"
        } else {
            "a\n├── b\n│   └── y.txt\n└── x.txt\n"
        };
        assert_eq!(text, expected);

        // Whatever the order, the root's last child takes the elbow
        let top: Vec<&str> = text.lines().filter(|l| !l.starts_with(['│', ' '])).collect();
        assert_eq!(top.len(), 3);
        assert!(top[1].starts_with("├── "));
        assert!(top[2].starts_with("└── "));
    }

    #[test]
    fn test_tree_json() {
        let (_temp, root) = sample_dir();
        let mut options = TreeOptions::new(&root);
        options.json = true;

        let TreeOutput::Json(Some(node)) = tree(&options) else {
            panic!("expected a node tree");
        };
        assert_eq!(node.size(), 15);
    }

    #[test]
    fn test_relative_exclusion_path() {
        let (_temp, root) = sample_dir();
        let mut options = TreeOptions::new(&root);
        options.json = true;
        options.exclude.path = PathList::One(PathBuf::from("./b"));

        let TreeOutput::Json(Some(node)) = tree(&options) else {
            panic!("expected a node tree");
        };
        assert!(node.child("b").is_none());
        assert_eq!(node.size(), 10);
    }

    #[test]
    fn test_missing_cwd_degrades_to_empty() {
        assert_eq!(tree(&TreeOptions::default()), TreeOutput::Text(String::new()));
        assert!(matches!(
            scan(&TreeOptions::default()),
            Err(TreeError::MissingCwd)
        ));
    }

    #[test]
    fn test_nonexistent_cwd_degrades_to_empty() {
        let temp = TempDir::new().unwrap();
        let mut options = TreeOptions::new(temp.path().join("nope"));
        options.silent = false;
        assert!(tree(&options).is_empty());

        options.json = true;
        assert_eq!(tree(&options), TreeOutput::Json(None));
        assert!(matches!(scan(&options), Err(TreeError::NotFound { .. })));
    }

    #[test]
    fn test_file_cwd_degrades_to_empty() {
        let (_temp, root) = sample_dir();
        let options = TreeOptions::new(root.join("x.txt"));
        assert!(tree(&options).is_empty());
        assert!(matches!(scan(&options), Err(TreeError::NotADirectory { .. })));
    }
}
