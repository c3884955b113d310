//! yestree - print a directory tree as box-drawing text or JSON
//!
//! The walk applies path and extension exclusions and a depth limit, and
//! aggregates file sizes into their directories.

pub mod api;
pub mod error;
pub mod output;
pub mod stats;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use api::{ExcludeOptions, PathList, TreeOptions, TreeOutput, scan, tree};
pub use error::{TreeError, WalkWarning, WarningKind};
pub use output::{Charset, OutputConfig, TreeFormatter, print_json, render, to_json};
pub use stats::WalkStats;
pub use tree::{ExcludeMode, ExclusionRules, TreeNode, TreeWalker, Walk, WalkerConfig};
