//! Directory tree walking logic
//!
//! [`TreeWalker`] walks a directory once and builds a [`TreeNode`] tree,
//! applying the [`ExclusionRules`] and the depth limit from [`WalkerConfig`].
//! The tree is then either rendered (see [`crate::output`]) or serialized.

mod config;
mod filter;
mod node;
mod utils;
mod walker;

// Re-export public types
pub use config::{MAX_DEPTH, WalkerConfig};
pub use filter::{ExcludeMode, ExclusionFilter, ExclusionRules, FilterDecision};
pub use node::{EntryKind, TreeNode};
pub use utils::{absolute_path, entry_name, normalize_path, resolve_against};
pub use walker::{TreeWalker, Walk};
