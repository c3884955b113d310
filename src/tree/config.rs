//! Configuration types for the tree walker

use super::filter::ExclusionRules;

/// Deepest level the walker will ever descend to.
pub const MAX_DEPTH: usize = 30;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Directories deeper than this are reported without their contents.
    /// The root is depth 1, so 0 reports the root alone.
    pub max_depth: usize,
    /// Include entries whose name starts with a dot
    pub show_hidden: bool,
    pub exclude: ExclusionRules,
}

impl WalkerConfig {
    /// Set the depth limit, capped at [`MAX_DEPTH`].
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.min(MAX_DEPTH);
        self
    }

    pub fn with_exclude(mut self, exclude: ExclusionRules) -> Self {
        self.exclude = exclude;
        self
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            show_hidden: true,
            exclude: ExclusionRules::default(),
        }
    }
}
