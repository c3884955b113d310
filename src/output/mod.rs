//! Tree formatting and display
//!
//! This module provides formatters for outputting walked trees:
//! - Console output with box-drawing connectors, optionally colored
//! - JSON output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types and glyph sets
//! - `tree` - Text formatter for complete tree structures
//! - `json` - JSON output

mod config;
mod json;
mod tree;

// Re-export public types and functions
pub use config::{Charset, Glyphs, OutputConfig};
pub use json::{print_json, to_json};
pub use tree::{TreeFormatter, TreeLine, render};
