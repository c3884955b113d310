//! Output configuration types

use clap::ValueEnum;

/// Glyph set used to draw the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Charset {
    /// Box-drawing characters: `├── `, `└── `, `│   `
    #[default]
    Unicode,
    /// Plain ASCII: `|-- `, `` `-- ``, `|   `
    Ascii,
}

/// The four pieces a tree line is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Connector for a sibling that has more siblings after it
    pub branch: &'static str,
    /// Connector for the last sibling
    pub elbow: &'static str,
    /// Column under an ancestor that still has siblings pending
    pub vertical: &'static str,
    /// Column under an ancestor that was the last sibling
    pub blank: &'static str,
}

impl Charset {
    pub fn glyphs(self) -> Glyphs {
        match self {
            Charset::Unicode => Glyphs {
                branch: "├── ",
                elbow: "└── ",
                vertical: "│   ",
                blank: "    ",
            },
            Charset::Ascii => Glyphs {
                branch: "|-- ",
                elbow: "`-- ",
                vertical: "|   ",
                blank: "    ",
            },
        }
    }
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    pub charset: Charset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_have_equal_width() {
        for charset in [Charset::Unicode, Charset::Ascii] {
            let g = charset.glyphs();
            let widths = [g.branch, g.elbow, g.vertical, g.blank].map(|s| s.chars().count());
            assert_eq!(widths, [4, 4, 4, 4], "{:?}", charset);
        }
    }
}
