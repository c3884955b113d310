//! Tree formatter for text output
//!
//! This module provides `TreeFormatter` which turns a complete `TreeNode`
//! tree into box-drawing text, either as a string or printed with colors.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::stats::WalkStats;
use crate::tree::TreeNode;

use super::config::{Glyphs, OutputConfig};

/// One rendered line: the drawn prefix (ancestor columns plus connector)
/// followed by the entry name. The root has an empty prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine<'a> {
    pub prefix: String,
    pub name: &'a str,
    pub is_dir: bool,
}

/// Formatter for tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Lay out the tree one line per node, in pre-order.
    pub fn lines<'a>(&self, root: &'a TreeNode) -> Vec<TreeLine<'a>> {
        let glyphs = self.config.charset.glyphs();
        let mut lines = vec![TreeLine {
            prefix: String::new(),
            name: root.name(),
            is_dir: root.is_dir(),
        }];
        let mut ancestors = Vec::new();
        push_children(root, &glyphs, &mut ancestors, &mut lines);
        lines
    }

    /// Render the tree without the summary line.
    pub fn render(&self, root: &TreeNode) -> String {
        let mut output = String::new();
        for line in self.lines(root) {
            output.push_str(&line.prefix);
            output.push_str(line.name);
            output.push('\n');
        }
        output
    }

    /// Render the tree followed by a blank line and the summary.
    pub fn format(&self, root: Option<&TreeNode>, stats: &WalkStats) -> String {
        let mut output = root.map(|r| self.render(r)).unwrap_or_default();
        output.push_str(&format!("\n{}\n", stats.summary()));
        output
    }

    pub fn print(&self, root: Option<&TreeNode>, stats: &WalkStats) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        if let Some(root) = root {
            self.write_lines(&mut stdout, root)?;
        }
        writeln!(stdout)?;
        writeln!(stdout, "{}", stats.summary())?;
        Ok(())
    }

    fn write_lines<W: WriteColor>(&self, out: &mut W, root: &TreeNode) -> io::Result<()> {
        let mut dir_color = ColorSpec::new();
        dir_color.set_fg(Some(Color::Blue)).set_bold(true);

        for line in self.lines(root) {
            write!(out, "{}", line.prefix)?;
            if line.is_dir {
                out.set_color(&dir_color)?;
                write!(out, "{}", line.name)?;
                out.reset()?;
            } else {
                write!(out, "{}", line.name)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new(OutputConfig::default())
    }
}

/// Render with the default glyphs and no colors.
pub fn render(root: &TreeNode) -> String {
    TreeFormatter::default().render(root)
}

/// `ancestors` holds one "was the last sibling" flag per level between the
/// root's children and `node`.
fn push_children<'a>(
    node: &'a TreeNode,
    glyphs: &Glyphs,
    ancestors: &mut Vec<bool>,
    lines: &mut Vec<TreeLine<'a>>,
) {
    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        let is_last = i + 1 == children.len();

        let mut prefix = String::with_capacity((ancestors.len() + 1) * 4);
        for &ancestor_last in ancestors.iter() {
            prefix.push_str(if ancestor_last {
                glyphs.blank
            } else {
                glyphs.vertical
            });
        }
        prefix.push_str(if is_last { glyphs.elbow } else { glyphs.branch });

        lines.push(TreeLine {
            prefix,
            name: child.name(),
            is_dir: child.is_dir(),
        });

        ancestors.push(is_last);
        push_children(child, glyphs, ancestors, lines);
        ancestors.pop();
    }
}
