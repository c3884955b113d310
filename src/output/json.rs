//! JSON output formatting

use std::io;

use crate::tree::TreeNode;

/// Serialize a walked tree as pretty-printed JSON. An empty walk is `null`.
pub fn to_json(node: Option<&TreeNode>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&node)
}

/// Print tree node as pretty-printed JSON to stdout.
pub fn print_json(node: Option<&TreeNode>) -> io::Result<()> {
    let json = to_json(node).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
