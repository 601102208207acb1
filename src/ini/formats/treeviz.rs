//! Treeviz formatter for configuration trees
//!
//! One line per node, children indented under their parent with box-drawing connectors.
//! Children come in key order, the same order the tree iterates in.
//!
//! Format:
//!     <prefix><connector> <icon> <name>[ = <values>]
//!
//! Values are shown Rust-escaped, so whitespace and control characters are visible. A single
//! value prints as `"v"`, several as `["a", "b"]`.
//!
//! Icons
//!     Root: ⧉
//!     Node with children: §
//!     Leaf: ◦

use crate::ini::formats::registry::{FormatError, Formatter};
use crate::ini::tree::ConfigNode;

fn get_icon(node: &ConfigNode) -> &'static str {
    if node.children().is_empty() {
        "◦"
    } else {
        "§"
    }
}

fn format_values(node: &ConfigNode) -> String {
    match node.values() {
        [] => String::new(),
        [single] => format!(" = {:?}", single),
        many => format!(" = {:?}", many),
    }
}

fn format_node(
    output: &mut String,
    name: &str,
    node: &ConfigNode,
    prefix: &str,
    is_last: bool,
    show_values: bool,
) {
    let connector = if is_last { "└─" } else { "├─" };
    let values = if show_values {
        format_values(node)
    } else {
        String::new()
    };
    output.push_str(&format!(
        "{}{} {} {}{}\n",
        prefix,
        connector,
        get_icon(node),
        name,
        values
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(output, node, &child_prefix, show_values);
}

fn format_children(output: &mut String, node: &ConfigNode, prefix: &str, show_values: bool) {
    let child_count = node.children().len();
    for (i, (name, child)) in node.children().iter().enumerate() {
        format_node(output, name, child, prefix, i == child_count - 1, show_values);
    }
}

pub fn to_treeviz_str(root: &ConfigNode, show_values: bool) -> String {
    let values = if show_values {
        format_values(root)
    } else {
        String::new()
    };
    let mut output = format!("⧉ root{}\n", values);
    format_children(&mut output, root, "", show_values);
    output
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter {
    pub show_values: bool,
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        TreevizFormatter { show_values: true }
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, node: &ConfigNode) -> Result<String, FormatError> {
        Ok(to_treeviz_str(node, self.show_values))
    }

    fn description(&self) -> &str {
        "Visual tree representation with box-drawing connectors"
    }
}
