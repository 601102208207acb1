//! The configuration tree
//!
//! A [ConfigNode] is one path segment. It holds the values assigned to exactly that path, in
//! the order they were assigned, and its children keyed by segment name. Children are kept in a
//! `BTreeMap`, so iteration is lexicographic, not insertion order.
//!
//! A node can have values and children at the same time: `a.b = 1` and `a.b.c = 2` both live
//! on the `a -> b` node, one as a value and one as a child.
//!
//! Path lookups come in two flavors:
//!     - [ConfigNode::get_node] and [ConfigNode::resolve_mut] create every missing node along
//!       the way. Reading a path through them materializes it.
//!     - [ConfigNode::find] and [ConfigNode::descend] only walk what exists.

use crate::ini::convert::FromValue;
use crate::ini::parsing::parse_path;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigNode {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    values: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    children: BTreeMap<String, ConfigNode>,
}

impl ConfigNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value
    pub fn add(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    /// No values and no children
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.children.is_empty()
    }

    /// At least one value, regardless of children
    pub fn has_data(&self) -> bool {
        !self.values.is_empty()
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Drop all values and children
    pub fn clear(&mut self) {
        self.values.clear();
        self.children.clear();
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn children(&self) -> &BTreeMap<String, ConfigNode> {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut BTreeMap<String, ConfigNode> {
        &mut self.children
    }

    /// Child by exact segment name (no path parsing)
    pub fn child(&self, name: &str) -> Option<&ConfigNode> {
        self.children.get(name)
    }

    /// Child by exact segment name, created if missing
    pub fn child_mut(&mut self, name: &str) -> &mut ConfigNode {
        self.children.entry(name.to_string()).or_default()
    }

    /// Walk `segments` from this node, creating missing children
    pub fn resolve_mut<'p, I>(&mut self, segments: I) -> &mut ConfigNode
    where
        I: IntoIterator<Item = &'p str>,
    {
        segments
            .into_iter()
            .fold(self, |node, segment| node.child_mut(segment))
    }

    /// Walk `segments` from this node without creating anything
    pub fn descend<'p, I>(&self, segments: I) -> Option<&ConfigNode>
    where
        I: IntoIterator<Item = &'p str>,
    {
        segments
            .into_iter()
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// Resolve a dotted path such as `"server.http.port"`, creating missing nodes.
    ///
    /// The path uses key syntax: `.` separates segments, leading and trailing whitespace around
    /// segments is ignored, and parsing stops at `:`, `=` or an empty segment. An empty path is
    /// this node.
    pub fn get_node(&mut self, path: &str) -> &mut ConfigNode {
        self.resolve_mut(parse_path(path))
    }

    /// Resolve a dotted path without creating anything
    pub fn find(&self, path: &str) -> Option<&ConfigNode> {
        self.descend(parse_path(path))
    }

    /// Stored value at `index`, or "" past the end
    pub fn as_str(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or("")
    }

    /// Stored value at `index` converted to `T`. Past the end this is `T`'s zero value.
    pub fn value<T: FromValue>(&self, index: usize) -> T {
        T::from_value(self.as_str(index))
    }
}
