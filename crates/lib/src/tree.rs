//! Tree projection of a document.
//!
//! [`build_tree`] derives the navigator tree and [`flatten`] the indented
//! outline. Both are recomputed from scratch on every change.

use tracing::trace;

use crate::doc::{Path, PathBuf, Segment, Value, ValueKind};

/// One node of the navigator tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Full path from the document root.
    pub path: PathBuf,
    /// Display key: the map key, or the index for sequence elements.
    pub key: String,
    /// True for primitives and null.
    pub is_leaf: bool,
    /// Children in document order; empty for leaves.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Canonical text form of [`TreeNode::path`].
    pub fn path_text(&self) -> String {
        self.path.to_string()
    }
}

/// One row of the flattened outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRow {
    pub path: PathBuf,
    /// Depth below the root; top-level keys are at level 0.
    pub level: usize,
    pub key: String,
    pub kind: ValueKind,
    pub children_count: usize,
}

fn children_of<'a>(value: &'a Value) -> Box<dyn Iterator<Item = (Segment, &'a Value)> + 'a> {
    match value {
        Value::Map(map) => Box::new(map.iter().map(|(k, v)| (Segment::from(k), v))),
        Value::List(list) => Box::new(list.iter().enumerate().map(|(i, v)| (Segment::Index(i), v))),
        _ => Box::new(std::iter::empty()),
    }
}

fn build_children(value: &Value, base: &PathBuf) -> Vec<TreeNode> {
    children_of(value)
        .map(|(segment, child)| {
            let path = base.child(segment.clone());
            TreeNode {
                key: segment.label(),
                is_leaf: child.is_leaf(),
                children: build_children(child, &path),
                path,
            }
        })
        .collect()
}

/// Builds the navigator tree for `document`.
///
/// A primitive root yields no nodes.
pub fn build_tree(document: &Value) -> Vec<TreeNode> {
    let nodes = build_children(document, &PathBuf::root());
    trace!(top_level = nodes.len(), "built tree projection");
    nodes
}

/// Finds the node at `path` in a built tree.
pub fn find_node<'a>(nodes: &'a [TreeNode], path: impl AsRef<Path>) -> Option<&'a TreeNode> {
    let path = path.as_ref();
    let mut level = nodes;
    let mut found = None;
    for depth in 1..=path.len() {
        let prefix = path.prefix(depth);
        let node = level.iter().find(|node| &*node.path == prefix)?;
        level = &node.children;
        found = Some(node);
    }
    found
}

fn flatten_into(value: &Value, base: &PathBuf, level: usize, rows: &mut Vec<OutlineRow>) {
    for (segment, child) in children_of(value) {
        let path = base.child(segment.clone());
        rows.push(OutlineRow {
            path: path.clone(),
            level,
            key: segment.label(),
            kind: child.kind(),
            children_count: child.children_count(),
        });
        flatten_into(child, &path, level + 1, rows);
    }
}

/// Lists every node of `document` in pre-order with its depth.
pub fn flatten(document: &Value) -> Vec<OutlineRow> {
    let mut rows = Vec::new();
    flatten_into(document, &PathBuf::root(), 0, &mut rows);
    trace!(rows = rows.len(), "flattened outline");
    rows
}
