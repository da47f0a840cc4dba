//! Silhouette projections of a binary tree.
//!
//! Each view picks exactly one value per distinct horizontal offset (top,
//! bottom) or per depth level (left, right). All views are read-only and
//! return an empty sequence for an empty tree.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use clap::ValueEnum;
use itertools::Itertools;
use tracing::instrument;

use crate::binary::BinaryNode;

/// The selectable view directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewKind {
    Top,
    Bottom,
    Left,
    Right,
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewKind::Top => "Top",
            ViewKind::Bottom => "Bottom",
            ViewKind::Left => "Left",
            ViewKind::Right => "Right",
        };
        write!(f, "{}", name)
    }
}

/// Runs the selected view on the given root.
#[instrument(level = "debug", skip(root))]
pub fn run(kind: ViewKind, root: Option<&BinaryNode>) -> Vec<String> {
    match kind {
        ViewKind::Top => top(root),
        ViewKind::Bottom => bottom(root),
        ViewKind::Left => left(root),
        ViewKind::Right => right(root),
    }
}

/// Serializes a view result as one comma-and-space-joined line.
pub fn join_line(values: &[String]) -> String {
    values.iter().join(", ")
}

/// First value discovered per horizontal offset during BFS, ascending
/// offsets. First writer wins.
#[instrument(level = "debug", skip(root))]
pub fn top(root: Option<&BinaryNode>) -> Vec<String> {
    scan_columns(root, false)
}

/// Last value discovered per horizontal offset during BFS, ascending
/// offsets. Last writer wins.
#[instrument(level = "debug", skip(root))]
pub fn bottom(root: Option<&BinaryNode>) -> Vec<String> {
    scan_columns(root, true)
}

fn scan_columns(root: Option<&BinaryNode>, overwrite: bool) -> Vec<String> {
    let mut columns: BTreeMap<i64, String> = BTreeMap::new();
    let mut queue: VecDeque<(&BinaryNode, i64)> = VecDeque::new();

    if let Some(root) = root {
        queue.push_back((root, 0));
    }
    while let Some((node, offset)) = queue.pop_front() {
        if overwrite {
            columns.insert(offset, node.value.clone());
        } else {
            columns.entry(offset).or_insert_with(|| node.value.clone());
        }
        if let Some(left) = node.left.as_deref() {
            queue.push_back((left, offset - 1));
        }
        if let Some(right) = node.right.as_deref() {
            queue.push_back((right, offset + 1));
        }
    }

    columns.into_values().collect()
}

/// First node reached per depth level in node, left, right recursion order.
#[instrument(level = "debug", skip(root))]
pub fn left(root: Option<&BinaryNode>) -> Vec<String> {
    let mut result = Vec::new();
    if let Some(root) = root {
        descend_left(root, 0, &mut result);
    }
    result
}

fn descend_left(node: &BinaryNode, level: usize, result: &mut Vec<String>) {
    if result.len() == level {
        result.push(node.value.clone());
    }
    if let Some(left) = node.left.as_deref() {
        descend_left(left, level + 1, result);
    }
    if let Some(right) = node.right.as_deref() {
        descend_left(right, level + 1, result);
    }
}

/// First node reached per depth level in node, right, left recursion order.
#[instrument(level = "debug", skip(root))]
pub fn right(root: Option<&BinaryNode>) -> Vec<String> {
    let mut result = Vec::new();
    if let Some(root) = root {
        descend_right(root, 0, &mut result);
    }
    result
}

fn descend_right(node: &BinaryNode, level: usize, result: &mut Vec<String>) {
    if result.len() == level {
        result.push(node.value.clone());
    }
    if let Some(right) = node.right.as_deref() {
        descend_right(right, level + 1, result);
    }
    if let Some(left) = node.left.as_deref() {
        descend_right(left, level + 1, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::TreeArena;

    // A(B(D,E), C(F,G))
    fn full_tree() -> Option<Box<BinaryNode>> {
        let mut tree = TreeArena::new();
        tree.set_root("A").unwrap();
        tree.add_child("A", "B").unwrap();
        tree.add_child("A", "C").unwrap();
        tree.add_child("B", "D").unwrap();
        tree.add_child("B", "E").unwrap();
        tree.add_child("C", "F").unwrap();
        tree.add_child("C", "G").unwrap();
        tree.to_binary()
    }

    #[test]
    fn test_top_view_full_tree() {
        let root = full_tree();
        // Offsets: D=-2, B=-1, A=0 (E/F share 0 but come later), C=1, G=2
        assert_eq!(top(root.as_deref()), vec!["D", "B", "A", "C", "G"]);
    }

    #[test]
    fn test_bottom_view_full_tree() {
        let root = full_tree();
        // F is the last BFS writer at offset 0
        assert_eq!(bottom(root.as_deref()), vec!["D", "B", "F", "C", "G"]);
    }

    #[test]
    fn test_left_and_right_view_full_tree() {
        let root = full_tree();
        assert_eq!(left(root.as_deref()), vec!["A", "B", "D"]);
        assert_eq!(right(root.as_deref()), vec!["A", "C", "G"]);
    }

    #[test]
    fn test_empty_root_yields_empty_views() {
        assert!(top(None).is_empty());
        assert!(bottom(None).is_empty());
        assert!(left(None).is_empty());
        assert!(right(None).is_empty());
    }

    #[test]
    fn test_join_line() {
        let values = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        assert_eq!(join_line(&values), "A, B, C");
    }
}
