//! Linearizations of a binary tree.
//!
//! All six algorithms are read-only over `Option<&BinaryNode>` and return an
//! empty result for an empty tree. Flat traversals yield one value per node;
//! zigzag and vertical yield grouped output (levels resp. columns).

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use clap::ValueEnum;
use serde::Serialize;
use tracing::instrument;

use crate::binary::BinaryNode;

/// The selectable traversal algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraversalKind {
    Inorder,
    Preorder,
    Postorder,
    Boundary,
    Zigzag,
    Vertical,
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TraversalKind::Inorder => "Inorder",
            TraversalKind::Preorder => "Preorder",
            TraversalKind::Postorder => "Postorder",
            TraversalKind::Boundary => "Boundary",
            TraversalKind::Zigzag => "Zigzag",
            TraversalKind::Vertical => "Vertical",
        };
        write!(f, "{}", name)
    }
}

/// Traversal result: flat value sequence, or sequence of groups for the
/// level/column based algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TraversalOutput {
    Flat(Vec<String>),
    Grouped(Vec<Vec<String>>),
}

impl TraversalOutput {
    /// Serializes the result as a single JSON line.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Total number of emitted values across all groups.
    pub fn len(&self) -> usize {
        match self {
            TraversalOutput::Flat(values) => values.len(),
            TraversalOutput::Grouped(groups) => groups.iter().map(Vec::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Runs the selected traversal on the given root.
#[instrument(level = "debug", skip(root))]
pub fn run(kind: TraversalKind, root: Option<&BinaryNode>) -> TraversalOutput {
    match kind {
        TraversalKind::Inorder => TraversalOutput::Flat(inorder(root)),
        TraversalKind::Preorder => TraversalOutput::Flat(preorder(root)),
        TraversalKind::Postorder => TraversalOutput::Flat(postorder(root)),
        TraversalKind::Boundary => TraversalOutput::Flat(boundary(root)),
        TraversalKind::Zigzag => TraversalOutput::Grouped(zigzag(root)),
        TraversalKind::Vertical => TraversalOutput::Grouped(vertical(root)),
    }
}

/// Left-subtree, node, right-subtree ordering via an explicit stack:
/// descend left pushing nodes, pop to emit, continue with the right subtree.
#[instrument(level = "debug", skip(root))]
pub fn inorder(root: Option<&BinaryNode>) -> Vec<String> {
    let mut result = Vec::new();
    let mut stack: Vec<&BinaryNode> = Vec::new();
    let mut node = root;

    while node.is_some() || !stack.is_empty() {
        while let Some(n) = node {
            stack.push(n);
            node = n.left.as_deref();
        }
        if let Some(n) = stack.pop() {
            result.push(n.value.clone());
            node = n.right.as_deref();
        }
    }

    result
}

/// Node, left-subtree, right-subtree ordering: children pushed right before
/// left so the left subtree is popped first.
#[instrument(level = "debug", skip(root))]
pub fn preorder(root: Option<&BinaryNode>) -> Vec<String> {
    let mut result = Vec::new();
    let mut stack: Vec<&BinaryNode> = Vec::new();

    if let Some(root) = root {
        stack.push(root);
    }
    while let Some(node) = stack.pop() {
        result.push(node.value.clone());
        if let Some(right) = node.right.as_deref() {
            stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            stack.push(left);
        }
    }

    result
}

/// Two-stage stack approach: the work stack produces a root-right-left
/// ordering onto the result stack, which is then drained to reverse it into
/// left, right, root.
#[instrument(level = "debug", skip(root))]
pub fn postorder(root: Option<&BinaryNode>) -> Vec<String> {
    let mut result = Vec::new();
    let mut work: Vec<&BinaryNode> = Vec::new();
    let mut reversed: Vec<&BinaryNode> = Vec::new();

    if let Some(root) = root {
        work.push(root);
    }
    while let Some(node) = work.pop() {
        if let Some(left) = node.left.as_deref() {
            work.push(left);
        }
        if let Some(right) = node.right.as_deref() {
            work.push(right);
        }
        reversed.push(node);
    }
    while let Some(node) = reversed.pop() {
        result.push(node.value.clone());
    }

    result
}

/// Clockwise outline of the tree: root (unless it is itself a leaf), the left
/// boundary excluding leaves, all leaves left-to-right, then the right
/// boundary excluding leaves, bottom-to-top. A lone root is emitted once,
/// by the leaf pass.
#[instrument(level = "debug", skip(root))]
pub fn boundary(root: Option<&BinaryNode>) -> Vec<String> {
    let mut result = Vec::new();
    let Some(root) = root else {
        return result;
    };

    if !root.is_leaf() {
        result.push(root.value.clone());
    }
    add_left_boundary(root, &mut result);
    add_leaves(root, &mut result);
    add_right_boundary(root, &mut result);

    result
}

fn add_left_boundary(root: &BinaryNode, res: &mut Vec<String>) {
    let mut curr = root.left.as_deref();
    while let Some(node) = curr {
        if !node.is_leaf() {
            res.push(node.value.clone());
        }
        curr = if node.left.is_some() {
            node.left.as_deref()
        } else {
            node.right.as_deref()
        };
    }
}

fn add_leaves(node: &BinaryNode, res: &mut Vec<String>) {
    if node.is_leaf() {
        res.push(node.value.clone());
        return;
    }
    if let Some(left) = node.left.as_deref() {
        add_leaves(left, res);
    }
    if let Some(right) = node.right.as_deref() {
        add_leaves(right, res);
    }
}

fn add_right_boundary(root: &BinaryNode, res: &mut Vec<String>) {
    let mut collected = Vec::new();
    let mut curr = root.right.as_deref();
    while let Some(node) = curr {
        if !node.is_leaf() {
            collected.push(node.value.clone());
        }
        curr = if node.right.is_some() {
            node.right.as_deref()
        } else {
            node.left.as_deref()
        };
    }
    // Encounter order is top-to-bottom; the outline wants bottom-to-top here
    collected.reverse();
    res.append(&mut collected);
}

/// Breadth-first level grouping with every second level (starting at index 1)
/// reversed before it is appended.
#[instrument(level = "debug", skip(root))]
pub fn zigzag(root: Option<&BinaryNode>) -> Vec<Vec<String>> {
    let mut result = Vec::new();
    let Some(root) = root else {
        return result;
    };

    let mut queue: VecDeque<&BinaryNode> = VecDeque::new();
    queue.push_back(root);
    let mut reverse = false;

    while !queue.is_empty() {
        let level_size = queue.len();
        let mut level = Vec::with_capacity(level_size);

        for _ in 0..level_size {
            if let Some(node) = queue.pop_front() {
                level.push(node.value.clone());
                if let Some(left) = node.left.as_deref() {
                    queue.push_back(left);
                }
                if let Some(right) = node.right.as_deref() {
                    queue.push_back(right);
                }
            }
        }

        if reverse {
            level.reverse();
        }
        reverse = !reverse;
        result.push(level);
    }

    result
}

/// Groups node values by horizontal offset (root 0, left child -1, right
/// child +1), emitted in ascending offset order.
///
/// Within a group, values keep breadth-first discovery order: two nodes
/// sharing an offset at different depths appear in the order the BFS reaches
/// them. They are deliberately not re-sorted by depth.
#[instrument(level = "debug", skip(root))]
pub fn vertical(root: Option<&BinaryNode>) -> Vec<Vec<String>> {
    let mut columns: BTreeMap<i64, Vec<String>> = BTreeMap::new();
    let mut queue: VecDeque<(&BinaryNode, i64)> = VecDeque::new();

    if let Some(root) = root {
        queue.push_back((root, 0));
    }
    while let Some((node, offset)) = queue.pop_front() {
        columns.entry(offset).or_default().push(node.value.clone());
        if let Some(left) = node.left.as_deref() {
            queue.push_back((left, offset - 1));
        }
        if let Some(right) = node.right.as_deref() {
            queue.push_back((right, offset + 1));
        }
    }

    columns.into_values().collect()
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
    fn test_inorder_full_tree() {
        let root = full_tree();
        assert_eq!(
            inorder(root.as_deref()),
            vec!["D", "B", "E", "A", "F", "C", "G"]
        );
    }

    #[test]
    fn test_preorder_full_tree() {
        let root = full_tree();
        assert_eq!(
            preorder(root.as_deref()),
            vec!["A", "B", "D", "E", "C", "F", "G"]
        );
    }

    #[test]
    fn test_postorder_full_tree() {
        let root = full_tree();
        assert_eq!(
            postorder(root.as_deref()),
            vec!["D", "E", "B", "F", "G", "C", "A"]
        );
    }

    #[test]
    fn test_empty_root_yields_empty_output() {
        assert!(inorder(None).is_empty());
        assert!(preorder(None).is_empty());
        assert!(postorder(None).is_empty());
        assert!(boundary(None).is_empty());
        assert!(zigzag(None).is_empty());
        assert!(vertical(None).is_empty());
    }

    #[test]
    fn test_output_json_shapes() {
        let flat = TraversalOutput::Flat(vec!["A".into(), "B".into()]);
        assert_eq!(flat.to_json().unwrap(), r#"["A","B"]"#);

        let grouped = TraversalOutput::Grouped(vec![vec!["A".into()], vec!["C".into(), "B".into()]]);
        assert_eq!(grouped.to_json().unwrap(), r#"[["A"],["C","B"]]"#);
    }
}
