use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// Data payload for presentation tree nodes.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Node label, unique lookup key within the tree
    pub name: String,
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Label data for this node
    pub data: NodeData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, at most two, in insertion order
    pub children: Vec<Index>,
}

/// Arena-based presentation tree built incrementally by name-addressed edits.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Every node carries at most two ordered children; the first child maps to
/// the left slot of the derived binary tree, the second to the right slot.
#[derive(Debug, Clone)]
pub struct TreeArena {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Index of the root node, None for the empty tree
    root: Option<Index>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Replaces the entire tree with a fresh single-node tree.
    ///
    /// The name is trimmed before storage. Rejects empty or whitespace-only
    /// names, leaving any existing tree unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn set_root(&mut self, name: &str) -> TreeResult<Index> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TreeError::InvalidRootName);
        }

        self.arena = Arena::new();
        let root_idx = self.arena.insert(TreeNode {
            data: NodeData {
                name: name.to_string(),
            },
            parent: None,
            children: Vec::new(),
        });
        self.root = Some(root_idx);
        Ok(root_idx)
    }

    /// Appends a child to the first node named `parent_name` (depth-first
    /// search order).
    ///
    /// All-or-nothing: name validation and the two-child capacity check both
    /// happen before the arena is touched, so a rejected edit leaves the tree
    /// byte-for-byte unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn add_child(&mut self, parent_name: &str, child_name: &str) -> TreeResult<Index> {
        let child_name = child_name.trim();
        if child_name.is_empty() {
            return Err(TreeError::InvalidChildName);
        }

        let parent_idx = self
            .find_by_name(parent_name)
            .ok_or_else(|| TreeError::ParentNotFound(parent_name.to_string()))?;

        // Capacity check before any insertion
        if let Some(parent) = self.arena.get(parent_idx) {
            if parent.children.len() >= 2 {
                return Err(TreeError::ChildLimitExceeded(parent.data.name.clone()));
            }
        }

        let child_idx = self.arena.insert(TreeNode {
            data: NodeData {
                name: child_name.to_string(),
            },
            parent: Some(parent_idx),
            children: Vec::new(),
        });
        if let Some(parent) = self.arena.get_mut(parent_idx) {
            parent.children.push(child_idx);
        }
        Ok(child_idx)
    }

    /// Locates the first node with the given name in preorder DFS order.
    #[instrument(level = "trace", skip(self))]
    pub fn find_by_name(&self, name: &str) -> Option<Index> {
        self.iter()
            .find(|(_, node)| node.data.name == name)
            .map(|(idx, _)| idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator {
        TreeIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Collects all leaf node names in left-to-right order.
    ///
    /// Empty trees return an empty vector.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<String> {
        let mut leaves = Vec::new();
        if let Some(root) = self.root {
            self.collect_leaves(root, &mut leaves);
        }
        leaves
    }

    fn collect_leaves(&self, node_idx: Index, leaves: &mut Vec<String>) {
        if let Some(node) = self.get_node(node_idx) {
            if node.children.is_empty() {
                leaves.push(node.data.name.clone());
            } else {
                for &child in &node.children {
                    self.collect_leaves(child, leaves);
                }
            }
        }
    }
}

pub struct TreeIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a TreeArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
