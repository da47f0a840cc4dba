use generational_arena::Index;
use tracing::instrument;

use crate::arena::TreeArena;

/// Node of the strict binary tree derived from a presentation tree.
///
/// The two links are independent optional slots with exclusive ownership,
/// so the at-most-two-children invariant is structural. The first child of
/// a presentation node becomes `left`, the second becomes `right`; a node
/// with a single child populates exactly one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryNode {
    pub value: String,
    pub left: Option<Box<BinaryNode>>,
    pub right: Option<Box<BinaryNode>>,
}

impl BinaryNode {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            left: None,
            right: None,
        }
    }

    /// A leaf carries neither a left nor a right link.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl TreeArena {
    /// Derives a fresh binary tree from the current presentation tree.
    ///
    /// Pure and total: the arena is only read, never mutated, and an empty
    /// tree yields `None`. Each caller gets an independent tree, so results
    /// derived from earlier snapshots are never invalidated by later edits.
    #[instrument(level = "debug", skip(self))]
    pub fn to_binary(&self) -> Option<Box<BinaryNode>> {
        self.root().and_then(|root| self.convert_node(root))
    }

    fn convert_node(&self, node_idx: Index) -> Option<Box<BinaryNode>> {
        let node = self.get_node(node_idx)?;
        let mut binary = BinaryNode::new(node.data.name.clone());
        if let Some(&first) = node.children.first() {
            binary.left = self.convert_node(first);
        }
        if let Some(&second) = node.children.get(1) {
            binary.right = self.convert_node(second);
        }
        Some(Box::new(binary))
    }
}
