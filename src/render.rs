use generational_arena::Index;
use termtree::Tree;

use crate::arena::TreeArena;
use crate::binary::BinaryNode;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for TreeArena {
    fn to_tree_string(&self) -> Tree<String> {
        if let Some(root_idx) = self.root() {
            let root_name = self
                .get_node(root_idx)
                .map(|n| n.data.name.clone())
                .unwrap_or_default();
            let mut tree = Tree::new(root_name);

            fn build_tree(arena: &TreeArena, node_idx: Index, parent_tree: &mut Tree<String>) {
                if let Some(node) = arena.get_node(node_idx) {
                    for &child_idx in &node.children {
                        if let Some(child) = arena.get_node(child_idx) {
                            let mut child_tree = Tree::new(child.data.name.clone());
                            build_tree(arena, child_idx, &mut child_tree);
                            parent_tree.push(child_tree);
                        }
                    }
                }
            }

            build_tree(self, root_idx, &mut tree);
            tree
        } else {
            Tree::new("Empty tree".to_string())
        }
    }
}

impl TreeNodeConvert for BinaryNode {
    /// Renders the binary tree with the occupied slot of each child marked.
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(node: &BinaryNode, slot: Option<&str>) -> Tree<String> {
            let label = match slot {
                Some(slot) => format!("{}: {}", slot, node.value),
                None => node.value.clone(),
            };
            let mut tree = Tree::new(label);
            if let Some(left) = node.left.as_deref() {
                tree.push(build_tree(left, Some("L")));
            }
            if let Some(right) = node.right.as_deref() {
                tree.push(build_tree(right, Some("R")));
            }
            tree
        }

        build_tree(self, None)
    }
}
