use tracing::instrument;

use crate::arena::TreeArena;
use crate::errors::TreeResult;
use crate::traversal::{self, TraversalKind, TraversalOutput};
use crate::view::{self, ViewKind};

/// One editing session: the current presentation tree plus the two
/// independently held algorithm selections.
///
/// Every computation converts the current snapshot to a fresh binary tree,
/// so results never alias mutable state and stay valid across later edits.
#[derive(Debug, Clone)]
pub struct Session {
    tree: TreeArena,
    traversal: TraversalKind,
    view: ViewKind,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            tree: TreeArena::new(),
            traversal: TraversalKind::Inorder,
            view: ViewKind::Top,
        }
    }

    pub fn tree(&self) -> &TreeArena {
        &self.tree
    }

    pub fn traversal(&self) -> TraversalKind {
        self.traversal
    }

    pub fn view(&self) -> ViewKind {
        self.view
    }

    /// Replaces the tree with a single-node tree.
    #[instrument(level = "debug", skip(self))]
    pub fn set_root(&mut self, name: &str) -> TreeResult<()> {
        self.tree.set_root(name).map(|_| ())
    }

    /// Appends a child under the first node with the given name.
    #[instrument(level = "debug", skip(self))]
    pub fn add_child(&mut self, parent_name: &str, child_name: &str) -> TreeResult<()> {
        self.tree.add_child(parent_name, child_name).map(|_| ())
    }

    /// Selecting a traversal leaves the view selection untouched.
    pub fn select_traversal(&mut self, kind: TraversalKind) {
        self.traversal = kind;
    }

    /// Selecting a view leaves the traversal selection untouched.
    pub fn select_view(&mut self, kind: ViewKind) {
        self.view = kind;
    }

    /// Converts the current snapshot and runs the selected traversal.
    #[instrument(level = "debug", skip(self))]
    pub fn compute_traversal(&self) -> TraversalOutput {
        let root = self.tree.to_binary();
        traversal::run(self.traversal, root.as_deref())
    }

    /// Converts the current snapshot and runs the selected view.
    #[instrument(level = "debug", skip(self))]
    pub fn compute_view(&self) -> Vec<String> {
        let root = self.tree.to_binary();
        view::run(self.view, root.as_deref())
    }

    /// Selected traversal result as a JSON text line.
    pub fn traversal_text(&self) -> serde_json::Result<String> {
        self.compute_traversal().to_json()
    }

    /// Selected view result as a comma-and-space-joined line.
    pub fn view_text(&self) -> String {
        view::join_line(&self.compute_view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selections_are_independent() {
        let mut session = Session::new();
        session.select_traversal(TraversalKind::Zigzag);
        assert_eq!(session.view(), ViewKind::Top);
        session.select_view(ViewKind::Bottom);
        assert_eq!(session.traversal(), TraversalKind::Zigzag);
    }

    #[test]
    fn test_compute_on_empty_session() {
        let session = Session::new();
        assert!(session.compute_traversal().is_empty());
        assert!(session.compute_view().is_empty());
        assert_eq!(session.view_text(), "");
    }
}
