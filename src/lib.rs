//! treelab: incrementally build a presentation tree (named nodes, at most two
//! ordered children each), derive a strict binary tree from it, and compute
//! traversals and silhouette views.
//!
//! Data flow: [`arena::TreeArena`] edits -> [`TreeArena::to_binary`] ->
//! [`traversal`] / [`view`] algorithms -> serialized text. A [`session::Session`]
//! bundles the current tree with the two independent algorithm selections.
//!
//! [`TreeArena::to_binary`]: arena::TreeArena::to_binary

pub mod arena;
pub mod binary;
pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod render;
pub mod script;
pub mod session;
pub mod traversal;
pub mod util;
pub mod view;

pub use arena::TreeArena;
pub use binary::BinaryNode;
pub use errors::{TreeError, TreeResult};
pub use session::Session;
pub use traversal::{TraversalKind, TraversalOutput};
pub use view::ViewKind;
