//! Tests for the four silhouette views

use rstest::rstest;
use treelab::script::build_session;
use treelab::view::{self, ViewKind};
use treelab::BinaryNode;

#[ctor::ctor]
fn init() {
    treelab::util::testing::init_test_setup();
}

/// A(B(D,E), C(F,G))
fn full_tree() -> Option<Box<BinaryNode>> {
    let session = build_session(
        "root A\nadd A B\nadd A C\nadd B D\nadd B E\nadd C F\nadd C G\n",
    )
    .unwrap();
    session.tree().to_binary()
}

#[test]
fn given_full_tree_when_top_view_then_first_writer_per_offset_wins() {
    let root = full_tree();
    // E and F share offset 0 with A; A is discovered first
    assert_eq!(view::top(root.as_deref()), vec!["D", "B", "A", "C", "G"]);
}

#[test]
fn given_full_tree_when_bottom_view_then_last_writer_per_offset_wins() {
    let root = full_tree();
    // F is the last BFS visitor at offset 0
    assert_eq!(view::bottom(root.as_deref()), vec!["D", "B", "F", "C", "G"]);
}

#[test]
fn given_full_tree_when_top_and_bottom_then_lengths_match_distinct_offsets() {
    let root = full_tree();
    let top = view::top(root.as_deref());
    let bottom = view::bottom(root.as_deref());

    // 5 distinct offsets: -2..=2
    assert_eq!(top.len(), 5);
    assert_eq!(top.len(), bottom.len());
}

#[test]
fn given_full_tree_when_left_view_then_first_node_per_level() {
    let root = full_tree();
    assert_eq!(view::left(root.as_deref()), vec!["A", "B", "D"]);
}

#[test]
fn given_full_tree_when_right_view_then_mirrors_left_recursion() {
    let root = full_tree();
    assert_eq!(view::right(root.as_deref()), vec!["A", "C", "G"]);
}

#[test]
fn given_side_views_when_comparing_lengths_then_both_equal_tree_height() {
    let root = full_tree();
    assert_eq!(view::left(root.as_deref()).len(), 3);
    assert_eq!(view::right(root.as_deref()).len(), 3);
}

#[test]
fn given_left_only_chain_when_side_views_then_left_and_right_identical() {
    // A(B(C)) with only left-descending children
    let session = build_session("root A\nadd A B\nadd B C\n").unwrap();
    let root = session.tree().to_binary();

    let left = view::left(root.as_deref());
    let right = view::right(root.as_deref());
    assert_eq!(left, vec!["A", "B", "C"]);
    assert_eq!(left, right);
}

#[test]
fn given_hidden_level_when_right_view_then_falls_back_to_left_subtree() {
    // A(B(D), C): level 2 only exists under B, so the right view must dig
    // into the left subtree to cover it
    let session = build_session("root A\nadd A B\nadd A C\nadd B D\n").unwrap();
    let root = session.tree().to_binary();

    assert_eq!(view::right(root.as_deref()), vec!["A", "C", "D"]);
}

#[rstest]
#[case::top(ViewKind::Top)]
#[case::bottom(ViewKind::Bottom)]
#[case::left(ViewKind::Left)]
#[case::right(ViewKind::Right)]
fn given_empty_tree_when_running_any_view_then_output_is_empty(#[case] kind: ViewKind) {
    assert!(view::run(kind, None).is_empty());
}
