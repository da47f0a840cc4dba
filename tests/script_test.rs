//! Tests for the edit-script parser

use treelab::script::{apply, build_session, ScriptError};
use treelab::{Session, TreeError};

#[ctor::ctor]
fn init() {
    treelab::util::testing::init_test_setup();
}

#[test]
fn given_script_with_comments_when_building_then_applies_only_operations() {
    let content = "\
# build a small tree
root A

add A B
add A C
";
    let session = build_session(content).unwrap();
    assert_eq!(session.tree().node_count(), 3);
}

#[test]
fn given_script_when_applying_then_reports_operation_count() {
    let mut session = Session::new();
    let applied = apply(&mut session, "root A\nadd A B\n").unwrap();
    assert_eq!(applied, 2);
}

#[test]
fn given_unknown_operation_when_applying_then_fails_with_line_number() {
    let err = build_session("root A\nremove B\n").unwrap_err();
    assert_eq!(
        err,
        ScriptError::UnknownOperation {
            line: 2,
            op: "remove".to_string()
        }
    );
}

#[test]
fn given_missing_arguments_when_applying_then_fails_with_expected_count() {
    let err = build_session("root A\nadd A\n").unwrap_err();
    assert_eq!(
        err,
        ScriptError::MissingArguments {
            line: 2,
            op: "add".to_string(),
            expected: 2
        }
    );
}

#[test]
fn given_rejected_edit_when_applying_then_earlier_edits_stay_applied() {
    let mut session = Session::new();
    let err = apply(&mut session, "root A\nadd A B\nadd Z C\n").unwrap_err();

    match err {
        ScriptError::Edit { line, source } => {
            assert_eq!(line, 3);
            assert_eq!(source, TreeError::ParentNotFound("Z".to_string()));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    // the first two operations were applied all-or-nothing each
    assert_eq!(session.tree().node_count(), 2);
}

#[test]
fn given_overfull_parent_in_script_when_applying_then_child_limit_error() {
    let err = build_session("root A\nadd A B\nadd A C\nadd A D\n").unwrap_err();
    match err {
        ScriptError::Edit { line, source } => {
            assert_eq!(line, 4);
            assert_eq!(source, TreeError::ChildLimitExceeded("A".to_string()));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
