//! Line-oriented edit scripts.
//!
//! One operation per line:
//! - `root NAME` — replace the tree with a single-node tree
//! - `add PARENT CHILD` — append CHILD under the first node named PARENT
//!
//! Blank lines and `#` comments are skipped. Errors carry the 1-based line
//! number of the offending operation.

use thiserror::Error;
use tracing::instrument;

use crate::errors::TreeError;
use crate::session::Session;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown operation '{op}'")]
    UnknownOperation { line: usize, op: String },

    #[error("line {line}: '{op}' expects {expected} argument(s)")]
    MissingArguments {
        line: usize,
        op: String,
        expected: usize,
    },

    #[error("line {line}: {source}")]
    Edit {
        line: usize,
        #[source]
        source: TreeError,
    },
}

pub type ScriptResult<T> = Result<T, ScriptError>;

/// Applies an edit script to a session, stopping at the first rejected
/// operation. Already-applied edits stay applied; each individual edit is
/// all-or-nothing.
#[instrument(level = "debug", skip(session, content))]
pub fn apply(session: &mut Session, content: &str) -> ScriptResult<usize> {
    let mut applied = 0;

    for (i, raw_line) in content.lines().enumerate() {
        let line_no = i + 1;
        let line = raw_line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let op = parts.next().unwrap_or_default();
        match op {
            "root" => {
                let name = parts.next().ok_or_else(|| ScriptError::MissingArguments {
                    line: line_no,
                    op: "root".to_string(),
                    expected: 1,
                })?;
                session
                    .set_root(name)
                    .map_err(|source| ScriptError::Edit {
                        line: line_no,
                        source,
                    })?;
            }
            "add" => {
                let (parent, child) = parts
                    .next()
                    .zip(parts.next())
                    .ok_or_else(|| ScriptError::MissingArguments {
                        line: line_no,
                        op: "add".to_string(),
                        expected: 2,
                    })?;
                session
                    .add_child(parent, child)
                    .map_err(|source| ScriptError::Edit {
                        line: line_no,
                        source,
                    })?;
            }
            other => {
                return Err(ScriptError::UnknownOperation {
                    line: line_no,
                    op: other.to_string(),
                });
            }
        }
        applied += 1;
    }

    Ok(applied)
}

/// Builds a fresh session from an edit script.
#[instrument(level = "debug", skip(content))]
pub fn build_session(content: &str) -> ScriptResult<Session> {
    let mut session = Session::new();
    apply(&mut session, content)?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_skips_comments_and_blanks() {
        let content = "# sample tree\n\nroot A\nadd A B\n";
        let session = build_session(content).unwrap();
        assert_eq!(session.tree().node_count(), 2);
    }

    #[test]
    fn test_unknown_operation_reports_line() {
        let err = build_session("root A\ndrop A\n").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownOperation {
                line: 2,
                op: "drop".to_string()
            }
        );
    }

    #[test]
    fn test_edit_error_carries_line_number() {
        let err = build_session("add A B\n").unwrap_err();
        match err {
            ScriptError::Edit { line, source } => {
                assert_eq!(line, 1);
                assert_eq!(source, TreeError::ParentNotFound("A".to_string()));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
