use thiserror::Error;

/// Edit-operation errors. A rejected edit leaves the tree untouched;
/// there is no partially applied state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("invalid root name: must not be empty or whitespace")]
    InvalidRootName,

    #[error("invalid child name: must not be empty or whitespace")]
    InvalidChildName,

    #[error("no node named '{0}' in the tree")]
    ParentNotFound(String),

    #[error("node '{0}' already has two children")]
    ChildLimitExceeded(String),
}

pub type TreeResult<T> = Result<T, TreeError>;
