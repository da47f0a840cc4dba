//! CLI-level errors (wraps engine and script errors)

use thiserror::Error;

use crate::errors::TreeError;
use crate::script::ScriptError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("{0}")]
    Script(#[from] ScriptError),

    #[error("cannot read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Tree(_) | CliError::Script(_) => crate::exitcode::DATAERR,
            CliError::Io(_) => crate::exitcode::NOINPUT,
            CliError::Serialize(_) => crate::exitcode::SOFTWARE,
        }
    }
}
