//! Custom error types for the terminal.
//!
//! - [`FsError`] - Virtual filesystem lookups and mutations
//! - [`TerminalError`] - Command dispatch, modal gating and script execution
//!
//! Nothing here is fatal: every error ends up as one error line in the
//! output log and the session carries on.

use thiserror::Error;

/// Virtual filesystem errors.
///
/// The carried string is the name as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    #[error("\"{0}\" does not exist")]
    NotFound(String),
    #[error("\"{0}\" is not a folder")]
    NotAFolder(String),
    #[error("\"{0}\" is not a file")]
    IsAFolder(String),
    #[error("File or folder already exists")]
    AlreadyExists(String),
    #[error("Folder \"{0}\" is not empty.")]
    DirectoryNotEmpty(String),
    #[error("Invalid path")]
    InvalidPath(String),
    /// Command called without its operand; carries what should be specified
    #[error("Specify {0}")]
    MissingOperand(&'static str),
}

/// Errors surfaced by the command registry and the modal controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TerminalError {
    #[error("Error: {0}")]
    Fs(#[from] FsError),
    #[error("Error: Cannot enter {requested} mode while another modal session ({active}) is active.")]
    ModalConflict {
        requested: &'static str,
        active: &'static str,
    },
    #[error("Error: {0}")]
    InvalidArgument(String),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("[SCRIPT ERROR] Unknown/Non-Executable Command: {0}")]
    ScriptLineUnsupported(String),
}
