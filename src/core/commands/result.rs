//! Command execution result type.

use crate::core::filesystem::EditHandle;
use crate::models::{OutputLine, VirtualPath};

/// Session-level change a command asks for.
///
/// Commands never touch the session directly; the controller decides
/// whether and how to apply the request (modal entries may be refused).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    ClearScreen,
    ChangeDirectory(VirtualPath),
    StartAutocode,
    StartGuess,
    StartScript,
    StartEdit(EditHandle),
    RunScript { name: String, content: String },
    StartLoading,
    ToggleColorCycle,
    Shutdown,
}

/// Result of executing a command.
#[derive(Clone, Debug)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    pub request: Option<Request>,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            request: None,
        }
    }

    pub fn line(line: OutputLine) -> Self {
        Self::output(vec![line])
    }

    /// Create a result carrying a request and no output.
    pub fn request(request: Request) -> Self {
        Self {
            output: vec![],
            request: Some(request),
        }
    }

    /// Create an empty result (no output, no request).
    pub fn empty() -> Self {
        Self {
            output: vec![],
            request: None,
        }
    }
}
