//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` / `Request` for command execution results
//! - `execute_command` for running a parsed command
//!
//! # Architecture
//!
//! A trimmed Normal-mode line is parsed into the `Command` enum in a fixed
//! order: exact built-ins, `echo` / `reverse` prefixes, `script`
//! subcommands, then the filesystem table. Execution mutates the
//! filesystem directly but only *requests* session changes (mode entry,
//! directory change, screen clear) through [`Request`].

mod execute;
mod result;

pub use execute::{ExecContext, execute_command};
pub use result::{CommandResult, Request};

use crate::config::CHEER_COMMAND;

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Clear,
    Help,
    Whoami,
    Date,
    Hello,
    Autocode,
    Loading,
    ColorCycle,
    Exit,
    Guess,
    Cheer,
    Echo(String),
    Reverse(String),
    Script,
    /// `script run <name>`; the name may be empty
    ScriptRun(String),
    Ls(String),
    Cd(String),
    Mkdir(String),
    Touch(String),
    Cat(String),
    Rm(String),
    Edit(String),
    /// Blank line
    Empty,
    Unknown(String),
}

impl Command {
    /// Parse one input line.
    ///
    /// Command words are case-insensitive; arguments keep their case.
    /// `echo` and `reverse` keep their text verbatim after the first
    /// separator, filesystem commands rejoin their tokens with single spaces.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }

        let (word, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        let word = word.to_lowercase();
        let operand = rest.split_whitespace().collect::<Vec<_>>().join(" ");

        let bare = |cmd: Self| {
            if rest.is_empty() {
                cmd
            } else {
                Self::Unknown(line.to_string())
            }
        };

        match word.as_str() {
            "clear" => bare(Self::Clear),
            "help" => bare(Self::Help),
            "whoami" => bare(Self::Whoami),
            "date" => bare(Self::Date),
            "hello" => bare(Self::Hello),
            "autocode" => bare(Self::Autocode),
            "loading" => bare(Self::Loading),
            "colorcycle" => bare(Self::ColorCycle),
            "exit" => bare(Self::Exit),
            "guess" => bare(Self::Guess),
            w if w == CHEER_COMMAND => bare(Self::Cheer),
            "echo" => Self::Echo(rest.to_string()),
            "reverse" if !rest.is_empty() => Self::Reverse(rest.to_string()),
            "script" => Self::parse_script(line, rest),
            "ls" => Self::Ls(operand),
            "cd" => Self::Cd(operand),
            "mkdir" => Self::Mkdir(operand),
            "touch" => Self::Touch(operand),
            "cat" => Self::Cat(operand),
            "rm" => Self::Rm(operand),
            "edit" => Self::Edit(operand),
            _ => Self::Unknown(line.to_string()),
        }
    }

    /// Script names are taken verbatim apart from the outer whitespace, so
    /// a name saved with inner runs of spaces can be run again.
    fn parse_script(line: &str, rest: &str) -> Self {
        let rest = rest.trim();
        if rest.is_empty() {
            return Self::Script;
        }
        let (sub, name) = rest
            .split_once(char::is_whitespace)
            .unwrap_or((rest, ""));
        if sub.eq_ignore_ascii_case("run") {
            Self::ScriptRun(name.trim().to_string())
        } else {
            Self::Unknown(line.to_string())
        }
    }

    /// Name of the modal session this command opens, if any.
    pub fn modal_name(&self) -> Option<&'static str> {
        match self {
            Self::Autocode => Some("autocode"),
            Self::Guess => Some("guess"),
            Self::Script => Some("script"),
            Self::Edit(_) => Some("edit"),
            _ => None,
        }
    }

    /// Whether a script may run this command unattended.
    ///
    /// Excludes everything modal, timer-driven, or that moves the working
    /// directory.
    pub fn is_script_safe(&self) -> bool {
        matches!(
            self,
            Self::Echo(_)
                | Self::Reverse(_)
                | Self::Ls(_)
                | Self::Whoami
                | Self::Date
                | Self::Cat(_)
                | Self::Clear
                | Self::Mkdir(_)
                | Self::Touch(_)
                | Self::Rm(_)
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
