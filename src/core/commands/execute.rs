//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and returns results.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::config::{CHEER_LINES, HELLO_LINES, HELP_TEXT, USER_NAME};
use crate::core::error::{FsError, TerminalError};
use crate::core::filesystem::VirtualFs;
use crate::models::{OutputLine, VirtualPath};

use super::{Command, CommandResult, Request};

/// Everything a command may read or mutate.
pub struct ExecContext<'a> {
    pub fs: &'a mut VirtualFs,
    pub cwd: &'a VirtualPath,
    pub rng: &'a mut StdRng,
    /// Returns the current date as display text
    pub clock: fn() -> String,
}

/// Execute a parsed command.
///
/// Filesystem mutations happen immediately; anything that changes the
/// session (mode, working directory, scrollback) is returned as a
/// [`Request`].
pub fn execute_command(cmd: Command, ctx: &mut ExecContext<'_>) -> CommandResult {
    match cmd {
        Command::Empty => CommandResult::empty(),
        Command::Clear => CommandResult::request(Request::ClearScreen),
        Command::Help => CommandResult::output(HELP_TEXT.lines().map(OutputLine::text).collect()),
        Command::Whoami => CommandResult::line(OutputLine::text(USER_NAME)),
        Command::Date => CommandResult::line(OutputLine::text((ctx.clock)())),
        Command::Hello => {
            CommandResult::output(HELLO_LINES.iter().copied().map(OutputLine::text).collect())
        }
        Command::Cheer => {
            let line = CHEER_LINES.choose(&mut *ctx.rng).copied().unwrap_or_default();
            CommandResult::line(OutputLine::success(line))
        }
        Command::Echo(text) => CommandResult::line(OutputLine::text(text)),
        Command::Reverse(text) => {
            CommandResult::line(OutputLine::text(text.chars().rev().collect::<String>()))
        }
        Command::Autocode => CommandResult::request(Request::StartAutocode),
        Command::Guess => CommandResult::request(Request::StartGuess),
        Command::Script => CommandResult::request(Request::StartScript),
        Command::Loading => CommandResult::request(Request::StartLoading),
        Command::ColorCycle => CommandResult::request(Request::ToggleColorCycle),
        Command::Exit => CommandResult::request(Request::Shutdown),
        Command::ScriptRun(name) => execute_script_run(name, ctx),
        Command::Ls(path) => execute_ls(&path, ctx),
        Command::Cd(path) => match ctx.fs.change_directory(ctx.cwd, &path) {
            Ok(new_path) => CommandResult::request(Request::ChangeDirectory(new_path)),
            Err(e) => fs_error(e),
        },
        Command::Mkdir(name) => match ctx.fs.make_folder(ctx.cwd, &name) {
            Ok(leaf) => CommandResult::line(OutputLine::success(format!(
                "Folder \"{}\" created",
                leaf
            ))),
            Err(e) => fs_error(e),
        },
        Command::Touch(name) => match ctx.fs.make_file(ctx.cwd, &name) {
            Ok(leaf) => {
                CommandResult::line(OutputLine::success(format!("File \"{}\" created", leaf)))
            }
            Err(e) => fs_error(e),
        },
        Command::Cat(name) => match ctx.fs.read_file(ctx.cwd, &name) {
            Ok("") => CommandResult::line(OutputLine::text("(empty)")),
            // one message, so the log caps the file as a whole before splitting rows
            Ok(content) => CommandResult::line(OutputLine::text(
                content.strip_suffix('\n').unwrap_or(content),
            )),
            Err(e) => fs_error(e),
        },
        Command::Rm(name) => match ctx.fs.remove(ctx.cwd, &name) {
            Ok(leaf) => CommandResult::line(OutputLine::success(format!("\"{}\" removed", leaf))),
            Err(e) => fs_error(e),
        },
        Command::Edit(name) => match ctx.fs.begin_edit(ctx.cwd, &name) {
            Ok(handle) => CommandResult::request(Request::StartEdit(handle)),
            Err(e) => fs_error(e),
        },
        Command::Unknown(line) => error(TerminalError::UnknownCommand(line)),
    }
}

fn error(e: TerminalError) -> CommandResult {
    CommandResult::line(OutputLine::error(e.to_string()))
}

fn fs_error(e: FsError) -> CommandResult {
    error(e.into())
}

/// Execute `ls` command.
fn execute_ls(path: &str, ctx: &ExecContext<'_>) -> CommandResult {
    match ctx.fs.list(ctx.cwd, path) {
        Ok(entries) if entries.is_empty() => CommandResult::line(OutputLine::text("(empty)")),
        Ok(entries) => CommandResult::output(
            entries
                .into_iter()
                .map(|entry| OutputLine::list_entry(entry.name, entry.kind))
                .collect(),
        ),
        Err(e) => fs_error(e),
    }
}

/// Execute `script run`: load the file, leave the replay to the session.
fn execute_script_run(name: String, ctx: &ExecContext<'_>) -> CommandResult {
    if name.is_empty() {
        return error(TerminalError::InvalidArgument("Specify script file".to_string()));
    }
    match ctx.fs.read_file(ctx.cwd, &name) {
        Ok(content) => CommandResult::request(Request::RunScript {
            content: content.to_string(),
            name,
        }),
        Err(_) => error(TerminalError::InvalidArgument(format!(
            "Script file '{}' not found or is a directory.",
            name
        ))),
    }
}
