//! Script storage and the restricted executor.
//!
//! A script is a plain file holding one command per line. Recording happens
//! in the controller; this module turns the recorded lines into a file and
//! replays a file through the non-interactive command subset.

use crate::core::commands::{Command, CommandResult, ExecContext, execute_command};
use crate::core::error::{FsError, TerminalError};
use crate::core::filesystem::VirtualFs;
use crate::models::{OutputLine, VirtualPath};

/// Save recorded lines as a new file in `cwd`.
///
/// The name must be a plain, non-empty file name that does not exist yet.
pub fn save_script(
    fs: &mut VirtualFs,
    cwd: &VirtualPath,
    name: &str,
    lines: &[String],
) -> Result<String, TerminalError> {
    let rejected = || {
        TerminalError::InvalidArgument(format!(
            "Invalid name or file '{}' already exists. Script discarded.",
            name
        ))
    };

    if name.is_empty() || name.contains('/') || name == "." || name == ".." || name == "..." {
        return Err(rejected());
    }
    match fs.create_file(cwd, name, lines.join("\n")) {
        Ok(saved) => Ok(saved),
        Err(FsError::AlreadyExists(_)) => Err(rejected()),
        Err(e) => Err(e.into()),
    }
}

/// Non-blank lines of a script, in order.
pub fn script_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split('\n').filter(|line| !line.trim().is_empty())
}

/// Run one script line through the restricted subset.
///
/// Anything outside the subset yields a single script-error line; the
/// caller moves on to the next line either way.
pub fn execute_script_line(line: &str, ctx: &mut ExecContext<'_>) -> CommandResult {
    let cmd = Command::parse(line);
    if cmd.is_script_safe() {
        execute_command(cmd, ctx)
    } else {
        let err = TerminalError::ScriptLineUnsupported(line.trim().to_string());
        CommandResult::line(OutputLine::error(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::Request;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_save_script_joins_lines() {
        let mut fs = VirtualFs::default_tree();
        let cwd = VirtualPath::root();
        let saved = save_script(&mut fs, &cwd, "s1", &lines(&["mkdir a", "touch a/x"])).unwrap();
        assert_eq!(saved, "s1");
        assert_eq!(fs.read_file(&cwd, "s1"), Ok("mkdir a\ntouch a/x"));
    }

    #[test]
    fn test_save_script_rejects_bad_names() {
        let mut fs = VirtualFs::default_tree();
        let cwd = VirtualPath::root();
        for name in ["", "readme.txt", "docs", "a/b", ".."] {
            let err = save_script(&mut fs, &cwd, name, &lines(&["echo"])).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!(
                    "Error: Invalid name or file '{}' already exists. Script discarded.",
                    name
                )
            );
        }
        assert_eq!(fs, VirtualFs::default_tree());
    }

    #[test]
    fn test_script_lines_drop_blanks() {
        let collected: Vec<_> = script_lines("echo a\n\n   \nls\n").collect();
        assert_eq!(collected, vec!["echo a", "ls"]);
    }

    #[test]
    fn test_restricted_executor() {
        let mut fs = VirtualFs::default_tree();
        let cwd = VirtualPath::root();
        let mut rng = StdRng::seed_from_u64(3);
        let mut ctx = ExecContext {
            fs: &mut fs,
            cwd: &cwd,
            rng: &mut rng,
            clock: || String::from("now"),
        };

        let ok = execute_script_line("mkdir a", &mut ctx);
        assert_eq!(ok.output[0].plain_text(), "Folder \"a\" created");

        let clear = execute_script_line("clear", &mut ctx);
        assert_eq!(clear.request, Some(Request::ClearScreen));

        for line in ["cd a", "edit readme.txt", "guess", "script run x", "colorcycle"] {
            let refused = execute_script_line(line, &mut ctx);
            assert_eq!(
                refused.output[0].plain_text(),
                format!("[SCRIPT ERROR] Unknown/Non-Executable Command: {}", line)
            );
            assert!(refused.request.is_none());
        }
    }
}
