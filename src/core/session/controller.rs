//! Modal input controller.
//!
//! One key at a time, checked in order:
//! 1. Escape cancels the active sub-program (autocode, color cycle, edit,
//!    script recording, guessing). Script naming cannot be cancelled.
//! 2. While autocoding, every other key advances the program.
//! 3. Otherwise Enter submits the buffer to the active mode's handler,
//!    Backspace deletes, printable characters are inserted.
//!
//! Only this module assigns `mode`, and every entry into a modal mode goes
//! through [`TerminalSession::enter_mode`].

use std::mem;

use tracing::{debug, info, warn};

use super::{Effect, Mode, TerminalSession};
use crate::config::{MAX_INPUT_LENGTH, SCRIPT_NAME_PROMPT, TERMINATOR_LINE};
use crate::core::commands::{
    Command, CommandResult, ExecContext, Request, execute_command,
};
use crate::core::demos::{Autocode, AutocodeStep, ColorCycle, GuessGame, LoadingBar, Shutdown};
use crate::core::error::TerminalError;
use crate::core::script::{execute_script_line, save_script, script_lines};
use crate::models::{Key, OutputLine};

impl TerminalSession {
    /// Feed one key press.
    pub fn handle_key(&mut self, key: Key) -> Option<Effect> {
        if self.halted {
            return None;
        }
        if key == Key::Escape {
            return self.escape();
        }
        if matches!(self.mode, Mode::Autocoding(_)) {
            self.advance_autocode();
            return None;
        }

        match key {
            Key::Enter => self.submit(),
            Key::Backspace => {
                self.input.pop();
                None
            }
            Key::Char(c) => {
                self.insert_char(c);
                None
            }
            Key::Escape | Key::Other => None,
        }
    }

    /// Run one Normal-mode command line.
    ///
    /// Commands that open a modal session are refused while any mode other
    /// than Normal is active.
    pub fn run_command(&mut self, line: &str) -> Option<Effect> {
        let cmd = Command::parse(line);
        if let Some(requested) = cmd.modal_name() {
            if let Err(e) = self.check_modal(requested) {
                warn!(requested, active = self.mode.label(), "modal entry refused");
                self.output.push(OutputLine::error(e.to_string()));
                return None;
            }
        }

        debug!(?cmd, "dispatch");
        let result = self.execute(cmd);
        self.output.extend(result.output);
        result.request.and_then(|request| self.apply_request(request))
    }

    fn execute(&mut self, cmd: Command) -> CommandResult {
        let mut ctx = ExecContext {
            fs: &mut self.fs,
            cwd: &self.cwd,
            rng: &mut self.rng,
            clock: self.clock,
        };
        execute_command(cmd, &mut ctx)
    }

    pub(super) fn apply_request(&mut self, request: Request) -> Option<Effect> {
        match request {
            Request::ClearScreen => self.output.clear(),
            Request::ChangeDirectory(path) => {
                debug!(%path, "cwd changed");
                self.cwd = path;
            }
            Request::StartAutocode => self.start_mode(
                Mode::Autocoding(Autocode::new()),
                vec![OutputLine::info(
                    "Autocode mode started. Press Escape to exit.",
                )],
            ),
            Request::StartGuess => {
                let game = GuessGame::random(&mut self.rng);
                self.start_mode(Mode::Guessing(game), GuessGame::intro());
            }
            Request::StartScript => self.start_mode(
                Mode::ScriptCollecting(Vec::new()),
                vec![OutputLine::info(
                    "Script mode enabled. Write '.' on a new line to finish and save.",
                )],
            ),
            Request::StartEdit(handle) => {
                let intro = OutputLine::info(format!(
                    "Editing \"{}\". Type a single \".\" on a line to finish.",
                    handle.name
                ));
                self.start_mode(Mode::Editing(handle), vec![intro]);
            }
            Request::RunScript { name, content } => self.run_script(&name, &content),
            Request::StartLoading => {
                info!(restart = self.loading.is_some(), "loading started");
                self.loading = Some(LoadingBar::new());
                return Some(Effect::StartLoading);
            }
            Request::ToggleColorCycle => return Some(self.toggle_color()),
            Request::Shutdown => {
                if self.shutdown.is_some() {
                    return None;
                }
                info!("shutdown started");
                self.shutdown = Some(Shutdown::new());
                self.shutdown_step();
                return Some(Effect::StartShutdown);
            }
        }
        None
    }

    // =========================================================================
    // Mode transitions
    // =========================================================================

    fn check_modal(&self, requested: &'static str) -> Result<(), TerminalError> {
        if self.mode.is_normal() {
            Ok(())
        } else {
            Err(TerminalError::ModalConflict {
                requested,
                active: self.mode.label(),
            })
        }
    }

    fn enter_mode(&mut self, next: Mode) -> Result<(), TerminalError> {
        self.check_modal(next.command_name())?;
        debug!(mode = next.label(), "mode entered");
        self.mode = next;
        self.input.clear();
        Ok(())
    }

    /// Return to Normal, handing back the mode that was active.
    fn leave_mode(&mut self) -> Mode {
        let previous = mem::take(&mut self.mode);
        debug!(mode = previous.label(), "mode left");
        self.input.clear();
        previous
    }

    fn start_mode(&mut self, next: Mode, intro: Vec<OutputLine>) {
        match self.enter_mode(next) {
            Ok(()) => self.output.extend(intro),
            Err(e) => self.output.push(OutputLine::error(e.to_string())),
        }
    }

    fn toggle_color(&mut self) -> Effect {
        if self.color.take().is_some() {
            info!("color cycle stopped");
            self.output.push(OutputLine::info("Color cycling stopped."));
            Effect::StopColorCycle
        } else {
            info!("color cycle started");
            self.color = Some(ColorCycle::new());
            self.output.push(OutputLine::info(
                "Colorcycle started (RGB). Press ESC to stop.",
            ));
            Effect::StartColorCycle
        }
    }

    fn escape(&mut self) -> Option<Effect> {
        if matches!(self.mode, Mode::Autocoding(_)) {
            self.leave_mode();
            self.output.push(OutputLine::info("Autocode cancelled"));
            return None;
        }
        if self.color.take().is_some() {
            self.input.clear();
            self.output.push(OutputLine::info("Colorcycle cancelled"));
            return Some(Effect::StopColorCycle);
        }

        let message = match &self.mode {
            Mode::Editing(_) => OutputLine::info("Edit mode cancelled"),
            Mode::ScriptCollecting(_) => OutputLine::info("Script creation cancelled."),
            Mode::Guessing(game) => game.cancelled_message(),
            Mode::Normal | Mode::ScriptNaming(_) | Mode::Autocoding(_) => return None,
        };
        self.leave_mode();
        self.output.push(message);
        None
    }

    // =========================================================================
    // Input buffer
    // =========================================================================

    fn insert_char(&mut self, c: char) {
        if c.is_control() || self.input.chars().count() >= MAX_INPUT_LENGTH {
            return;
        }
        self.input.push(c);
    }

    fn submit(&mut self) -> Option<Effect> {
        let line = mem::take(&mut self.input);
        match self.mode {
            Mode::Normal => return self.run_command(&line),
            Mode::ScriptCollecting(_) => self.collect_script_line(&line),
            Mode::ScriptNaming(_) => self.name_script(&line),
            Mode::Editing(_) => self.edit_line(&line),
            Mode::Guessing(_) => self.guess_line(&line),
            Mode::Autocoding(_) => {}
        }
        None
    }

    // =========================================================================
    // Mode handlers
    // =========================================================================

    fn advance_autocode(&mut self) {
        let Mode::Autocoding(player) = &mut self.mode else {
            return;
        };
        match player.advance() {
            AutocodeStep::Typed(c) => self.input.push(c),
            AutocodeStep::LineDone => {
                let typed = mem::take(&mut self.input);
                let prompt = self.prompt();
                self.output.push(OutputLine::command(prompt, typed));
            }
            AutocodeStep::Finished => {
                self.leave_mode();
                self.output.push(OutputLine::info("<< End of code >>"));
            }
        }
    }

    fn collect_script_line(&mut self, line: &str) {
        let Mode::ScriptCollecting(lines) = &mut self.mode else {
            return;
        };
        let trimmed = line.trim();
        if trimmed == TERMINATOR_LINE {
            let recorded = mem::take(lines);
            debug!(lines = recorded.len(), "script recorded");
            self.mode = Mode::ScriptNaming(recorded);
            self.input = SCRIPT_NAME_PROMPT.to_string();
            return;
        }
        lines.push(trimmed.to_string());
        self.output.push(OutputLine::text(line));
    }

    fn name_script(&mut self, line: &str) {
        let name = line.strip_prefix(SCRIPT_NAME_PROMPT).unwrap_or(line).trim();
        let Mode::ScriptNaming(lines) = self.leave_mode() else {
            return;
        };
        match save_script(&mut self.fs, &self.cwd, name, &lines) {
            Ok(saved) => {
                info!(script = %saved, "script saved");
                self.output.push(OutputLine::success(format!(
                    "Script '{}' saved successfully.",
                    saved
                )));
            }
            Err(e) => {
                warn!(script = name, "script discarded");
                self.output.push(OutputLine::error(e.to_string()));
            }
        }
    }

    fn edit_line(&mut self, line: &str) {
        if line.trim() == TERMINATOR_LINE {
            if let Mode::Editing(handle) = self.leave_mode() {
                self.output.push(OutputLine::text(format!(
                    "Finished editing \"{}\".",
                    handle.name
                )));
            }
            return;
        }

        let Mode::Editing(handle) = &self.mode else {
            return;
        };
        match self.fs.append_line(handle, line) {
            Ok(()) => self.output.push(OutputLine::text(line)),
            Err(e) => {
                self.output
                    .push(OutputLine::error(TerminalError::from(e).to_string()));
                self.leave_mode();
            }
        }
    }

    fn guess_line(&mut self, line: &str) {
        let Mode::Guessing(game) = &mut self.mode else {
            return;
        };
        let outcome = game.guess(line.trim());
        let message = game.message(outcome);
        self.output.push(message);
        if outcome.ends_game() {
            debug!(?outcome, "guessing game over");
            self.leave_mode();
        }
    }

    fn run_script(&mut self, name: &str, content: &str) {
        info!(script = name, "running script");
        self.output
            .push(OutputLine::info(format!("--- RUNNING SCRIPT: {} ---", name)));

        for line in script_lines(content) {
            self.output.push(OutputLine::text(format!(">> {}", line)));
            let result = {
                let mut ctx = ExecContext {
                    fs: &mut self.fs,
                    cwd: &self.cwd,
                    rng: &mut self.rng,
                    clock: self.clock,
                };
                execute_script_line(line, &mut ctx)
            };
            self.output.extend(result.output);
            if let Some(Request::ClearScreen) = result.request {
                self.output.clear();
            }
        }

        self.output
            .push(OutputLine::info(format!("--- SCRIPT FINISHED: {} ---", name)));
    }
}
