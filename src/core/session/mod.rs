//! Terminal session state.
//!
//! [`TerminalSession`] owns everything a running terminal needs: the
//! filesystem, the working directory, the input buffer, the output log and
//! the active [`Mode`]. Key presses go through [`TerminalSession::handle_key`]
//! (see `controller.rs`); timer callbacks from the browser layer go through
//! the `tick_*` methods below.

mod controller;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::config::{
    APP_NAME, BASE_COLOR, MAX_LINE_CHARS, MAX_TERMINAL_HISTORY, PROMPT_SEPARATOR,
};
use crate::core::demos::{Autocode, ColorCycle, GuessGame, LoadingBar, Shutdown};
use crate::core::filesystem::{EditHandle, VirtualFs};
use crate::models::{OutputLine, OutputLog, VirtualPath};
use crate::utils::clock;

/// Which sub-program currently owns the keyboard.
///
/// Exactly one mode is active at a time. Color cycling is not a mode: it
/// runs beside whatever mode is active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    /// Appending lines to a file
    Editing(EditHandle),
    /// Recording script lines until a lone `.`
    ScriptCollecting(Vec<String>),
    /// Waiting for the recorded script's file name
    ScriptNaming(Vec<String>),
    Guessing(GuessGame),
    Autocoding(Autocode),
}

impl Mode {
    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Human-readable name used in conflict messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Editing(_) => "Edit",
            Self::ScriptCollecting(_) | Self::ScriptNaming(_) => "Script",
            Self::Guessing(_) => "Guessing Game",
            Self::Autocoding(_) => "Autocode",
        }
    }

    /// Command word that enters this mode.
    pub fn command_name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Editing(_) => "edit",
            Self::ScriptCollecting(_) | Self::ScriptNaming(_) => "script",
            Self::Guessing(_) => "guess",
            Self::Autocoding(_) => "autocode",
        }
    }
}

/// Timer work the browser layer must arm or drop after a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// (Re)arm the loading interval and its safety timeout
    StartLoading,
    StartColorCycle,
    StopColorCycle,
    /// Arm the shutdown step interval; the first line is already printed
    StartShutdown,
}

/// Result of one loading bar tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingTick {
    Running,
    /// No bar is running any more; drop the interval and the timeout
    Finished,
}

/// One terminal session.
#[derive(Clone, Debug)]
pub struct TerminalSession {
    fs: VirtualFs,
    cwd: VirtualPath,
    input: String,
    mode: Mode,
    output: OutputLog,
    color: Option<ColorCycle>,
    loading: Option<LoadingBar>,
    shutdown: Option<Shutdown>,
    /// Set once the shutdown sequence completes; all keys are ignored after
    halted: bool,
    rng: StdRng,
    clock: fn() -> String,
}

impl TerminalSession {
    /// Session over the seeded filesystem with an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Session with a deterministic RNG.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            fs: VirtualFs::seeded(),
            cwd: VirtualPath::root(),
            input: String::new(),
            mode: Mode::Normal,
            output: OutputLog::new(MAX_TERMINAL_HISTORY, MAX_LINE_CHARS),
            color: None,
            loading: None,
            shutdown: None,
            halted: false,
            rng,
            clock: clock::now_string,
        }
    }

    /// Replace the source of `date` output.
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the filesystem.
    pub fn with_fs(mut self, fs: VirtualFs) -> Self {
        self.fs = fs;
        self
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn cwd(&self) -> &VirtualPath {
        &self.cwd
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn output(&self) -> &OutputLog {
        &self.output
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn is_color_cycling(&self) -> bool {
        self.color.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    /// Prompt shown before the input buffer, e.g. `/docs > `.
    pub fn prompt(&self) -> String {
        format!("{}{}", self.cwd, PROMPT_SEPARATOR)
    }

    /// CSS color of the terminal text.
    pub fn text_color(&self) -> String {
        self.color
            .as_ref()
            .map(ColorCycle::css_color)
            .unwrap_or_else(|| BASE_COLOR.to_string())
    }

    /// Print the welcome banner.
    pub fn greet(&mut self) {
        self.output.push(OutputLine::info(format!(
            "{} virtual terminal. Type 'help' to see available commands.",
            APP_NAME
        )));
    }

    // =========================================================================
    // Timer callbacks
    // =========================================================================

    /// Advance the loading bar by one frame.
    pub fn tick_loading(&mut self) -> LoadingTick {
        let Some(bar) = self.loading.as_mut() else {
            return LoadingTick::Finished;
        };
        match bar.tick() {
            Some(frame) => {
                self.output
                    .push(OutputLine::text(format!("Loading... {}", frame)));
                LoadingTick::Running
            }
            None => {
                self.loading = None;
                self.output.push(OutputLine::success("Load complete."));
                info!("loading finished");
                LoadingTick::Finished
            }
        }
    }

    /// Safety timeout of the loading bar. Only a bar still running is stopped.
    pub fn loading_timed_out(&mut self) {
        if self.loading.take().is_some() {
            warn!("loading exceeded its runtime budget");
            self.output.push(OutputLine::error(
                "ERROR: Load exceeded maximum runtime and was forcibly stopped.",
            ));
        }
    }

    /// Advance the color cycle. Returns `false` once it has been stopped.
    pub fn tick_color(&mut self) -> bool {
        match self.color.as_mut() {
            Some(cycle) => {
                cycle.tick();
                true
            }
            None => false,
        }
    }

    /// Print the next shutdown line, or halt once they are exhausted.
    ///
    /// Returns `false` when the step timer should be dropped.
    pub fn shutdown_step(&mut self) -> bool {
        let Some(sequence) = self.shutdown.as_mut() else {
            return false;
        };
        match sequence.step() {
            Some(line) => {
                self.output.push(OutputLine::text(line));
                true
            }
            None => {
                self.shutdown = None;
                self.halted = true;
                self.loading = None;
                self.color = None;
                self.input.clear();
                info!("terminal halted");
                false
            }
        }
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}
