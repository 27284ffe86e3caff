//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Help text for `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Initial filesystem contents (TOML, see [`crate::models::SeedManifest`]).
pub const SEED_MANIFEST: &str = include_str!("../assets/seed.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in terminal.
pub const APP_NAME: &str = "ARM-23";

/// Output of `whoami`.
pub const USER_NAME: &str = "ARM-23 user";

/// Default tracing filter directives.
pub const LOG_FILTER: &str = "arm23_term=debug,info";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of characters held in the input buffer.
pub const MAX_INPUT_LENGTH: usize = 800;

/// Maximum characters kept from one appended output message.
pub const MAX_LINE_CHARS: usize = 2000;

/// Maximum number of terminal output lines to keep in history.
pub const MAX_TERMINAL_HISTORY: usize = 1000;

/// Separator between the working directory and the input buffer.
pub const PROMPT_SEPARATOR: &str = " > ";

/// Prefill placed in the input buffer when a recorded script needs a name.
pub const SCRIPT_NAME_PROMPT: &str = "Name the script file: ";

/// Line that ends script recording and edit sessions.
pub const TERMINATOR_LINE: &str = ".";

// =============================================================================
// Guessing Game
// =============================================================================

pub mod guess {
    /// Smallest accepted guess.
    pub const MIN: u32 = 1;
    /// Largest accepted guess.
    pub const MAX: u32 = 100;
}

// =============================================================================
// Timer-driven Demos
// =============================================================================

/// Timer periods and animation constants (milliseconds).
pub mod timing {
    /// Delay between loading bar frames.
    pub const LOADING_FRAME_MS: u32 = 300;
    /// Wall-clock budget after which the loading bar is force-stopped.
    pub const LOADING_SAFETY_MS: u32 = 5000;
    /// Color cycle repaint period.
    pub const COLOR_TICK_MS: u32 = 100;
    /// Hue advance per color tick, in degrees.
    pub const HUE_STEP: u16 = 5;
    /// Delay between shutdown messages.
    pub const SHUTDOWN_STEP_MS: u32 = 500;
}

/// Terminal text color when no color cycle is running.
pub const BASE_COLOR: &str = "#0f0";

/// Frames printed by `loading`.
pub const LOADING_FRAMES: &[&str] = &[
    "[=           ]",
    "[==          ]",
    "[====        ]",
    "[======      ]",
    "[========    ]",
    "[==========  ]",
    "[============]",
    "[==============]",
    "[================]",
];

/// Lines printed by `exit`, one per shutdown step.
pub const SHUTDOWN_LINES: &[&str] = &[
    "Shutting down terminal...",
    "Saving session...",
    "Closing connections...",
    "Goodbye!",
];

/// Program "typed" by `autocode`, one character per key press.
pub const AUTOCODE_PROGRAM: &str = "MOV AX, BX
ADD AX, 1
CMP AX, 10
JMP START
LOAD R1, 0xFF
CALL Subroutine
PRINT \"HELLO WORLD\"
NOP
END
";

// =============================================================================
// Canned Output
// =============================================================================

/// Output of `hello`.
pub const HELLO_LINES: &[&str] = &[
    "--- Hello World Examples ---",
    "BASIC: PRINT \"HELLO WORLD\"",
    "FORTRAN: PRINT *, \"HELLO WORLD\"",
    "C: printf(\"Hello World!\\n\");",
    "C++: std::cout << \"Hello World!\" << std::endl;",
    "Python: print(\"Hello World!\")",
    "Java: System.out.println(\"Hello World!\");",
    "Visual Basic: MsgBox \"Hello World!\"",
];

/// Hidden command that prints one of [`CHEER_LINES`].
pub const CHEER_COMMAND: &str = "sad";

pub const CHEER_LINES: &[&str] = &[
    "Remember: You are capable, strong, and valued.",
    "Sending a digital hug (\\_/) from the terminal.",
    "The system loves you. Keep going.",
    "STATUS: All systems GO! for happiness.",
    "You are the most interesting and most special person in universe.",
];
