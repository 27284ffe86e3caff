//! Self-contained demo programs driven by the session.
//!
//! Each demo is a small state machine with no knowledge of timers or the
//! DOM. Key presses or timer ticks are fed in by
//! [`TerminalSession`](crate::core::TerminalSession).

mod autocode;
mod colorcycle;
mod guess;
mod loading;
mod shutdown;

pub use autocode::{Autocode, AutocodeStep};
pub use colorcycle::ColorCycle;
pub use guess::{GuessGame, GuessOutcome};
pub use loading::LoadingBar;
pub use shutdown::Shutdown;
