//! Core business logic for the terminal application.
//!
//! This module provides:
//! - [`TerminalSession`] and its modal key controller
//! - [`Command`] parsing and execution
//! - [`VirtualFs`] virtual filesystem management
//! - the script recorder/runner and the timer-driven demos
//!
//! Nothing in here touches the DOM, so all of it runs in host tests.

pub mod commands;
pub mod demos;
pub mod error;
pub mod filesystem;
pub mod script;
mod session;

pub use commands::Command;
pub use error::{FsError, TerminalError};
pub use filesystem::{EditHandle, VirtualFs};
pub use session::{Effect, LoadingTick, Mode, TerminalSession};
