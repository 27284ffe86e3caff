//! ARM-23: a simulated terminal that runs in the browser.
//!
//! The [`core`] module holds the whole terminal (filesystem, commands,
//! modal controller, scripts, demos) and has no DOM dependency. The
//! [`app`] and [`components`] modules render it with Leptos.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::App;
pub use crate::core::{Effect, Mode, TerminalSession};
