//! UI components built with Leptos.
//!
//! - [`terminal`] - Terminal view, output rows and demo timers

pub mod terminal;

pub use terminal::Terminal;
