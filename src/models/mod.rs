//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`VfsNode`], [`DirEntry`], [`EntryKind`], [`SeedManifest`] - Virtual filesystem representation
//! - [`VirtualPath`] - Normalized absolute paths
//! - [`OutputLine`], [`OutputLog`] - Terminal output and scrollback
//! - [`Key`] - Keyboard input

mod filesystem;
mod path;
mod terminal;

pub use filesystem::{DirEntry, EntryKind, SeedEntry, SeedManifest, VfsNode};
pub use path::VirtualPath;
pub use terminal::{Key, OutputLine, OutputLineData, OutputLog};
