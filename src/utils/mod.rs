//! Browser-facing helpers.
//!
//! Provides:
//! - [`clock::now_string`] - Date text for `date`
//! - [`logging::init`] - Tracing subscriber writing to the browser console

pub mod clock;
pub mod logging;
