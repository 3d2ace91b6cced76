// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for rendering skeleton overlays.
//!
//! This module contains the command-line interface logic, including argument parsing,
//! console logging and the `render` and `dump` command implementations.

// Modules
/// CLI arguments.
pub mod args;

/// Console logging macros and verbosity.
pub mod logging;

/// Render and dump commands.
#[cfg(feature = "annotate")]
pub mod render;
