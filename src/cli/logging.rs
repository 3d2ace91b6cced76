// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Console logging for the overlay tools.
//!
//! The macros format their arguments and hand them to [`emit`], which picks
//! the stream, the colored prefix and whether the line is shown at the
//! current verbosity.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use colored::{ColoredString, Colorize};

/// Global verbosity flag.
static VERBOSE: AtomicBool = AtomicBool::new(true);

/// Set the global verbosity flag.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

/// Check if verbose output is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Kind of console message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Plain output, always shown.
    Info,
    /// Problem that does not stop the run, on stderr.
    Warn,
    /// Failure, on stderr.
    Error,
    /// Completed step.
    Success,
    /// Detail shown only when verbose.
    Verbose,
    /// Header shown only when verbose.
    Section,
}

impl Level {
    /// Whether messages of this level go to stderr.
    #[must_use]
    pub const fn is_stderr(self) -> bool {
        matches!(self, Self::Warn | Self::Error)
    }

    /// Whether messages of this level are shown at the given verbosity.
    #[must_use]
    pub const fn is_shown(self, verbose: bool) -> bool {
        verbose || !matches!(self, Self::Verbose | Self::Section)
    }

    fn prefix(self) -> Option<ColoredString> {
        match self {
            Self::Warn => Some("WARNING ⚠️".yellow().bold()),
            Self::Error => Some("Error:".red().bold()),
            Self::Success => Some("✅".green()),
            Self::Info | Self::Verbose | Self::Section => None,
        }
    }

    /// Render a message line for this level, without the trailing newline.
    #[must_use]
    pub fn format(self, args: fmt::Arguments<'_>) -> String {
        match (self, self.prefix()) {
            (Self::Section, _) => format!("\n{}", args.to_string().cyan().bold()),
            (_, Some(prefix)) => format!("{prefix} {args}"),
            (_, None) => args.to_string(),
        }
    }
}

/// Print one message at `level`, honoring the verbosity flag.
pub fn emit(level: Level, args: fmt::Arguments<'_>) {
    if !level.is_shown(is_verbose()) {
        return;
    }
    let line = level.format(args);
    if level.is_stderr() {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

/// Macro for standard info messages.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::cli::logging::emit($crate::cli::logging::Level::Info, format_args!($($arg)*))
    };
}

/// Macro for warning messages.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::cli::logging::emit($crate::cli::logging::Level::Warn, format_args!($($arg)*))
    };
}

/// Macro for error messages.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::cli::logging::emit($crate::cli::logging::Level::Error, format_args!($($arg)*))
    };
}

/// Macro for success messages.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::cli::logging::emit($crate::cli::logging::Level::Success, format_args!($($arg)*))
    };
}

/// Macro for verbose messages.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        $crate::cli::logging::emit($crate::cli::logging::Level::Verbose, format_args!($($arg)*))
    };
}

/// Macro for section headers.
#[macro_export]
macro_rules! section {
    ($($arg:tt)*) => {
        $crate::cli::logging::emit($crate::cli::logging::Level::Section, format_args!($($arg)*))
    };
}
