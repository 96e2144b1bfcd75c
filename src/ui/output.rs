//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Results go to stdout and respect the quiet flag. Diagnostics go to
//! stderr: `[debug]` lines only with `--debug`, warnings unless quiet,
//! errors always.

use std::fmt::Display;

use crate::core::metadata::MetadataCollection;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format metadata as aligned `key  value` rows, one entry per line.
///
/// Absent values print as `(absent)`, empty values as `""`, so the two stay
/// distinguishable on screen.
pub fn format_entries(metadata: &MetadataCollection) -> String {
    let width = metadata
        .iter()
        .map(|entry| entry.key().chars().count())
        .max()
        .unwrap_or(0);

    metadata
        .iter()
        .map(|entry| {
            let value = match entry.value() {
                None => "(absent)".to_string(),
                Some("") => "\"\"".to_string(),
                Some(v) => v.to_string(),
            };
            format!("{:<width$}  {}", entry.key(), value, width = width)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
