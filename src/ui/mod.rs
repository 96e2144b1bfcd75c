//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Output formatting, verbosity, and diagnostics
//!
//! # Design
//!
//! All printing goes through this module so that `--quiet` and `--debug`
//! are honored consistently.

pub mod output;
