//! jobmeta - Ordered key/value metadata for CI jobs
//!
//! A job configuration can carry an ordered list of user-defined key/value
//! pairs. jobmeta models that list, binds it from submitted form data,
//! persists it next to the job, and looks values up by key.
//!
//! # Architecture
//!
//! - [`core`] - Metadata types, form binding, persistence, configuration
//! - [`cli`] - Command-line interface layer (parses args, calls the store)
//! - [`ui`] - Output formatting and diagnostics
//!
//! # Invariants
//!
//! 1. Entries are immutable values; a collection is replaced, never edited
//! 2. Lookup returns the earliest entry with a matching key
//! 3. Entry order, duplicates, and absent-vs-empty values survive persistence
//! 4. Saves to one job are serialized and swap the stored file atomically

pub mod cli;
pub mod core;
pub mod ui;
