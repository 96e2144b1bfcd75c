//! core
//!
//! Core domain types, schemas, and operations for jobmeta.
//!
//! # Modules
//!
//! - [`metadata`] - Metadata entries, collections, persisted document, store
//! - [`form`] - Binding of submitted form data to metadata
//! - [`types`] - Strong types: JobName, UtcTimestamp, Fingerprint
//! - [`config`] - Configuration schema and loading
//! - [`ops`] - Per-job save locking
//! - [`paths`] - Centralized path routing for job storage
//!
//! # Design Principles
//!
//! - Metadata values are immutable; updates produce new collections
//! - Schemas are strict and self-describing
//! - Lookup reports a missing key as `None`, never as an error

pub mod config;
pub mod form;
pub mod metadata;
pub mod ops;
pub mod paths;
pub mod types;
