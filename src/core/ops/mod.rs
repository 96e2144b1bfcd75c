//! core::ops
//!
//! Locking for mutating operations.
//!
//! # Modules
//!
//! - [`lock`] - Exclusive per-job save lock
//!
//! # Architecture
//!
//! Every save or removal of a job's metadata:
//! 1. Acquires the job's exclusive lock
//! 2. Stages the new property next to the old one
//! 3. Swaps it in with an atomic rename
//! 4. Releases the lock on drop

pub mod lock;

pub use lock::{JobLock, LockError};
