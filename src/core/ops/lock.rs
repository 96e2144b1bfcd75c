//! core::ops::lock
//!
//! Exclusive per-job lock for metadata saves.
//!
//! # Architecture
//!
//! Saves to one job are serialized: only one process may replace a job's
//! metadata property at a time. Readers never take the lock, since the
//! property file is swapped by atomic rename and is never observed half
//! written.
//!
//! # Storage
//!
//! - `<root>/<job>/.lock` - Lock file with OS-level exclusive lock
//!
//! # Invariants
//!
//! - Lock is held for the whole compare-and-write of a save
//! - Lock is automatically released on drop (RAII pattern)
//! - Lock acquisition is non-blocking (fails fast if locked)

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;

use crate::core::paths::JobPaths;
use crate::core::types::JobName;

/// Errors from locking operations.
#[derive(Debug, Error)]
pub enum LockError {
    /// Another process already holds the lock.
    #[error("job '{0}' is locked by another save")]
    AlreadyLocked(String),

    /// Failed to create lock file or directory.
    #[error("failed to create lock: {0}")]
    CreateFailed(String),

    /// Failed to acquire the OS lock.
    #[error("failed to acquire lock: {0}")]
    AcquireFailed(String),

    /// Failed to release the lock.
    #[error("failed to release lock: {0}")]
    ReleaseFailed(String),
}

/// An exclusive lock on one job's metadata.
///
/// # Example
///
/// ```no_run
/// use jobmeta::core::ops::lock::JobLock;
/// use jobmeta::core::paths::JobPaths;
/// use jobmeta::core::types::JobName;
/// use std::path::PathBuf;
///
/// let paths = JobPaths::new(PathBuf::from("/srv/jobs"));
/// let job = JobName::new("nightly").unwrap();
/// let lock = JobLock::acquire(&paths, &job).unwrap();
/// assert!(lock.is_held());
/// // released when `lock` goes out of scope
/// ```
#[derive(Debug)]
pub struct JobLock {
    path: PathBuf,
    /// When this is Some, we hold the lock.
    file: Option<File>,
}

impl JobLock {
    /// Attempt to acquire the lock for `job`.
    ///
    /// Creates the job directory if needed.
    ///
    /// # Errors
    ///
    /// - [`LockError::AlreadyLocked`] if another process holds the lock
    /// - [`LockError::CreateFailed`] if the lock file cannot be created
    /// - [`LockError::AcquireFailed`] if the OS lock cannot be acquired
    pub fn acquire(paths: &JobPaths, job: &JobName) -> Result<Self, LockError> {
        let job_dir = paths.job_dir(job);
        fs::create_dir_all(&job_dir).map_err(|e| {
            LockError::CreateFailed(format!("cannot create {}: {}", job_dir.display(), e))
        })?;

        let path = paths.lock_path(job);

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| {
                LockError::CreateFailed(format!("cannot open {}: {}", path.display(), e))
            })?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(Self {
                path,
                file: Some(file),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                Err(LockError::AlreadyLocked(job.to_string()))
            }
            Err(e) => Err(LockError::AcquireFailed(e.to_string())),
        }
    }

    /// Check if the lock is currently held.
    pub fn is_held(&self) -> bool {
        self.file.is_some()
    }

    /// Get the path to the lock file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Release the lock before the guard goes out of scope.
    pub fn release(&mut self) -> Result<(), LockError> {
        if let Some(file) = self.file.take() {
            file.unlock()
                .map_err(|e| LockError::ReleaseFailed(e.to_string()))?;
        }
        Ok(())
    }
}

impl Drop for JobLock {
    fn drop(&mut self) {
        // Best-effort release on drop
        if let Some(file) = self.file.take() {
            let _ = file.unlock();
        }
    }
}
