//! core::metadata::store
//!
//! File-backed storage of job metadata properties.
//!
//! # Architecture
//!
//! Each job's property lives at `<root>/<job>/metadata.json` (see
//! [`JobPaths`]). A save replaces the whole property: the new document is
//! staged next to the old one, synced, then renamed over it. Readers either
//! see the previous document or the new one, never a partial write.
//!
//! Saves and removals for one job are serialized by a [`JobLock`]. Reads are
//! lock-free.
//!
//! # Example
//!
//! ```no_run
//! use jobmeta::core::metadata::{JobStore, MetadataCollection};
//! use jobmeta::core::types::JobName;
//! use std::path::PathBuf;
//!
//! let store = JobStore::open(PathBuf::from("/srv/jobs"));
//! let job = JobName::new("nightly").unwrap();
//!
//! store.save(&job, MetadataCollection::from_pairs([("env", "prod")])).unwrap();
//! let env = store.find(&job, "env").unwrap();
//! assert_eq!(env.and_then(|e| e.value().map(str::to_string)), Some("prod".to_string()));
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::collection::MetadataCollection;
use super::entry::MetadataEntry;
use super::schema::{parse_document, DocumentError, JobPropertyDocument};
use crate::core::ops::lock::{JobLock, LockError};
use crate::core::paths::JobPaths;
use crate::core::types::JobName;

/// Errors from job store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read a stored property.
    #[error("failed to read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write or remove a stored property.
    #[error("failed to write '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The stored property belongs to a different job.
    #[error("'{path}' holds metadata for job '{found}'")]
    JobMismatch { path: PathBuf, found: String },

    /// Stored document is invalid.
    #[error("invalid job property: {0}")]
    Document(#[from] DocumentError),

    /// Another save holds the job lock, or locking failed.
    #[error(transparent)]
    Lock(#[from] LockError),
}

/// Result of [`JobStore::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new property document was written.
    Written,
    /// The stored metadata already matched; nothing was written.
    Unchanged,
}

/// Metadata properties of all jobs under one root.
#[derive(Debug, Clone)]
pub struct JobStore {
    paths: JobPaths,
}

impl JobStore {
    /// Open the store rooted at `root`. The directory is created lazily on
    /// the first save.
    pub fn open(root: PathBuf) -> Self {
        Self {
            paths: JobPaths::new(root),
        }
    }

    /// The jobs root.
    pub fn root(&self) -> &Path {
        self.paths.root()
    }

    /// Path routing for this store.
    pub fn paths(&self) -> &JobPaths {
        &self.paths
    }

    /// Load the metadata property of `job`.
    ///
    /// Returns `Ok(None)` when the job has no metadata property.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ReadError`] if the file exists but cannot be read
    /// - [`StoreError::Document`] if the document fails strict parsing
    /// - [`StoreError::JobMismatch`] if the document names another job
    pub fn load(&self, job: &JobName) -> Result<Option<JobPropertyDocument>, StoreError> {
        let path = self.paths.property_path(job);

        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::ReadError { path, source: e }),
        };

        let doc = parse_document(&json)?;
        if &doc.job != job {
            return Err(StoreError::JobMismatch {
                path,
                found: doc.job.to_string(),
            });
        }

        Ok(Some(doc))
    }

    /// Load just the collection of `job`, if it has one.
    pub fn metadata(&self, job: &JobName) -> Result<Option<MetadataCollection>, StoreError> {
        Ok(self.load(job)?.map(|doc| doc.metadata))
    }

    /// First entry of `job` keyed `key`.
    ///
    /// Returns `Ok(None)` when the job has no metadata or no entry matches.
    pub fn find(&self, job: &JobName, key: &str) -> Result<Option<MetadataEntry>, StoreError> {
        Ok(self
            .metadata(job)?
            .and_then(|metadata| metadata.find(key).cloned()))
    }

    /// Replace the metadata property of `job` with `metadata`.
    ///
    /// Skips the write when the stored collection is identical. A stored
    /// document that cannot be read is simply replaced.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Lock`] if another save holds the job lock
    /// - [`StoreError::WriteError`] if staging or renaming fails
    pub fn save(
        &self,
        job: &JobName,
        metadata: MetadataCollection,
    ) -> Result<SaveOutcome, StoreError> {
        let _lock = JobLock::acquire(&self.paths, job)?;

        if let Ok(Some(current)) = self.load(job) {
            if current.metadata.fingerprint() == metadata.fingerprint() {
                return Ok(SaveOutcome::Unchanged);
            }
        }

        let doc = JobPropertyDocument::new(job.clone(), metadata);
        self.write_atomic(job, &doc)?;

        Ok(SaveOutcome::Written)
    }

    /// Remove the metadata property of `job`.
    ///
    /// Returns `true` if a property was removed, `false` if there was none.
    pub fn remove(&self, job: &JobName) -> Result<bool, StoreError> {
        if !self.paths.job_dir(job).exists() {
            return Ok(false);
        }

        let _lock = JobLock::acquire(&self.paths, job)?;
        let path = self.paths.property_path(job);

        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::WriteError { path, source: e }),
        }
    }

    /// Names of all jobs that carry a metadata property, sorted.
    ///
    /// Directories whose names are not valid job names are skipped.
    pub fn list_jobs(&self) -> Result<Vec<JobName>, StoreError> {
        let root = self.paths.root();
        let read_dir = match fs::read_dir(root) {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::ReadError {
                    path: root.to_path_buf(),
                    source: e,
                })
            }
        };

        let mut jobs = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry.map_err(|e| StoreError::ReadError {
                path: root.to_path_buf(),
                source: e,
            })?;

            let Some(name) = dir_entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            let Ok(job) = JobName::new(name) else {
                continue;
            };
            if self.paths.property_path(&job).is_file() {
                jobs.push(job);
            }
        }

        jobs.sort();
        Ok(jobs)
    }

    /// Stage, sync, and rename `doc` into place.
    fn write_atomic(&self, job: &JobName, doc: &JobPropertyDocument) -> Result<(), StoreError> {
        let path = self.paths.property_path(job);
        let staging = self.paths.staging_path(job);
        let contents = doc.to_pretty_json()?;

        let mut file = fs::File::create(&staging).map_err(|e| StoreError::WriteError {
            path: staging.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| StoreError::WriteError {
                path: staging.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| StoreError::WriteError {
            path: staging.clone(),
            source: e,
        })?;

        fs::rename(&staging, &path).map_err(|e| StoreError::WriteError { path, source: e })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // Full round trips are in tests/persistence_integration.rs

    fn setup() -> (TempDir, JobStore, JobName) {
        let temp = TempDir::new().expect("create temp dir");
        let store = JobStore::open(temp.path().to_path_buf());
        let job = JobName::new("nightly").unwrap();
        (temp, store, job)
    }

    #[test]
    fn load_missing_job() {
        let (_temp, store, job) = setup();
        assert!(store.load(&job).unwrap().is_none());
        assert!(store.find(&job, "env").unwrap().is_none());
    }

    #[test]
    fn save_is_skipped_when_unchanged() {
        let (_temp, store, job) = setup();
        let metadata = MetadataCollection::from_pairs([("env", "prod")]);

        assert_eq!(store.save(&job, metadata.clone()).unwrap(), SaveOutcome::Written);
        assert_eq!(store.save(&job, metadata).unwrap(), SaveOutcome::Unchanged);
    }

    #[test]
    fn save_leaves_no_staging_file() {
        let (_temp, store, job) = setup();
        store
            .save(&job, MetadataCollection::from_pairs([("a", "1")]))
            .unwrap();
        assert!(!store.paths().staging_path(&job).exists());
    }

    #[test]
    fn save_fails_while_locked() {
        let (_temp, store, job) = setup();
        let _held = JobLock::acquire(store.paths(), &job).unwrap();

        let result = store.save(&job, MetadataCollection::empty());
        assert!(matches!(
            result,
            Err(StoreError::Lock(LockError::AlreadyLocked(_)))
        ));
    }

    #[test]
    fn corrupt_document_is_reported() {
        let (_temp, store, job) = setup();
        fs::create_dir_all(store.paths().job_dir(&job)).unwrap();
        fs::write(store.paths().property_path(&job), "{ nope").unwrap();

        assert!(matches!(store.load(&job), Err(StoreError::Document(_))));
    }

    #[test]
    fn corrupt_document_is_replaced_on_save() {
        let (_temp, store, job) = setup();
        fs::create_dir_all(store.paths().job_dir(&job)).unwrap();
        fs::write(store.paths().property_path(&job), "{ nope").unwrap();

        store
            .save(&job, MetadataCollection::from_pairs([("a", "1")]))
            .unwrap();
        assert_eq!(
            store.metadata(&job).unwrap(),
            Some(MetadataCollection::from_pairs([("a", "1")]))
        );
    }

    #[test]
    fn document_for_other_job_rejected() {
        let (_temp, store, job) = setup();
        let other = JobName::new("release").unwrap();
        store.save(&other, MetadataCollection::empty()).unwrap();

        fs::create_dir_all(store.paths().job_dir(&job)).unwrap();
        fs::copy(
            store.paths().property_path(&other),
            store.paths().property_path(&job),
        )
        .unwrap();

        assert!(matches!(
            store.load(&job),
            Err(StoreError::JobMismatch { .. })
        ));
    }

    #[test]
    fn remove_missing_job() {
        let (_temp, store, job) = setup();
        assert!(!store.remove(&job).unwrap());
    }

    #[test]
    fn list_skips_invalid_and_empty_dirs() {
        let (temp, store, job) = setup();
        store.save(&job, MetadataCollection::empty()).unwrap();
        fs::create_dir_all(temp.path().join(".hidden")).unwrap();
        fs::create_dir_all(temp.path().join("no-metadata")).unwrap();

        assert_eq!(store.list_jobs().unwrap(), vec![job]);
    }

    #[test]
    fn list_missing_root() {
        let temp = TempDir::new().unwrap();
        let store = JobStore::open(temp.path().join("absent"));
        assert!(store.list_jobs().unwrap().is_empty());
    }
}
