//! core::paths
//!
//! Centralized path routing for job metadata storage.
//!
//! # Storage Layout
//!
//! Every job owns one directory under the jobs root:
//! - `<root>/<job>/metadata.json` - The job's metadata property
//! - `<root>/<job>/metadata.json.tmp` - Staging file for atomic replace
//! - `<root>/<job>/.lock` - Exclusive save lock
//!
//! No code outside this module should join these names by hand.
//!
//! # Example
//!
//! ```
//! use jobmeta::core::paths::JobPaths;
//! use jobmeta::core::types::JobName;
//! use std::path::PathBuf;
//!
//! let paths = JobPaths::new(PathBuf::from("/srv/jobs"));
//! let job = JobName::new("nightly").unwrap();
//!
//! assert_eq!(
//!     paths.property_path(&job),
//!     PathBuf::from("/srv/jobs/nightly/metadata.json")
//! );
//! ```

use std::path::{Path, PathBuf};

use crate::core::types::JobName;

/// File name of a job's metadata property.
pub const PROPERTY_FILE: &str = "metadata.json";

/// File name of a job's save lock.
pub const LOCK_FILE: &str = ".lock";

/// Path routing for a jobs root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPaths {
    root: PathBuf,
}

impl JobPaths {
    /// Create path routing for the given jobs root.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The jobs root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory owned by `job`.
    pub fn job_dir(&self, job: &JobName) -> PathBuf {
        self.root.join(job.as_str())
    }

    /// The job's persisted metadata property.
    pub fn property_path(&self, job: &JobName) -> PathBuf {
        self.job_dir(job).join(PROPERTY_FILE)
    }

    /// Staging file written before the atomic rename.
    pub fn staging_path(&self, job: &JobName) -> PathBuf {
        self.property_path(job).with_extension("json.tmp")
    }

    /// The job's save lock.
    pub fn lock_path(&self, job: &JobName) -> PathBuf {
        self.job_dir(job).join(LOCK_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> JobName {
        JobName::new("deploy").unwrap()
    }

    #[test]
    fn layout() {
        let paths = JobPaths::new(PathBuf::from("/jobs"));
        assert_eq!(paths.job_dir(&job()), PathBuf::from("/jobs/deploy"));
        assert_eq!(
            paths.staging_path(&job()),
            PathBuf::from("/jobs/deploy/metadata.json.tmp")
        );
        assert_eq!(paths.lock_path(&job()), PathBuf::from("/jobs/deploy/.lock"));
    }
}
