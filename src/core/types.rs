//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`JobName`] - Validated job identifier, safe to use as a directory name
//! - [`UtcTimestamp`] - RFC3339 timestamp
//! - [`Fingerprint`] - Content hash used to detect unchanged metadata
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use jobmeta::core::types::JobName;
//!
//! let job = JobName::new("nightly-build").unwrap();
//! assert_eq!(job.as_str(), "nightly-build");
//!
//! assert!(JobName::new("").is_err());
//! assert!(JobName::new("../escape").is_err());
//! ```

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid job name: {0}")]
    InvalidJobName(String),
}

/// A validated job name.
///
/// Job names map one-to-one onto directories under the jobs root, so they
/// must be a single safe path component:
/// - Cannot be empty
/// - Cannot start with `.`
/// - Cannot contain `/`, `\`, or ASCII control characters
///
/// # Example
///
/// ```
/// use jobmeta::core::types::JobName;
///
/// assert!(JobName::new("deploy prod").is_ok());
/// assert!(JobName::new(".hidden").is_err());
/// assert!(JobName::new("a/b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JobName(String);

impl JobName {
    /// Create a new validated job name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidJobName` if the name is not a safe path component.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidJobName("job name cannot be empty".into()));
        }

        // Also covers "." and ".."
        if name.starts_with('.') {
            return Err(TypeError::InvalidJobName(format!(
                "'{}' cannot start with '.'",
                name
            )));
        }

        if name.contains('/') || name.contains('\\') {
            return Err(TypeError::InvalidJobName(format!(
                "'{}' cannot contain path separators",
                name
            )));
        }

        if name.chars().any(|c| c.is_ascii_control()) {
            return Err(TypeError::InvalidJobName(format!(
                "'{}' cannot contain control characters",
                name.escape_debug()
            )));
        }

        Ok(())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for JobName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JobName> for String {
    fn from(name: JobName) -> Self {
        name.0
    }
}

impl AsRef<str> for JobName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A UTC timestamp, serialized as RFC3339.
///
/// # Example
///
/// ```
/// use jobmeta::core::types::UtcTimestamp;
///
/// let now = UtcTimestamp::now();
/// println!("Current time: {}", now);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtcTimestamp(chrono::DateTime<chrono::Utc>);

impl UtcTimestamp {
    /// Create a timestamp for the current moment.
    pub fn now() -> Self {
        Self(chrono::Utc::now())
    }

    /// Create a timestamp from a chrono DateTime.
    pub fn from_datetime(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Self(dt)
    }

    /// Get the underlying datetime.
    pub fn as_datetime(&self) -> &chrono::DateTime<chrono::Utc> {
        &self.0
    }
}

impl std::fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

/// A SHA-256 content hash, hex encoded.
///
/// # Example
///
/// ```
/// use jobmeta::core::types::Fingerprint;
///
/// let fp = Fingerprint::of_bytes(b"env=prod");
/// assert_eq!(fp, Fingerprint::of_bytes(b"env=prod"));
/// assert_eq!(fp.as_str().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Hash raw bytes.
    pub fn of_bytes(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self(hex::encode(hasher.finalize()))
    }

    /// Get the fingerprint as a hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 hex digits, for display.
    pub fn short(&self) -> &str {
        &self.0[..12]
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
