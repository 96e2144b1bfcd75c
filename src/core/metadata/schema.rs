//! core::metadata::schema
//!
//! Persisted job property document (v1).
//!
//! # Schema Design
//!
//! The document stored for each job is:
//! - Self-describing with `kind` and `schema_version`
//! - Strictly parsed (unknown fields rejected)
//! - Faithful: entry order, duplicates, and the absent/empty value
//!   distinction survive a round trip
//!
//! # Example
//!
//! ```
//! use jobmeta::core::metadata::schema::{parse_document, JobPropertyDocument, DOCUMENT_KIND};
//! use jobmeta::core::metadata::MetadataCollection;
//! use jobmeta::core::types::JobName;
//!
//! let job = JobName::new("nightly").unwrap();
//! let doc = JobPropertyDocument::new(job, MetadataCollection::from_pairs([("env", "prod")]));
//! assert_eq!(doc.kind, DOCUMENT_KIND);
//!
//! let json = doc.to_canonical_json().unwrap();
//! let parsed = parse_document(&json).unwrap();
//! assert_eq!(parsed.metadata.value_of("env"), Some("prod"));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::collection::MetadataCollection;
use crate::core::types::{JobName, UtcTimestamp};

/// The kind identifier for job property documents.
pub const DOCUMENT_KIND: &str = "jobmeta.job-property";

/// Current schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors from document parsing and serialization.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to parse job property: {0}")]
    ParseError(String),

    #[error("failed to serialize job property: {0}")]
    SerializeError(String),

    #[error("invalid kind '{found}', expected '{}'", DOCUMENT_KIND)]
    InvalidKind { found: String },

    #[error("unsupported schema version {0}, supported: {SCHEMA_VERSION}")]
    UnsupportedVersion(u32),
}

/// Envelope for version dispatch before full parsing.
#[derive(Debug, Deserialize)]
struct DocumentEnvelope {
    kind: String,
    schema_version: u32,
}

/// Parse a job property document with version dispatch.
///
/// # Errors
///
/// Returns an error if:
/// - The JSON is malformed or has unknown fields
/// - The `kind` field doesn't match [`DOCUMENT_KIND`]
/// - The `schema_version` is not supported
/// - The job name is invalid
/// - `metadata.entries` is missing or `null`
pub fn parse_document(json: &str) -> Result<JobPropertyDocument, DocumentError> {
    let envelope: DocumentEnvelope =
        serde_json::from_str(json).map_err(|e| DocumentError::ParseError(e.to_string()))?;

    if envelope.kind != DOCUMENT_KIND {
        return Err(DocumentError::InvalidKind {
            found: envelope.kind,
        });
    }

    match envelope.schema_version {
        1 => serde_json::from_str(json).map_err(|e| DocumentError::ParseError(e.to_string())),
        v => Err(DocumentError::UnsupportedVersion(v)),
    }
}

/// The metadata property of one job, as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct JobPropertyDocument {
    /// Kind identifier (always "jobmeta.job-property")
    pub kind: String,

    /// Schema version (always 1 for this struct)
    pub schema_version: u32,

    /// The job this property belongs to
    pub job: JobName,

    /// The ordered metadata list
    pub metadata: MetadataCollection,

    /// When this property was last saved
    pub updated_at: UtcTimestamp,
}

impl JobPropertyDocument {
    /// Create a document for `job`, stamped with the current time.
    pub fn new(job: JobName, metadata: MetadataCollection) -> Self {
        Self {
            kind: DOCUMENT_KIND.to_string(),
            schema_version: SCHEMA_VERSION,
            job,
            metadata,
            updated_at: UtcTimestamp::now(),
        }
    }

    /// Serialize to canonical JSON (compact, deterministic).
    pub fn to_canonical_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string(self).map_err(|e| DocumentError::SerializeError(e.to_string()))
    }

    /// Serialize to indented JSON, the on-disk form.
    pub fn to_pretty_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DocumentError::SerializeError(e.to_string()))
    }
}
