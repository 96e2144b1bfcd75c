//! core::metadata
//!
//! Job metadata: the ordered key/value list and its persistence.
//!
//! # Modules
//!
//! - [`entry`] - A single immutable key/value pair
//! - [`collection`] - Ordered list with first-match lookup
//! - [`schema`] - Persisted job property document (v1)
//! - [`store`] - File-backed storage under a jobs root
//!
//! # Example
//!
//! ```
//! use jobmeta::core::metadata::{MetadataCollection, MetadataEntry};
//!
//! let metadata = MetadataCollection::new(vec![
//!     MetadataEntry::with_value("env", "prod"),
//!     MetadataEntry::with_value("owner", "teamX"),
//! ]);
//!
//! let json = serde_json::to_string(&metadata).unwrap();
//! let parsed: MetadataCollection = serde_json::from_str(&json).unwrap();
//! assert_eq!(parsed, metadata);
//! ```

pub mod collection;
pub mod entry;
pub mod schema;
pub mod store;

// Re-export commonly used types
pub use collection::MetadataCollection;
pub use entry::MetadataEntry;
pub use schema::{parse_document, DocumentError, JobPropertyDocument, DOCUMENT_KIND, SCHEMA_VERSION};
pub use store::{JobStore, SaveOutcome, StoreError};
