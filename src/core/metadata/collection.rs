//! core::metadata::collection
//!
//! The ordered metadata list owned by a job configuration.
//!
//! # Ordering
//!
//! Entries keep their construction order. Duplicate keys are kept; lookup
//! returns the first match, so later duplicates are unreachable through
//! [`MetadataCollection::find`] but still listed by
//! [`MetadataCollection::entries`].
//!
//! # Replacement
//!
//! A collection is never mutated in place. The constructor takes ownership
//! of the entry sequence, and the update helpers return a new collection.
//! A configuration save swaps the whole collection.
//!
//! # Example
//!
//! ```
//! use jobmeta::core::metadata::{MetadataCollection, MetadataEntry};
//!
//! let metadata = MetadataCollection::from_pairs([("env", "prod"), ("owner", "teamX")]);
//! assert_eq!(metadata.value_of("env"), Some("prod"));
//! assert!(metadata.find("region").is_none());
//! assert_eq!(metadata.to_string(), "MetadataCollection{env=prod;owner=teamX;}");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::entry::MetadataEntry;
use crate::core::types::Fingerprint;

/// An ordered sequence of [`MetadataEntry`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataCollection {
    entries: Vec<MetadataEntry>,
}

impl MetadataCollection {
    /// Create a collection that owns `entries`, in the given order.
    pub fn new(entries: Vec<MetadataEntry>) -> Self {
        Self { entries }
    }

    /// Create an empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a collection from `(key, value)` pairs with present values.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().map(MetadataEntry::from).collect()
    }

    /// The entries in construction order.
    pub fn entries(&self) -> &[MetadataEntry] {
        &self.entries
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, MetadataEntry> {
        self.entries.iter()
    }

    /// Return the first entry whose key equals `key` exactly.
    ///
    /// Comparison is case-sensitive. Returns `None` when no entry matches.
    ///
    /// # Example
    ///
    /// ```
    /// use jobmeta::core::metadata::{MetadataCollection, MetadataEntry};
    ///
    /// let metadata = MetadataCollection::from_pairs([("a", "1"), ("b", "2"), ("a", "3")]);
    /// assert_eq!(metadata.find("a"), Some(&MetadataEntry::with_value("a", "1")));
    /// assert_eq!(metadata.find("c"), None);
    /// ```
    pub fn find(&self, key: &str) -> Option<&MetadataEntry> {
        self.entries.iter().find(|entry| entry.key() == key)
    }

    /// Value of the first entry matching `key`.
    ///
    /// Returns `None` both when no entry matches and when the first match
    /// has an absent value. Use [`find`](Self::find) to tell them apart.
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.find(key).and_then(MetadataEntry::value)
    }

    /// Return a new collection with `entry` appended.
    pub fn with_entry(&self, entry: MetadataEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self::new(entries)
    }

    /// Return a new collection without any entry keyed `key`.
    pub fn without_key(&self, key: &str) -> Self {
        self.entries
            .iter()
            .filter(|entry| entry.key() != key)
            .cloned()
            .collect()
    }

    /// Content hash of the collection, sensitive to order and to the
    /// absent/empty distinction.
    pub fn fingerprint(&self) -> Fingerprint {
        // Serializing owned strings into JSON cannot fail.
        let canonical = serde_json::to_vec(self).unwrap_or_default();
        Fingerprint::of_bytes(&canonical)
    }

    /// Consume the collection, returning its entries.
    pub fn into_entries(self) -> Vec<MetadataEntry> {
        self.entries
    }
}

impl fmt::Display for MetadataCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MetadataCollection{")?;
        for entry in &self.entries {
            entry.write_pair(f)?;
            f.write_str(";")?;
        }
        f.write_str("}")
    }
}

impl FromIterator<MetadataEntry> for MetadataCollection {
    fn from_iter<I: IntoIterator<Item = MetadataEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MetadataCollection {
    type Item = &'a MetadataEntry;
    type IntoIter = std::slice::Iter<'a, MetadataEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for MetadataCollection {
    type Item = MetadataEntry;
    type IntoIter = std::vec::IntoIter<MetadataEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
