//! core::metadata::entry
//!
//! A single key/value pair attached to a job.
//!
//! # Value Semantics
//!
//! Entries are immutable once constructed. Equality is exact on both fields:
//! an absent value equals only another absent value, and is never equal to
//! an empty string. No normalization is applied to keys or values.
//!
//! # Example
//!
//! ```
//! use jobmeta::core::metadata::entry::MetadataEntry;
//!
//! let entry = MetadataEntry::new("env", Some("prod".to_string()));
//! assert_eq!(entry.key(), "env");
//! assert_eq!(entry.value(), Some("prod"));
//! assert_eq!(entry.to_string(), "MetadataEntry{key=env, value=prod}");
//!
//! // Absent and empty are distinct values
//! assert_ne!(MetadataEntry::absent("env"), MetadataEntry::with_value("env", ""));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Seed of [`MetadataEntry::stable_hash`].
const HASH_SEED: i32 = 7;

/// Multiplier of [`MetadataEntry::stable_hash`].
const HASH_MULTIPLIER: i32 = 97;

/// One user-defined key/value pair.
///
/// Keys may be empty and are not required to be unique within a
/// collection. Values may be empty or absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataEntry {
    key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl MetadataEntry {
    /// Create an entry. Any text is accepted for both fields.
    pub fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Create an entry with a present (possibly empty) value.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, Some(value.into()))
    }

    /// Create an entry whose value is absent.
    pub fn absent(key: impl Into<String>) -> Self {
        Self::new(key, None)
    }

    /// The entry's key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The entry's value, `None` when absent.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Deterministic 32-bit hash, stable across processes and platforms.
    ///
    /// Combines the key and value string hashes with a fixed seed and
    /// multiplier; an absent value contributes zero. Equal entries always
    /// produce equal hashes.
    ///
    /// # Example
    ///
    /// ```
    /// use jobmeta::core::metadata::entry::MetadataEntry;
    ///
    /// let a = MetadataEntry::with_value("env", "prod");
    /// let b = a.clone();
    /// assert_eq!(a.stable_hash(), b.stable_hash());
    ///
    /// // 97 * 7 = 679, plus nothing for an empty key and absent value
    /// assert_eq!(MetadataEntry::absent("").stable_hash(), 679 * 97);
    /// ```
    pub fn stable_hash(&self) -> i32 {
        let mut hash = HASH_SEED;
        hash = hash
            .wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(string_hash(&self.key));
        hash = hash
            .wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(self.value.as_deref().map_or(0, string_hash));
        hash
    }

    /// Render as `key=value`, the form used inside a collection rendering.
    pub(crate) fn write_pair(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, DisplayValue(self.value()))
    }
}

impl fmt::Display for MetadataEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MetadataEntry{{key={}, value={}}}",
            self.key,
            DisplayValue(self.value())
        )
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for MetadataEntry {
    fn from((key, value): (K, V)) -> Self {
        Self::with_value(key, value)
    }
}

/// Displays an optional value, rendering absent as `null`.
struct DisplayValue<'a>(Option<&'a str>);

impl fmt::Display for DisplayValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => f.write_str(v),
            None => f.write_str("null"),
        }
    }
}

/// Polynomial string hash (`s[0]*31^(n-1) + ... + s[n-1]`) over UTF-16 code units.
fn string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}
