//! set command - Replace a job's metadata from `key=value` arguments

use super::report_save;
use crate::cli::{job_name, Context};
use crate::core::metadata::{MetadataCollection, MetadataEntry};
use anyhow::{Context as _, Result};

/// Replace (or, with `append`, extend) a job's metadata.
///
/// The existing collection is never edited in place: a new one is built and
/// saved over it.
pub fn set(ctx: &Context, job: &str, pairs: &[String], append: bool) -> Result<()> {
    let job = job_name(job)?;
    let store = ctx.store();

    let mut entries = if append {
        store
            .metadata(&job)
            .with_context(|| format!("Failed to load metadata for job '{}'", job))?
            .map(MetadataCollection::into_entries)
            .unwrap_or_default()
    } else {
        Vec::new()
    };
    entries.extend(pairs.iter().map(|pair| parse_pair(pair)));

    let metadata = MetadataCollection::new(entries);
    let count = metadata.len();
    let outcome = store
        .save(&job, metadata)
        .with_context(|| format!("Failed to save metadata for job '{}'", job))?;

    report_save(ctx, &job, outcome, count);
    Ok(())
}

/// Parse `key=value` (split at the first `=`). Without `=`, the whole
/// argument is the key and the value is absent.
pub fn parse_pair(pair: &str) -> MetadataEntry {
    match pair.split_once('=') {
        Some((key, value)) => MetadataEntry::with_value(key, value),
        None => MetadataEntry::absent(pair),
    }
}
