//! get command - Look up one metadata value by key
//!
//! The first entry with an exactly matching key wins. An entry whose value
//! is absent prints nothing and still succeeds; a missing key is an error.

use crate::cli::{job_name, Context};
use crate::ui::output;
use anyhow::{bail, Context as _, Result};

/// Print the value of the first entry keyed `key`.
pub fn get(ctx: &Context, job: &str, key: &str) -> Result<()> {
    let job = job_name(job)?;
    let store = ctx.store();

    let entry = store
        .find(&job, key)
        .with_context(|| format!("Failed to load metadata for job '{}'", job))?;

    let Some(entry) = entry else {
        bail!("No entry '{}' in metadata of job '{}'", key, job);
    };

    if ctx.json() {
        println!("{}", serde_json::to_string(&entry)?);
        return Ok(());
    }

    match entry.value() {
        Some(value) => println!("{}", value),
        None => output::debug(format!("Entry '{}' has no value", key), ctx.verbosity()),
    }

    Ok(())
}
