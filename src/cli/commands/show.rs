//! show command - Display the metadata attached to a job

use crate::cli::{job_name, Context};
use crate::ui::output;
use anyhow::{bail, Context as _, Result};

/// Show a job's metadata.
///
/// Prints an aligned table by default, the single-line collection rendering
/// with `raw`, or the stored document as JSON.
pub fn show(ctx: &Context, job: &str, raw: bool) -> Result<()> {
    let job = job_name(job)?;
    let store = ctx.store();

    let Some(doc) = store
        .load(&job)
        .with_context(|| format!("Failed to load metadata for job '{}'", job))?
    else {
        bail!("Job '{}' has no metadata", job);
    };

    output::debug(
        format!(
            "{} entries, updated {}, fingerprint {}",
            doc.metadata.len(),
            doc.updated_at,
            doc.metadata.fingerprint().short()
        ),
        ctx.verbosity(),
    );

    if ctx.json() {
        println!("{}", doc.to_pretty_json()?);
    } else if raw {
        println!("{}", doc.metadata);
    } else if doc.metadata.is_empty() {
        output::print("(no entries)", ctx.verbosity());
    } else {
        println!("{}", output::format_entries(&doc.metadata));
    }

    Ok(())
}
