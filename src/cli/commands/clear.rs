//! clear command - Remove a job's metadata

use crate::cli::{job_name, Context};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Remove the metadata property of `job`. Removing nothing is not an error.
pub fn clear(ctx: &Context, job: &str) -> Result<()> {
    let job = job_name(job)?;

    let removed = ctx
        .store()
        .remove(&job)
        .with_context(|| format!("Failed to remove metadata for job '{}'", job))?;

    if removed {
        output::print(format!("Removed metadata from job '{}'", job), ctx.verbosity());
    } else {
        output::warn(format!("Job '{}' has no metadata", job), ctx.verbosity());
    }

    Ok(())
}
