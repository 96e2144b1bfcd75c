//! list command - Enumerate jobs that carry metadata

use crate::cli::Context;
use anyhow::{Context as _, Result};

/// Print the names of all jobs with metadata, one per line.
pub fn list(ctx: &Context) -> Result<()> {
    let jobs = ctx
        .store()
        .list_jobs()
        .with_context(|| format!("Failed to list jobs in '{}'", ctx.root.display()))?;

    if ctx.json() {
        println!("{}", serde_json::to_string_pretty(&jobs)?);
    } else {
        for job in jobs {
            println!("{}", job);
        }
    }

    Ok(())
}
