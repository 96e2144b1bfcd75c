//! apply command - Bind submitted form data and save it
//!
//! A checked form replaces the job's metadata with the bound rows. An
//! unchecked (or empty) form removes the job's metadata.

use std::io::Read;
use std::path::Path;

use super::report_save;
use crate::cli::{job_name, Context};
use crate::core::form::bind_form;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Bind the form at `form` (stdin when `None`) and save it for `job`.
pub fn apply(ctx: &Context, job: &str, form: Option<&Path>) -> Result<()> {
    let job = job_name(job)?;
    let text = read_form(form)?;

    let form: serde_json::Value = serde_json::from_str(&text).context("Form is not valid JSON")?;
    output::debug(format!("formData = {}", form), ctx.verbosity());

    let store = ctx.store();
    match bind_form(&form).context("Failed to bind form")? {
        Some(metadata) => {
            let count = metadata.len();
            let outcome = store
                .save(&job, metadata)
                .with_context(|| format!("Failed to save metadata for job '{}'", job))?;
            report_save(ctx, &job, outcome, count);
        }
        None => {
            output::debug("Metadata disabled in form", ctx.verbosity());
            let removed = store
                .remove(&job)
                .with_context(|| format!("Failed to remove metadata for job '{}'", job))?;
            if removed {
                output::print(format!("Removed metadata from job '{}'", job), ctx.verbosity());
            } else {
                output::print(format!("Job '{}' has no metadata", job), ctx.verbosity());
            }
        }
    }

    Ok(())
}

fn read_form(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read form '{}'", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read form from stdin")?;
            Ok(text)
        }
    }
}
