//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Parses command-specific arguments into domain types
//! 2. Calls the job store
//! 3. Formats and displays output
//!
//! Handlers never write job files directly.

mod apply;
mod clear;
mod completion;
mod config_cmd;
mod get;
mod list;
mod set;
mod show;

// Re-export command functions for testing and direct invocation
pub use apply::apply;
pub use clear::clear;
pub use completion::{completion, write_completion};
pub use config_cmd::{list as config_list, path as config_path};
pub use get::get;
pub use list::list;
pub use set::{parse_pair, set};
pub use show::show;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use crate::core::config::Config;
use crate::core::metadata::SaveOutcome;
use crate::core::types::JobName;
use crate::ui::output;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context, config: &Config) -> Result<()> {
    match command {
        Command::Show { job, raw } => show::show(ctx, &job, raw),
        Command::Get { job, key } => get::get(ctx, &job, &key),
        Command::Set { job, pairs, append } => set::set(ctx, &job, &pairs, append),
        Command::Apply { job, form } => apply::apply(ctx, &job, form.as_deref()),
        Command::Clear { job } => clear::clear(ctx, &job),
        Command::List => list::list(ctx),
        Command::Config { action } => match action {
            ConfigAction::List => config_cmd::list(ctx, config),
            ConfigAction::Path => config_cmd::path(config),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Report the outcome of a save.
fn report_save(ctx: &Context, job: &JobName, outcome: SaveOutcome, count: usize) {
    match outcome {
        SaveOutcome::Written => output::print(
            format!("Saved {} metadata entries for job '{}'", count, job),
            ctx.verbosity(),
        ),
        SaveOutcome::Unchanged => output::print(
            format!("Metadata for job '{}' is unchanged", job),
            ctx.verbosity(),
        ),
    }
}
