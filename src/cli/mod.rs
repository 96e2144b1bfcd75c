//! cli
//!
//! Command-line interface layer for jobmeta.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve configuration into a [`Context`]
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Handlers parse their arguments into domain types
//! and call into [`crate::core`]; all persistence goes through
//! [`JobStore`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::core::config::{Config, OutputFormat};
use crate::core::metadata::JobStore;
use crate::core::types::JobName;
use crate::ui::output::{self, Verbosity};

/// Resolved settings shared by all command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Jobs root directory
    pub root: PathBuf,
    /// Output format
    pub output: OutputFormat,
    /// Enable debug output
    pub debug: bool,
    /// Minimal output
    pub quiet: bool,
}

impl Context {
    /// Build a context from parsed flags and loaded configuration.
    ///
    /// CLI flags take precedence over configuration.
    pub fn from_cli(cli: &Cli, config: &Config) -> Result<Self> {
        let root = match &cli.root {
            Some(root) => root.clone(),
            None => config
                .jobs_root()
                .context("Failed to resolve jobs root")?,
        };

        let output = if cli.json {
            OutputFormat::Json
        } else {
            config.output()
        };

        Ok(Self {
            root,
            output,
            debug: cli.debug,
            quiet: cli.quiet,
        })
    }

    /// Verbosity derived from the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Open the job store at the configured root.
    pub fn store(&self) -> JobStore {
        output::debug(
            format!("Opening job store at {}", self.root.display()),
            self.verbosity(),
        );
        JobStore::open(self.root.clone())
    }

    /// Whether JSON output was requested.
    pub fn json(&self) -> bool {
        self.output == OutputFormat::Json
    }
}

/// Parse a job name argument.
pub(crate) fn job_name(name: &str) -> Result<JobName> {
    JobName::new(name).context("Invalid job name")
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config = Config::load().context("Failed to load config")?;
    let ctx = Context::from_cli(&cli, &config)?;

    if let Some(path) = config.loaded_from() {
        output::debug(
            format!("Loaded config from {}", path.display()),
            ctx.verbosity(),
        );
    }

    commands::dispatch(cli.command, &ctx, &config)
}
