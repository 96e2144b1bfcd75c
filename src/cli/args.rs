//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--root <dir>`: Jobs root directory
//! - `--json`: Machine-readable output
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// jobmeta - Ordered key/value metadata for CI jobs
#[derive(Parser, Debug)]
#[command(name = "jobmeta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Jobs root directory (overrides $JOBMETA_ROOT and the config file)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the metadata attached to a job
    #[command(
        name = "show",
        long_about = "Show the metadata attached to a job.\n\n\
            Entries are listed in the order they were saved, duplicates included. \
            Use --raw for the single-line rendering other tools parse.",
        after_help = "\
EXAMPLES:
    # Aligned key/value table
    jobmeta show nightly

    # Single-line rendering
    jobmeta show nightly --raw
    MetadataCollection{env=prod;owner=teamX;}

    # Full stored document
    jobmeta show nightly --json"
    )]
    Show {
        /// Job name
        job: String,

        /// Print the single-line `MetadataCollection{...}` rendering
        #[arg(long)]
        raw: bool,
    },

    /// Print the value of the first entry with a key
    #[command(
        name = "get",
        long_about = "Print the value of the first entry with the given key.\n\n\
            Keys are matched exactly and case-sensitively. When a job has several \
            entries with the same key, the earliest one wins. Exits with an error \
            if no entry matches.",
        after_help = "\
EXAMPLES:
    jobmeta get nightly env
    DEPLOY_ENV=$(jobmeta get nightly env)"
    )]
    Get {
        /// Job name
        job: String,

        /// Entry key
        key: String,
    },

    /// Replace a job's metadata with the given pairs
    #[command(
        name = "set",
        long_about = "Replace a job's metadata with the given pairs.\n\n\
            The whole list is replaced on every save. Pairs are kept in the order \
            given. `key=` stores an empty value; a bare `key` stores an absent value.",
        after_help = "\
EXAMPLES:
    # Replace everything
    jobmeta set nightly env=prod owner=teamX

    # Add to what is already there
    jobmeta set nightly ticket=CI-42 --append"
    )]
    Set {
        /// Job name
        job: String,

        /// Pairs as key=value
        #[arg(value_name = "KEY=VALUE")]
        pairs: Vec<String>,

        /// Append to the existing entries instead of replacing them
        #[arg(long)]
        append: bool,
    },

    /// Bind submitted form data and save it
    #[command(
        name = "apply",
        long_about = "Bind submitted job configuration form data and save it.\n\n\
            The form is a JSON object with a `metadataJobProperty` checkbox and \
            a `listOfMetaData` array of {key, value} rows. When the checkbox is \
            unchecked the job's metadata is removed.",
        after_help = "\
EXAMPLES:
    jobmeta apply nightly --form form.json
    curl -s $CI/job/nightly/form | jobmeta apply nightly"
    )]
    Apply {
        /// Job name
        job: String,

        /// Form JSON file (reads stdin when omitted)
        #[arg(long, value_name = "FILE")]
        form: Option<PathBuf>,
    },

    /// Remove a job's metadata
    Clear {
        /// Job name
        job: String,
    },

    /// List jobs that carry metadata
    List,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
INSTALLATION:
    # Bash
    jobmeta completion bash > ~/.local/share/bash-completion/completions/jobmeta

    # Zsh
    jobmeta completion zsh > \"${fpath[1]}/_jobmeta\"

    # Fish
    jobmeta completion fish > ~/.config/fish/completions/jobmeta.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// List effective configuration values
    List,
    /// Print the path of the loaded config file
    Path,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_set_pairs() {
        let cli = Cli::try_parse_from(["jobmeta", "set", "nightly", "a=1", "b=", "--append"])
            .unwrap();
        match cli.command {
            Command::Set { job, pairs, append } => {
                assert_eq!(job, "nightly");
                assert_eq!(pairs, vec!["a=1", "b="]);
                assert!(append);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["jobmeta", "list", "--root", "/srv/jobs", "-q"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/srv/jobs")));
        assert!(cli.quiet);
    }
}
