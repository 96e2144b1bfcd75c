//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order:
//! 1. `$JOBMETA_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/jobmeta/config.toml`
//! 3. `~/.jobmeta/config.toml`
//!
//! # Validation
//!
//! Values are validated after parsing: the jobs root must not be empty and
//! the output format must be a known one.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// User configuration.
///
/// # Example
///
/// ```toml
/// jobs_root = "/var/lib/ci/jobs"
/// output = "json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Directory holding one subdirectory per job
    pub jobs_root: Option<PathBuf>,

    /// Default output format ("text" or "json")
    pub output: Option<String>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(root) = &self.jobs_root {
            if root.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "jobs_root cannot be empty".to_string(),
                ));
            }
        }

        if let Some(output) = &self.output {
            OutputFormat::parse(output)?;
        }

        Ok(())
    }
}

/// How commands print metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

impl OutputFormat {
    /// Valid format names.
    pub const VALID_FORMATS: &'static [&'static str] = &["text", "json"];

    /// Parse a format name.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        match name {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue(format!(
                "invalid output format '{}', must be one of: {}",
                other,
                Self::VALID_FORMATS.join(", ")
            ))),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}
