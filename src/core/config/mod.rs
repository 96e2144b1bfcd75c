//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. Environment (`$JOBMETA_ROOT` for the jobs root)
//! 4. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$JOBMETA_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/jobmeta/config.toml`
//! 3. `~/.jobmeta/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use jobmeta::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Jobs root: {}", config.jobs_root().unwrap().display());
//! println!("Output: {}", config.output());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, OutputFormat};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Values from the config file (defaults if none was found)
    pub global: GlobalConfig,
    /// Path to the config file (if loaded)
    path: Option<PathBuf>,
    /// `$JOBMETA_ROOT` at load time
    env_root: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// holds invalid values. A missing config file is not an error.
    pub fn load() -> Result<Config, ConfigError> {
        let env_root = std::env::var_os("JOBMETA_ROOT")
            .filter(|root| !root.is_empty())
            .map(PathBuf::from);

        let mut config = match Self::find_config_file() {
            Some(path) => Self::load_from(&path)?,
            None => Config::default(),
        };
        config.env_root = env_root;

        Ok(config)
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let global: GlobalConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        global.validate()?;

        Ok(Config {
            global,
            path: Some(path.to_path_buf()),
            env_root: None,
        })
    }

    /// First existing config file in search order.
    fn find_config_file() -> Option<PathBuf> {
        // 1. $JOBMETA_CONFIG
        if let Ok(path) = std::env::var("JOBMETA_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. $XDG_CONFIG_HOME/jobmeta/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("jobmeta/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. ~/.jobmeta/config.toml
        dirs::home_dir()
            .map(|home| home.join(".jobmeta/config.toml"))
            .filter(|path| path.exists())
    }

    /// The jobs root: `$JOBMETA_ROOT`, then the config file, then
    /// `~/.jobmeta/jobs`.
    pub fn jobs_root(&self) -> Result<PathBuf, ConfigError> {
        if let Some(root) = &self.env_root {
            return Ok(root.clone());
        }
        if let Some(root) = &self.global.jobs_root {
            return Ok(root.clone());
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".jobmeta/jobs"))
    }

    /// Default output format.
    ///
    /// Defaults to text if not configured. The value was validated on load.
    pub fn output(&self) -> OutputFormat {
        self.global
            .output
            .as_deref()
            .and_then(|name| OutputFormat::parse(name).ok())
            .unwrap_or_default()
    }

    /// Path of the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
