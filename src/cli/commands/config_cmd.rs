//! config command - Show effective configuration

use crate::cli::Context;
use crate::core::config::Config;
use anyhow::Result;

/// List effective configuration values.
pub fn list(ctx: &Context, config: &Config) -> Result<()> {
    println!("# Effective Configuration");
    println!("jobs_root = {}", ctx.root.display());
    println!("output = {}", ctx.output);

    match config.loaded_from() {
        Some(path) => println!("# loaded from {}", path.display()),
        None => println!("# no config file, using defaults"),
    }

    Ok(())
}

/// Print the path of the loaded config file, if any.
pub fn path(config: &Config) -> Result<()> {
    if let Some(path) = config.loaded_from() {
        println!("{}", path.display());
    }
    Ok(())
}
