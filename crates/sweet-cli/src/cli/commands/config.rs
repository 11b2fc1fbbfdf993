//! Config command handlers.

use anyhow::{Context, Result};
use sweet_core::config::{Config, paths};

pub fn path() {
    println!("{}", paths::config_path().display());
}

/// Prints the effective configuration (file values, defaults, env override).
pub fn show(config: &Config) -> Result<()> {
    let toml = toml::to_string_pretty(config).context("serialize config")?;
    print!("{toml}");
    Ok(())
}

pub fn init() -> Result<()> {
    let config_path = paths::config_path();
    Config::write_template_if_missing(&config_path)
        .with_context(|| format!("init config at {}", config_path.display()))?;
    println!("Created config at {}", config_path.display());
    Ok(())
}
