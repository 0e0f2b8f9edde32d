//! XDG Base Directory support.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "runedit";

fn app_dir(base: Option<PathBuf>, kind: &str) -> Result<PathBuf> {
    base.map(|p| p.join(APP_NAME))
        .with_context(|| format!("Failed to determine {kind} directory"))
}

/// `$XDG_CONFIG_HOME/runedit` or `~/.config/runedit`.
pub fn get_config_dir() -> Result<PathBuf> {
    app_dir(dirs::config_dir(), "config")
}

/// `$XDG_DATA_HOME/runedit` or `~/.local/share/runedit`.
pub fn get_data_dir() -> Result<PathBuf> {
    app_dir(dirs::data_dir(), "data")
}

/// `$XDG_CACHE_HOME/runedit` or `~/.cache/runedit`.
pub fn get_cache_dir() -> Result<PathBuf> {
    app_dir(dirs::cache_dir(), "cache")
}
