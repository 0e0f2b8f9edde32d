//! Configuration management for runedit.
//!
//! TOML configuration stored under the XDG config directory. Every key has a
//! default, so partial or empty files load.

mod settings;
mod xdg;

pub use settings::{Config, EditorSettings, HistorySettings, LoggingSettings, SyntaxSettings};
pub use xdg::{get_cache_dir, get_config_dir, get_data_dir};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const TAB_SIZE: usize = 4;
    pub const INSERT_SPACES: bool = true;
    pub const AUTO_INDENT: bool = true;
    pub const HISTORY_MAX_DEPTH: usize = 1000;
    pub const MERGE_TIMEOUT_MS: u64 = 500;
    pub const SYNTAX_ENABLED: bool = true;
    pub const MIN_LOG_LEVEL: &str = "info";
    pub const LOG_MAX_ENTRIES: usize = 1000;
}

impl Config {
    /// Load configuration from the user config directory.
    ///
    /// On first run, creates the file with default values.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from `path`.
    ///
    /// A missing file is created with defaults. Missing keys are filled in
    /// and written back.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::validate_content(&original_content)
            .with_context(|| format!("Invalid config {}", path.display()))?;

        let normalized_content = toml::to_string_pretty(&config)?;
        if original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Save configuration to the user config directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Parse config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }
}
