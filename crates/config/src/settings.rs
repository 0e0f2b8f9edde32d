//! Configuration structures for runedit settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorSettings,

    #[serde(default)]
    pub history: HistorySettings,

    #[serde(default)]
    pub syntax: SyntaxSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Editing behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Indent width used by Tab
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,

    /// Tab inserts spaces instead of a tab character
    #[serde(default = "default_insert_spaces")]
    pub insert_spaces: bool,

    /// Enter copies the current line's leading whitespace
    #[serde(default = "default_auto_indent")]
    pub auto_indent: bool,
}

/// Undo history limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySettings {
    /// Maximum number of undo entries
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Edits closer together than this merge into one undo entry
    #[serde(default = "default_merge_timeout_ms")]
    pub merge_timeout_ms: u64,
}

impl HistorySettings {
    pub fn merge_timeout(&self) -> Duration {
        Duration::from_millis(self.merge_timeout_ms)
    }
}

/// Syntax highlighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxSettings {
    #[serde(default = "default_syntax_enabled")]
    pub enabled: bool,

    /// Use the palette for light terminal backgrounds
    #[serde(default)]
    pub light_theme: bool,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,

    /// In-memory entries kept
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

// Default value functions for serde
fn default_tab_size() -> usize {
    defaults::TAB_SIZE
}

fn default_insert_spaces() -> bool {
    defaults::INSERT_SPACES
}

fn default_auto_indent() -> bool {
    defaults::AUTO_INDENT
}

fn default_max_depth() -> usize {
    defaults::HISTORY_MAX_DEPTH
}

fn default_merge_timeout_ms() -> u64 {
    defaults::MERGE_TIMEOUT_MS
}

fn default_syntax_enabled() -> bool {
    defaults::SYNTAX_ENABLED
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

fn default_max_entries() -> usize {
    defaults::LOG_MAX_ENTRIES
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tab_size: default_tab_size(),
            insert_spaces: default_insert_spaces(),
            auto_indent: default_auto_indent(),
        }
    }
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            merge_timeout_ms: default_merge_timeout_ms(),
        }
    }
}

impl Default for SyntaxSettings {
    fn default() -> Self {
        Self {
            enabled: default_syntax_enabled(),
            light_theme: false,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
            max_entries: default_max_entries(),
        }
    }
}
