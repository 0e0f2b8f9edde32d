//! runedit: the editing core of a terminal text editor.
//!
//! A gap buffer holds the text, an undo history records merged edits and a
//! regex highlighter colors lines on demand. `Document` ties them together
//! with selection, search and a cut/copy register, and `EditCommand` maps
//! key events onto it.

pub mod command;
pub mod document;

pub use command::EditCommand;
pub use document::{Document, DEFAULT_PAGE_LINES};

pub use runedit_buffer::{EditKind, EditOperation, GapBuffer, History, Selection};
pub use runedit_config::Config;
pub use runedit_highlight::{Highlighter, Language, LanguageRegistry, Rule, Token, TokenKind};
pub use runedit_search::{Match, SearchDirection, SearchOptions};

use anyhow::{Context, Result};
use runedit_logger::LogLevel;
use std::path::PathBuf;
use std::str::FromStr;

/// Log file name used when the config does not set one
pub const DEFAULT_LOG_FILE: &str = "runedit.log";

/// Start the global logger as described by `config`.
///
/// The log goes to `logging.file_path`, or to `runedit.log` in the cache
/// directory. An unknown level falls back to info.
pub fn init_logging(config: &Config) -> Result<()> {
    let path = match &config.logging.file_path {
        Some(path) => PathBuf::from(path),
        None => runedit_config::get_cache_dir()
            .context("No location for the log file")?
            .join(DEFAULT_LOG_FILE),
    };
    let min_level = LogLevel::from_str(&config.logging.min_level).unwrap_or(LogLevel::Info);

    runedit_logger::init(Some(path), config.logging.max_entries, min_level);
    runedit_logger::info("runedit started");
    Ok(())
}
