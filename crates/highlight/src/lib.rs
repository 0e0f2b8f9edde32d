//! Syntax highlighting for runedit.
//!
//! Lines are tokenized with ordered regex rules: the first rule to claim a
//! position wins it, and whatever no rule claims becomes a `Normal` token.
//! Results are cached per line and invalidated by the caller as it edits.

mod highlighter;
pub mod languages;
mod registry;
mod theme;

pub use highlighter::{CacheStats, Highlighter, MAX_CACHE_SIZE};
pub use registry::LanguageRegistry;

use regex::Regex;

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenKind {
    #[default]
    Normal,
    Keyword,
    Type,
    String,
    Number,
    Comment,
    Operator,
    Function,
    Variable,
    Constant,
    Builtin,
}

/// A classified substring of one line.
///
/// `start` and `end` are char offsets into the line, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Token {
    /// Token covering all of `line`.
    pub fn whole_line(kind: TokenKind, line: &str) -> Self {
        Self {
            kind,
            start: 0,
            end: line.chars().count(),
            text: line.to_string(),
        }
    }
}

/// A pattern and the kind it assigns to matches.
#[derive(Debug, Clone)]
pub struct Rule {
    pub kind: TokenKind,
    pub pattern: Regex,
}

impl Rule {
    /// Compile a rule.
    pub fn new(kind: TokenKind, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            kind,
            pattern: Regex::new(pattern)?,
        })
    }
}

/// Rule table for one language.
#[derive(Debug, Clone)]
pub struct Language {
    pub name: String,
    /// Lowercased extensions with leading dot (".rs"), or exact file names
    /// ("Makefile")
    pub extensions: Vec<String>,
    /// Rules in priority order
    pub rules: Vec<Rule>,
}

impl Language {
    /// Create a language definition.
    pub fn new(name: impl Into<String>, extensions: &[&str], rules: Vec<Rule>) -> Self {
        let extensions = extensions
            .iter()
            .map(|ext| {
                if ext.starts_with('.') {
                    ext.to_lowercase()
                } else {
                    ext.to_string()
                }
            })
            .collect();

        Self {
            name: name.into(),
            extensions,
            rules,
        }
    }

    /// Build a language from `(kind, pattern)` pairs.
    ///
    /// Patterns that fail to compile are skipped.
    pub fn from_patterns(
        name: impl Into<String>,
        extensions: &[&str],
        patterns: &[(TokenKind, &str)],
    ) -> Self {
        let rules = patterns
            .iter()
            .filter_map(|(kind, pattern)| Rule::new(*kind, pattern).ok())
            .collect();
        Self::new(name, extensions, rules)
    }
}
