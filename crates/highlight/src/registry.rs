//! Extension-keyed table of language definitions.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::languages;
use crate::Language;

/// Registry mapping file extensions and file names to languages.
///
/// Built once at startup and passed by reference to whoever needs to pick a
/// language for a file.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    /// Registered languages in registration order
    languages: Vec<Arc<Language>>,
    /// ".ext" (lowercased) -> language
    by_extension: HashMap<String, Arc<Language>>,
    /// Exact file name ("Makefile") -> language
    by_file_name: HashMap<String, Arc<Language>>,
}

impl LanguageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in language.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for language in languages::builtin() {
            registry.register(language);
        }
        registry
    }

    /// Register a language under each of its extensions and file names.
    ///
    /// A later registration for the same key replaces the earlier one.
    pub fn register(&mut self, language: Language) -> Arc<Language> {
        let language = Arc::new(language);
        for key in &language.extensions {
            if key.starts_with('.') {
                self.by_extension.insert(key.clone(), Arc::clone(&language));
            } else {
                self.by_file_name.insert(key.clone(), Arc::clone(&language));
            }
        }
        self.languages.push(Arc::clone(&language));
        language
    }

    /// Detect language from a file name or path.
    ///
    /// An exact file name match wins; otherwise the text after the last dot
    /// is looked up case-insensitively.
    pub fn detect_language(&self, filename: &str) -> Option<Arc<Language>> {
        let name = Path::new(filename)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(filename);

        if let Some(language) = self.by_file_name.get(name) {
            return Some(Arc::clone(language));
        }

        let dot = name.rfind('.')?;
        let ext = name[dot..].to_lowercase();
        self.by_extension.get(&ext).cloned()
    }

    /// Find a language by its name (case-insensitive).
    pub fn by_name(&self, name: &str) -> Option<Arc<Language>> {
        self.languages
            .iter()
            .rev()
            .find(|lang| lang.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    /// All registered languages.
    pub fn languages(&self) -> &[Arc<Language>] {
        &self.languages
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
