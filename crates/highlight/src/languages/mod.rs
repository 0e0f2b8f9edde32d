//! Built-in language rule tables.
//!
//! Rules are listed in priority order: comments and strings first so that
//! keywords inside them are never highlighted.

mod data;
mod jvm;
mod scripting;
mod systems;
mod web;

use crate::{Language, TokenKind};

/// Static description of a built-in language.
#[derive(Debug, Clone, Copy)]
pub struct LanguageSpec {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub rules: &'static [(TokenKind, &'static str)],
}

impl LanguageSpec {
    /// Compile into a `Language`.
    pub fn build(&self) -> Language {
        Language::from_patterns(self.name, self.extensions, self.rules)
    }
}

const BUILTIN: &[LanguageSpec] = &[
    systems::RUST,
    systems::GO,
    systems::C,
    systems::CPP,
    systems::ZIG,
    scripting::PYTHON,
    scripting::RUBY,
    scripting::LUA,
    scripting::SHELL,
    web::JAVASCRIPT,
    web::TYPESCRIPT,
    web::JSON,
    web::HTML,
    web::CSS,
    jvm::JAVA,
    jvm::KOTLIN,
    jvm::CSHARP,
    data::YAML,
    data::TOML,
    data::INI,
    data::MARKDOWN,
    data::SQL,
    data::MAKEFILE,
    data::DOCKERFILE,
    data::DIFF,
];

/// Specs for every built-in language.
pub fn specs() -> &'static [LanguageSpec] {
    BUILTIN
}

/// Compile every built-in language.
pub fn builtin() -> Vec<Language> {
    BUILTIN.iter().map(LanguageSpec::build).collect()
}
