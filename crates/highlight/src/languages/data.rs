use super::LanguageSpec;
use crate::TokenKind as K;

pub(super) const YAML: LanguageSpec = LanguageSpec {
    name: "YAML",
    extensions: &[".yaml", ".yml"],
    rules: &[
        (K::Comment, r"(^|\s)#.*$"),
        (K::String, r#""(?:[^"\\]|\\.)*""#),
        (K::String, r"'(?:[^']|'')*'"),
        (K::Keyword, r"^(---|\.\.\.)\s*$"),
        (K::Variable, r"^\s*-?\s*[\w.-]+\s*:"),
        (K::Constant, r"\b(true|false|yes|no|on|off|null|True|False|Null|TRUE|FALSE|NULL)\b"),
        (K::Type, r"![\w!]+"),
        (K::Builtin, r"[&*][\w-]+"),
        (K::Number, r"-?\b[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?\b"),
        (K::Operator, r"[|>\-]"),
    ],
};

pub(super) const TOML: LanguageSpec = LanguageSpec {
    name: "TOML",
    extensions: &[".toml", "Cargo.lock"],
    rules: &[
        (K::Comment, r"#.*$"),
        (K::String, r#"""".*?""""#),
        (K::String, r"'''.*?'''"),
        (K::String, r#""(?:[^"\\]|\\.)*""#),
        (K::String, r"'[^']*'"),
        (K::Type, r"^\s*\[\[?[^\]]*\]\]?"),
        (K::Variable, r"^\s*[\w.\x22-]+\s*="),
        (K::Constant, r"\b(true|false|inf|nan)\b"),
        (K::Number, r"\b[0-9]{4}-[0-9]{2}-[0-9]{2}([T ][0-9:.]+)?(Z|[+-][0-9:]+)?"),
        (K::Number, r"[+-]?\b0[xob][0-9a-fA-F_]+\b"),
        (K::Number, r"[+-]?\b[0-9][0-9_]*(\.[0-9_]+)?([eE][+-]?[0-9_]+)?\b"),
    ],
};

pub(super) const INI: LanguageSpec = LanguageSpec {
    name: "INI",
    extensions: &[".ini", ".cfg", ".conf", ".properties", ".editorconfig", ".gitconfig"],
    rules: &[
        (K::Comment, r"^\s*[;#].*$"),
        (K::Type, r"^\s*\[[^\]]*\]"),
        (K::String, r#""(?:[^"\\]|\\.)*""#),
        (K::Variable, r"^\s*[^=:\s]+\s*[=:]"),
        (K::Constant, r"\b(true|false|yes|no|on|off)\b"),
        (K::Number, r"\b[0-9]+(\.[0-9]+)?\b"),
    ],
};

pub(super) const MARKDOWN: LanguageSpec = LanguageSpec {
    name: "Markdown",
    extensions: &[".md", ".markdown", ".mdx"],
    rules: &[
        (K::Keyword, r"^#{1,6}\s.*$"),
        (K::String, r"^\s*```.*$"),
        (K::String, r"`[^`]+`"),
        (K::Comment, r"^\s*>.*$"),
        (K::Comment, r"<!--.*?-->"),
        (K::Type, r"\*\*[^*]+\*\*"),
        (K::Type, r"__[^_]+__"),
        (K::Variable, r"\*[^*\s][^*]*\*"),
        (K::Function, r"!?\[[^\]]*\]\([^)]*\)"),
        (K::Operator, r"^\s*([-*+]|[0-9]+\.)\s"),
        (K::Operator, r"^\s*(---+|\*\*\*+)\s*$"),
    ],
};

pub(super) const SQL: LanguageSpec = LanguageSpec {
    name: "SQL",
    extensions: &[".sql"],
    rules: &[
        (K::Comment, r"--.*$"),
        (K::Comment, r"/\*.*?\*/"),
        (K::String, r"'(?:[^']|'')*'"),
        (K::Variable, r#""[^"]*""#),
        (K::Keyword, r"(?i)\b(add|all|alter|and|as|asc|begin|between|by|case|check|column|commit|constraint|create|cross|database|default|delete|desc|distinct|drop|else|end|exists|foreign|from|full|group|having|if|in|index|inner|insert|into|is|join|key|left|like|limit|not|null|offset|on|or|order|outer|primary|references|returning|right|rollback|select|set|table|then|transaction|union|unique|update|values|view|when|where|with)\b"),
        (K::Type, r"(?i)\b(bigint|bit|blob|boolean|char|date|datetime|decimal|double|float|int|integer|json|numeric|real|serial|smallint|text|time|timestamp|uuid|varchar)\b"),
        (K::Builtin, r"(?i)\b(avg|coalesce|count|lower|max|min|now|round|substr|sum|upper)\b"),
        (K::Constant, r"(?i)\b(true|false)\b"),
        (K::Number, r"\b0[xX][0-9a-fA-F]+\b"),
        (K::Number, r"\b[0-9]+(\.[0-9]+)?\b"),
        (K::Operator, r"[+\-*/%<>=!|]+"),
    ],
};

pub(super) const MAKEFILE: LanguageSpec = LanguageSpec {
    name: "Makefile",
    extensions: &[".mk", ".mak", "Makefile", "makefile", "GNUmakefile"],
    rules: &[
        (K::Comment, r"#.*$"),
        (K::Keyword, r"^\s*(include|-include|sinclude|ifeq|ifneq|ifdef|ifndef|else|endif|define|endef|export|unexport|override|vpath)\b"),
        (K::Function, r"^[\w./%-]+(\s+[\w./%-]+)*\s*::?"),
        (K::Variable, r"\$\([^)]*\)"),
        (K::Variable, r"\$\{[^}]*\}"),
        (K::Variable, r"\$[@<^?*%+]"),
        (K::Variable, r"^\s*[\w.-]+\s*(\?|\+|:{1,2})?="),
        (K::String, r#""(?:[^"\\]|\\.)*""#),
        (K::String, r"'[^']*'"),
        (K::Operator, r"[@\-]"),
    ],
};

pub(super) const DOCKERFILE: LanguageSpec = LanguageSpec {
    name: "Dockerfile",
    extensions: &[".dockerfile", "Dockerfile", "Containerfile"],
    rules: &[
        (K::Comment, r"^\s*#.*$"),
        (K::Keyword, r"(?i)^\s*(ADD|ARG|CMD|COPY|ENTRYPOINT|ENV|EXPOSE|FROM|HEALTHCHECK|LABEL|MAINTAINER|ONBUILD|RUN|SHELL|STOPSIGNAL|USER|VOLUME|WORKDIR)\b"),
        (K::Keyword, r"(?i)\bAS\b"),
        (K::String, r#""(?:[^"\\]|\\.)*""#),
        (K::String, r"'[^']*'"),
        (K::Variable, r"\$\{?\w+\}?"),
        (K::Constant, r"--[\w-]+"),
        (K::Number, r"\b[0-9]+\b"),
        (K::Operator, r"&&|\|\||[|\\=]"),
    ],
};

pub(super) const DIFF: LanguageSpec = LanguageSpec {
    name: "Diff",
    extensions: &[".diff", ".patch"],
    rules: &[
        (K::Comment, r"^(diff|index) .*$"),
        (K::Keyword, r"^(\+\+\+|---) .*$"),
        (K::Function, r"^@@.*@@"),
        (K::String, r"^\+.*$"),
        (K::Builtin, r"^-.*$"),
    ],
};
