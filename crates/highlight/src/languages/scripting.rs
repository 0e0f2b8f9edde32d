use super::LanguageSpec;
use crate::TokenKind as K;

pub(super) const PYTHON: LanguageSpec = LanguageSpec {
    name: "Python",
    extensions: &[".py", ".pyw", ".pyi"],
    rules: &[
        (K::Comment, r"#.*$"),
        (K::String, r#"[fFrRbBuU]{0,2}""".*?""""#),
        (K::String, r"[fFrRbBuU]{0,2}'''.*?'''"),
        (K::String, r#"[fFrRbBuU]{0,2}"(?:[^"\\]|\\.)*""#),
        (K::String, r"[fFrRbBuU]{0,2}'(?:[^'\\]|\\.)*'"),
        (K::Keyword, r"\b(and|as|assert|async|await|break|case|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|match|nonlocal|not|or|pass|raise|return|try|while|with|yield)\b"),
        (K::Builtin, r"\b(abs|all|any|ascii|bin|bool|breakpoint|bytearray|bytes|callable|chr|classmethod|compile|complex|delattr|dict|dir|divmod|enumerate|eval|exec|filter|float|format|frozenset|getattr|globals|hasattr|hash|help|hex|id|input|int|isinstance|issubclass|iter|len|list|locals|map|max|memoryview|min|next|object|oct|open|ord|pow|print|property|range|repr|reversed|round|set|setattr|slice|sorted|staticmethod|str|sum|super|tuple|type|vars|zip)\b"),
        (K::Constant, r"\b(True|False|None|Ellipsis|NotImplemented)\b"),
        (K::Function, r"@\w+(\.\w+)*"),
        (K::Variable, r"\b(self|cls)\b"),
        (K::Number, r"\b0[xX][0-9a-fA-F_]+\b"),
        (K::Number, r"\b0[oO][0-7_]+\b"),
        (K::Number, r"\b0[bB][01_]+\b"),
        (K::Number, r"\b[0-9][0-9_]*(\.[0-9_]+)?([eE][+-]?[0-9_]+)?[jJ]?\b"),
        (K::Operator, r"[+\-*/%&|^<>=!:~]+"),
    ],
};

pub(super) const RUBY: LanguageSpec = LanguageSpec {
    name: "Ruby",
    extensions: &[".rb", ".rake", ".gemspec", ".ru", "Rakefile", "Gemfile"],
    rules: &[
        (K::Comment, r"#.*$"),
        (K::String, r#""(?:[^"\\]|\\.)*""#),
        (K::String, r"'(?:[^'\\]|\\.)*'"),
        (K::Constant, r":[a-zA-Z_]\w*[?!]?"),
        (K::Keyword, r"\b(BEGIN|END|alias|and|begin|break|case|class|def|defined\?|do|else|elsif|end|ensure|for|if|in|module|next|not|or|redo|rescue|retry|return|super|then|undef|unless|until|when|while|yield)\b"),
        (K::Builtin, r"\b(attr_accessor|attr_reader|attr_writer|include|extend|require|require_relative|puts|print|p|raise|lambda|proc|private|protected|public)\b"),
        (K::Constant, r"\b(true|false|nil|self|__FILE__|__LINE__)\b"),
        (K::Variable, r"@@?\w+"),
        (K::Variable, r"\$\w+"),
        (K::Type, r"\b[A-Z]\w*\b"),
        (K::Number, r"\b0[xX][0-9a-fA-F_]+\b"),
        (K::Number, r"\b[0-9][0-9_]*(\.[0-9_]+)?([eE][+-]?[0-9_]+)?\b"),
        (K::Operator, r"[+\-*/%&|^<>=!~?:]+"),
    ],
};

pub(super) const LUA: LanguageSpec = LanguageSpec {
    name: "Lua",
    extensions: &[".lua"],
    rules: &[
        (K::Comment, r"--\[\[.*?\]\]"),
        (K::Comment, r"--.*$"),
        (K::String, r"\[\[.*?\]\]"),
        (K::String, r#""(?:[^"\\]|\\.)*""#),
        (K::String, r"'(?:[^'\\]|\\.)*'"),
        (K::Keyword, r"\b(and|break|do|else|elseif|end|for|function|goto|if|in|local|not|or|repeat|return|then|until|while)\b"),
        (K::Builtin, r"\b(assert|collectgarbage|dofile|error|getmetatable|ipairs|load|loadfile|next|pairs|pcall|print|rawequal|rawget|rawlen|rawset|require|select|setmetatable|tonumber|tostring|type|xpcall|string|table|math|io|os|coroutine)\b"),
        (K::Constant, r"\b(true|false|nil)\b"),
        (K::Number, r"\b0[xX][0-9a-fA-F]+\b"),
        (K::Number, r"\b[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?\b"),
        (K::Operator, r"[+\-*/%^#<>=~:.]+"),
    ],
};

pub(super) const SHELL: LanguageSpec = LanguageSpec {
    name: "Shell",
    extensions: &[".sh", ".bash", ".zsh", ".fish", ".bashrc", ".zshrc", ".profile"],
    rules: &[
        (K::Comment, r"(^|\s)#.*$"),
        (K::String, r#""(?:[^"\\]|\\.)*""#),
        (K::String, r"'[^']*'"),
        (K::Keyword, r"\b(if|then|else|elif|fi|for|while|until|do|done|case|esac|in|function|select|time|coproc)\b"),
        (K::Builtin, r"\b(alias|bg|bind|break|builtin|cd|command|continue|declare|echo|eval|exec|exit|export|false|fg|getopts|hash|jobs|kill|let|local|printf|pwd|read|readonly|return|set|shift|source|test|trap|true|type|ulimit|umask|unalias|unset|wait)\b"),
        (K::Variable, r"\$\{?[a-zA-Z_][a-zA-Z0-9_]*\}?"),
        (K::Variable, r"\$[0-9@#?$!*-]"),
        (K::Number, r"\b[0-9]+\b"),
        (K::Operator, r"[|&;<>()]+"),
    ],
};
