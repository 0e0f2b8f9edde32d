use super::LanguageSpec;
use crate::TokenKind as K;

const JS_KEYWORDS: &str = r"\b(async|await|break|case|catch|class|const|continue|debugger|default|delete|do|else|export|extends|finally|for|from|function|get|if|import|in|instanceof|let|new|of|return|set|static|super|switch|this|throw|try|typeof|var|void|while|with|yield)\b";
const JS_BUILTINS: &str = r"\b(console|window|document|Math|JSON|Object|Array|String|Number|Boolean|Promise|Map|Set|Symbol|Error|RegExp|Date|parseInt|parseFloat|require|module|exports)\b";
const JS_OPERATORS: &str = r"[+\-*/%&|^<>=!~?:]+";

pub(super) const JAVASCRIPT: LanguageSpec = LanguageSpec {
    name: "JavaScript",
    extensions: &[".js", ".mjs", ".cjs", ".jsx"],
    rules: &[
        (K::Comment, r"//.*$"),
        (K::Comment, r"/\*.*?\*/"),
        (K::String, r"`(?:[^`\\]|\\.)*`"),
        (K::String, r#""(?:[^"\\]|\\.)*""#),
        (K::String, r"'(?:[^'\\]|\\.)*'"),
        (K::Keyword, JS_KEYWORDS),
        (K::Builtin, JS_BUILTINS),
        (K::Constant, r"\b(true|false|null|undefined|NaN|Infinity)\b"),
        (K::Function, r"\b[a-zA-Z_$][\w$]*\s*\("),
        (K::Number, r"\b0[xX][0-9a-fA-F_]+n?\b"),
        (K::Number, r"\b[0-9][0-9_]*(\.[0-9_]+)?([eE][+-]?[0-9_]+)?n?\b"),
        (K::Operator, JS_OPERATORS),
    ],
};

pub(super) const TYPESCRIPT: LanguageSpec = LanguageSpec {
    name: "TypeScript",
    extensions: &[".ts", ".tsx", ".mts", ".cts"],
    rules: &[
        (K::Comment, r"//.*$"),
        (K::Comment, r"/\*.*?\*/"),
        (K::String, r"`(?:[^`\\]|\\.)*`"),
        (K::String, r#""(?:[^"\\]|\\.)*""#),
        (K::String, r"'(?:[^'\\]|\\.)*'"),
        (K::Keyword, r"\b(abstract|as|declare|enum|implements|interface|is|keyof|namespace|private|protected|public|readonly|satisfies|type)\b"),
        (K::Keyword, JS_KEYWORDS),
        (K::Type, r"\b(any|bigint|boolean|never|number|object|string|symbol|unknown|void)\b"),
        (K::Builtin, JS_BUILTINS),
        (K::Constant, r"\b(true|false|null|undefined|NaN|Infinity)\b"),
        (K::Function, r"@\w+"),
        (K::Number, r"\b0[xX][0-9a-fA-F_]+n?\b"),
        (K::Number, r"\b[0-9][0-9_]*(\.[0-9_]+)?([eE][+-]?[0-9_]+)?n?\b"),
        (K::Operator, JS_OPERATORS),
    ],
};

pub(super) const JSON: LanguageSpec = LanguageSpec {
    name: "JSON",
    extensions: &[".json", ".jsonc", ".json5"],
    rules: &[
        (K::Variable, r#""(?:[^"\\]|\\.)*"\s*:"#),
        (K::String, r#""(?:[^"\\]|\\.)*""#),
        (K::Constant, r"\b(true|false|null)\b"),
        (K::Number, r"-?\b[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?\b"),
    ],
};

pub(super) const HTML: LanguageSpec = LanguageSpec {
    name: "HTML",
    extensions: &[".html", ".htm", ".xhtml", ".xml", ".svg"],
    rules: &[
        (K::Comment, r"<!--.*?-->"),
        (K::Keyword, r"<!DOCTYPE[^>]*>"),
        (K::String, r#""[^"]*""#),
        (K::String, r"'[^']*'"),
        (K::Keyword, r"</?[a-zA-Z][\w:-]*"),
        (K::Keyword, r"/?>"),
        (K::Variable, r"\b[a-zA-Z_:][\w:.-]*="),
        (K::Constant, r"&[a-zA-Z0-9#]+;"),
    ],
};

pub(super) const CSS: LanguageSpec = LanguageSpec {
    name: "CSS",
    extensions: &[".css", ".scss", ".sass", ".less"],
    rules: &[
        (K::Comment, r"/\*.*?\*/"),
        (K::Comment, r"//.*$"),
        (K::String, r#""(?:[^"\\]|\\.)*""#),
        (K::String, r"'(?:[^'\\]|\\.)*'"),
        (K::Keyword, r"@[a-zA-Z-]+"),
        (K::Constant, r"#[0-9a-fA-F]{3,8}\b"),
        (K::Variable, r"(--|\$)[a-zA-Z_][\w-]*"),
        (K::Function, r"\b[a-zA-Z-]+\("),
        (K::Variable, r"\b[a-zA-Z-]+\s*:"),
        (K::Type, r"[.#][a-zA-Z_][\w-]*"),
        (K::Builtin, r":{1,2}[a-zA-Z-]+"),
        (K::Constant, r"!important\b"),
        (K::Number, r"-?\b[0-9]+(\.[0-9]+)?(px|em|rem|%|vh|vw|pt|s|ms|deg|fr)?"),
        (K::Operator, r"[>+~*=]"),
    ],
};
