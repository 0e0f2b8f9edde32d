use super::LanguageSpec;
use crate::TokenKind as K;

pub(super) const JAVA: LanguageSpec = LanguageSpec {
    name: "Java",
    extensions: &[".java"],
    rules: &[
        (K::Comment, r"//.*$"),
        (K::Comment, r"/\*.*?\*/"),
        (K::String, r#""(?:[^"\\]|\\.)*""#),
        (K::String, r"'(?:[^'\\]|\\.)*'"),
        (K::Function, r"@\w+"),
        (K::Keyword, r"\b(abstract|assert|break|case|catch|class|continue|default|do|else|enum|extends|final|finally|for|if|implements|import|instanceof|interface|native|new|package|permits|private|protected|public|record|return|sealed|static|strictfp|super|switch|synchronized|this|throw|throws|transient|try|var|volatile|while|yield)\b"),
        (K::Type, r"\b(boolean|byte|char|double|float|int|long|short|void|String|Object|Integer|Long|Double|Boolean|List|Map|Set|Optional)\b"),
        (K::Constant, r"\b(true|false|null)\b"),
        (K::Number, r"\b0[xX][0-9a-fA-F_]+[lL]?\b"),
        (K::Number, r"\b[0-9][0-9_]*(\.[0-9_]+)?([eE][+-]?[0-9_]+)?[lLfFdD]?\b"),
        (K::Operator, r"[+\-*/%&|^<>=!~?:]+"),
    ],
};

pub(super) const KOTLIN: LanguageSpec = LanguageSpec {
    name: "Kotlin",
    extensions: &[".kt", ".kts"],
    rules: &[
        (K::Comment, r"//.*$"),
        (K::Comment, r"/\*.*?\*/"),
        (K::String, r#"""".*?""""#),
        (K::String, r#""(?:[^"\\]|\\.)*""#),
        (K::String, r"'(?:[^'\\]|\\.)*'"),
        (K::Function, r"@\w+"),
        (K::Keyword, r"\b(abstract|as|break|by|catch|class|companion|const|constructor|continue|data|do|else|enum|finally|for|fun|if|import|in|init|inline|interface|internal|is|lateinit|object|open|operator|out|override|package|private|protected|public|reified|return|sealed|super|suspend|this|throw|try|typealias|val|var|vararg|when|where|while)\b"),
        (K::Type, r"\b(Any|Boolean|Byte|Char|Double|Float|Int|Long|Nothing|Short|String|Unit|Array|List|Map|Set|MutableList|MutableMap|MutableSet)\b"),
        (K::Builtin, r"\b(println|print|listOf|mapOf|setOf|mutableListOf|mutableMapOf|arrayOf|require|check|error|lazy|let|run|apply|also|with)\b"),
        (K::Constant, r"\b(true|false|null)\b"),
        (K::Number, r"\b0[xX][0-9a-fA-F_]+[lL]?\b"),
        (K::Number, r"\b[0-9][0-9_]*(\.[0-9_]+)?([eE][+-]?[0-9_]+)?[lLfF]?\b"),
        (K::Operator, r"[+\-*/%&|<>=!?:.]+"),
    ],
};

pub(super) const CSHARP: LanguageSpec = LanguageSpec {
    name: "C#",
    extensions: &[".cs", ".csx"],
    rules: &[
        (K::Comment, r"//.*$"),
        (K::Comment, r"/\*.*?\*/"),
        (K::Builtin, r"^\s*#\s*(if|else|elif|endif|define|undef|region|endregion|pragma|nullable)\b.*$"),
        (K::String, r#"@"(?:[^"]|"")*""#),
        (K::String, r#"\$?"(?:[^"\\]|\\.)*""#),
        (K::String, r"'(?:[^'\\]|\\.)*'"),
        (K::Function, r"\[\w+(\(.*?\))?\]"),
        (K::Keyword, r"\b(abstract|as|async|await|base|break|case|catch|checked|class|const|continue|default|delegate|do|else|enum|event|explicit|extern|finally|fixed|for|foreach|get|goto|if|implicit|in|init|interface|internal|is|lock|namespace|new|operator|out|override|params|private|protected|public|readonly|record|ref|return|sealed|set|sizeof|stackalloc|static|struct|switch|this|throw|try|typeof|unchecked|unsafe|using|var|virtual|void|volatile|when|where|while|yield)\b"),
        (K::Type, r"\b(bool|byte|char|decimal|double|dynamic|float|int|long|object|sbyte|short|string|uint|ulong|ushort|String|List|Dictionary|Task|IEnumerable)\b"),
        (K::Constant, r"\b(true|false|null)\b"),
        (K::Number, r"\b0[xX][0-9a-fA-F_]+[uUlL]*\b"),
        (K::Number, r"\b[0-9][0-9_]*(\.[0-9_]+)?([eE][+-]?[0-9_]+)?[fFdDmMuUlL]*\b"),
        (K::Operator, r"[+\-*/%&|^<>=!~?:]+"),
    ],
};
