use super::LanguageSpec;
use crate::TokenKind as K;

const C_OPERATORS: &str = r"[+\-*/%&|^<>=!~?:]+";
const PREPROCESSOR: &str =
    r"^\s*#\s*(include|define|undef|ifdef|ifndef|if|else|elif|endif|error|pragma|line)\b.*$";

pub(super) const RUST: LanguageSpec = LanguageSpec {
    name: "Rust",
    extensions: &[".rs"],
    rules: &[
        (K::Comment, r"//.*$"),
        (K::Comment, r"/\*.*?\*/"),
        (K::String, r##"r#*"[^"]*"#*"##),
        (K::String, r#""(?:[^"\\]|\\.)*""#),
        (K::String, r"b?'(?:[^'\\]|\\.)'"),
        (K::Keyword, r"\b(as|async|await|break|const|continue|crate|dyn|else|enum|extern|fn|for|if|impl|in|let|loop|match|mod|move|mut|pub|ref|return|self|Self|static|struct|super|trait|type|unsafe|use|where|while)\b"),
        (K::Type, r"\b(bool|char|f32|f64|i8|i16|i32|i64|i128|isize|str|u8|u16|u32|u64|u128|usize|String|Vec|Option|Result|Box|Rc|Arc|Cell|RefCell|HashMap|HashSet|BTreeMap|BTreeSet)\b"),
        (K::Constant, r"\b(true|false|None|Some|Ok|Err)\b"),
        (K::Builtin, r"\b\w+!"),
        (K::Function, r"#!?\[[^\]]*\]"),
        (K::Variable, r"'\w+"),
        (K::Number, r"\b0[xX][0-9a-fA-F_]+\b"),
        (K::Number, r"\b0[oO][0-7_]+\b"),
        (K::Number, r"\b0[bB][01_]+\b"),
        (K::Number, r"\b[0-9][0-9_]*(\.[0-9_]+)?([eE][+-]?[0-9_]+)?(_?[iu](8|16|32|64|128|size)|_?f(32|64))?\b"),
        (K::Operator, r"[+\-*/%&|^<>=!?:@]+"),
    ],
};

pub(super) const GO: LanguageSpec = LanguageSpec {
    name: "Go",
    extensions: &[".go"],
    rules: &[
        (K::Comment, r"//.*$"),
        (K::Comment, r"/\*.*?\*/"),
        (K::String, r"`[^`]*`"),
        (K::String, r#""(?:[^"\\]|\\.)*""#),
        (K::String, r"'(?:[^'\\]|\\.)*'"),
        (K::Keyword, r"\b(break|case|chan|const|continue|default|defer|else|fallthrough|for|func|go|goto|if|import|interface|map|package|range|return|select|struct|switch|type|var)\b"),
        (K::Type, r"\b(bool|byte|complex64|complex128|error|float32|float64|int|int8|int16|int32|int64|rune|string|uint|uint8|uint16|uint32|uint64|uintptr|any)\b"),
        (K::Builtin, r"\b(append|cap|clear|close|complex|copy|delete|imag|len|make|max|min|new|panic|print|println|real|recover)\b"),
        (K::Constant, r"\b(true|false|nil|iota)\b"),
        (K::Number, r"\b0[xX][0-9a-fA-F_]+\b"),
        (K::Number, r"\b0[oO][0-7_]+\b"),
        (K::Number, r"\b0[bB][01_]+\b"),
        (K::Number, r"\b[0-9][0-9_]*(\.[0-9_]+)?([eE][+-]?[0-9_]+)?\b"),
        (K::Operator, r"[+\-*/%&|^<>=!:]+"),
    ],
};

pub(super) const C: LanguageSpec = LanguageSpec {
    name: "C",
    extensions: &[".c", ".h"],
    rules: &[
        (K::Comment, r"//.*$"),
        (K::Comment, r"/\*.*?\*/"),
        (K::Builtin, PREPROCESSOR),
        (K::String, r#""(?:[^"\\]|\\.)*""#),
        (K::String, r"'(?:[^'\\]|\\.)*'"),
        (K::Keyword, r"\b(auto|break|case|const|continue|default|do|else|enum|extern|for|goto|if|inline|register|restrict|return|sizeof|static|struct|switch|typedef|union|volatile|while|_Alignas|_Alignof|_Atomic|_Generic|_Noreturn|_Static_assert|_Thread_local)\b"),
        (K::Type, r"\b(char|double|float|int|long|short|signed|unsigned|void|_Bool|_Complex|size_t|ptrdiff_t|intptr_t|uintptr_t|int8_t|int16_t|int32_t|int64_t|uint8_t|uint16_t|uint32_t|uint64_t|FILE)\b"),
        (K::Constant, r"\b(NULL|true|false|EOF)\b"),
        (K::Number, r"\b0[xX][0-9a-fA-F]+[uUlL]*\b"),
        (K::Number, r"\b[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?[uUlLfF]*\b"),
        (K::Operator, C_OPERATORS),
    ],
};

pub(super) const CPP: LanguageSpec = LanguageSpec {
    name: "C++",
    extensions: &[".cpp", ".cc", ".cxx", ".hpp", ".hh", ".hxx"],
    rules: &[
        (K::Comment, r"//.*$"),
        (K::Comment, r"/\*.*?\*/"),
        (K::Builtin, PREPROCESSOR),
        (K::String, r#"R"[^(]*\([^)]*\)[^"]*""#),
        (K::String, r#""(?:[^"\\]|\\.)*""#),
        (K::String, r"'(?:[^'\\]|\\.)*'"),
        (K::Keyword, r"\b(alignas|alignof|asm|auto|break|case|catch|class|concept|const|consteval|constexpr|constinit|const_cast|continue|co_await|co_return|co_yield|decltype|default|delete|do|dynamic_cast|else|enum|explicit|export|extern|for|friend|goto|if|inline|mutable|namespace|new|noexcept|operator|private|protected|public|register|reinterpret_cast|requires|return|sizeof|static|static_assert|static_cast|struct|switch|template|this|thread_local|throw|try|typedef|typeid|typename|union|using|virtual|volatile|while)\b"),
        (K::Type, r"\b(bool|char|char8_t|char16_t|char32_t|double|float|int|long|short|signed|unsigned|void|wchar_t|string|vector|map|set|unordered_map|unordered_set|list|deque|queue|stack|pair|tuple|array|unique_ptr|shared_ptr|weak_ptr|optional|variant|any|span|string_view|size_t)\b"),
        (K::Constant, r"\b(true|false|nullptr|NULL)\b"),
        (K::Number, r"\b0[xX][0-9a-fA-F']+[uUlL]*\b"),
        (K::Number, r"\b0[bB][01']+[uUlL]*\b"),
        (K::Number, r"\b[0-9][0-9']*(\.[0-9']+)?([eE][+-]?[0-9']+)?[uUlLfF]*\b"),
        (K::Operator, C_OPERATORS),
    ],
};

pub(super) const ZIG: LanguageSpec = LanguageSpec {
    name: "Zig",
    extensions: &[".zig"],
    rules: &[
        (K::Comment, r"//.*$"),
        (K::String, r"\\\\.*$"),
        (K::String, r#""(?:[^"\\]|\\.)*""#),
        (K::String, r"'(?:[^'\\]|\\.)*'"),
        (K::Builtin, r"@\w+"),
        (K::Keyword, r"\b(addrspace|align|allowzero|and|anyframe|asm|async|await|break|callconv|catch|comptime|const|continue|defer|else|enum|errdefer|error|export|extern|fn|for|if|inline|linksection|noalias|noinline|nosuspend|opaque|or|orelse|packed|pub|resume|return|struct|suspend|switch|test|threadlocal|try|union|unreachable|usingnamespace|var|volatile|while)\b"),
        (K::Type, r"\b(bool|void|noreturn|type|anyerror|anytype|anyopaque|comptime_int|comptime_float|isize|usize|[iu][0-9]+|f16|f32|f64|f80|f128|c_int|c_uint|c_long|c_ulong|c_char)\b"),
        (K::Constant, r"\b(true|false|null|undefined)\b"),
        (K::Number, r"\b0[xX][0-9a-fA-F_]+\b"),
        (K::Number, r"\b[0-9][0-9_]*(\.[0-9_]+)?([eE][+-]?[0-9_]+)?\b"),
        (K::Operator, r"[+\-*/%&|^<>=!~?:.]+"),
    ],
};
