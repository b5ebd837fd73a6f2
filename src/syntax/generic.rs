//! Generic rule table
//!
//! A reduced rule set covering keywords, strings, numbers and comments common
//! to C-like, scripting and query languages. Used for every unrecognized hint.

use super::rules::{Matcher, Rule};
use super::token::TokenCategory;

const KEYWORDS: &[&str] = &[
    "if", "else", "elif", "for", "while", "do", "loop", "return", "function", "func", "fn", "def",
    "class", "struct", "enum", "trait", "impl", "interface", "import", "export", "from", "as",
    "use", "mod", "try", "catch", "except", "finally", "throw", "throws", "new", "this", "self",
    "super", "var", "let", "const", "mut", "pub", "public", "private", "protected", "static",
    "final", "abstract", "extends", "implements", "namespace", "using", "include", "package",
    "switch", "case", "match", "break", "continue", "default", "in", "where", "async", "await",
    "yield", "go", "defer", "select",
];

const CONSTANTS: &[&str] = &[
    "true", "false", "null", "nil", "undefined", "True", "False", "None", "NULL", "YES", "NO",
];

const TYPES: &[&str] = &[
    "int", "float", "double", "char", "string", "bool", "boolean", "void", "object", "array",
    "list", "dict", "map", "set", "uint", "long", "short", "byte", "i8", "i16", "i32", "i64",
    "u8", "u16", "u32", "u64", "usize", "isize", "f32", "f64", "str", "String",
];

const MULTI_CHAR_OPERATORS: &[&str] = &[
    "==", "!=", "<=", ">=", "&&", "||", "::", "->", "=>", "++", "+=", "-=", "*=", "/=", "<<",
    ">>",
];

pub const RULES: &[Rule] = &[
    Rule::new(Matcher::Whitespace, TokenCategory::Whitespace),
    Rule::new(
        Matcher::BlockComment {
            open: "/*",
            close: "*/",
        },
        TokenCategory::Comment,
    ),
    Rule::new(Matcher::LineComment("//"), TokenCategory::Comment),
    Rule::new(Matcher::LineComment("#"), TokenCategory::Comment),
    Rule::new(Matcher::LineComment("--"), TokenCategory::Comment),
    Rule::new(
        Matcher::Quoted {
            prefixes: &[""],
            quote: "`",
            multiline: true,
        },
        TokenCategory::String,
    ),
    Rule::new(
        Matcher::Quoted {
            prefixes: &[""],
            quote: "\"",
            multiline: false,
        },
        TokenCategory::String,
    ),
    Rule::new(
        Matcher::Quoted {
            prefixes: &[""],
            quote: "'",
            multiline: false,
        },
        TokenCategory::String,
    ),
    Rule::new(Matcher::Number, TokenCategory::Number),
    Rule::new(Matcher::Property, TokenCategory::Property),
    Rule::new(Matcher::Words(KEYWORDS), TokenCategory::Keyword),
    Rule::new(Matcher::Words(CONSTANTS), TokenCategory::Constant),
    Rule::new(Matcher::Words(TYPES), TokenCategory::Type),
    Rule::new(Matcher::Decorator, TokenCategory::Decorator),
    Rule::new(Matcher::CallPosition, TokenCategory::Method),
    Rule::new(Matcher::Capitalized, TokenCategory::Class),
    Rule::new(Matcher::Identifier { allow_dollar: true }, TokenCategory::Text),
    Rule::new(Matcher::Symbols(MULTI_CHAR_OPERATORS), TokenCategory::Operator),
    Rule::new(Matcher::Chars("+-*/%=<>!&|^~?:"), TokenCategory::Operator),
    Rule::new(Matcher::Chars("[]{}(),;."), TokenCategory::Punctuation),
];
