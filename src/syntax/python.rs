//! Python rule table

use super::rules::{Matcher, Rule};
use super::token::TokenCategory;

const STRING_PREFIXES: &[&str] = &["rb", "br", "fr", "rf", "f", "r", "b", "u", ""];

const KEYWORDS: &[&str] = &[
    "def", "class", "if", "else", "elif", "for", "while", "return", "import", "from", "as", "try",
    "except", "finally", "with", "lambda", "yield", "async", "await", "and", "or", "not", "in",
    "is", "pass", "break", "continue", "global", "nonlocal", "assert", "del", "raise",
];

const CONSTANTS: &[&str] = &["None", "True", "False", "NotImplemented", "Ellipsis"];

const TYPES: &[&str] = &[
    "int", "str", "float", "bool", "list", "dict", "tuple", "set", "type", "object", "bytes",
    "bytearray", "complex", "frozenset",
];

const BUILTINS: &[&str] = &[
    "print", "len", "range", "enumerate", "zip", "map", "filter", "sorted", "reversed", "any",
    "all", "sum", "min", "max", "abs", "round", "input", "open", "isinstance", "issubclass",
    "super", "getattr", "setattr", "hasattr", "iter", "next", "repr", "format", "id", "hash",
];

const SELF_NAMES: &[&str] = &["self", "cls"];

const MULTI_CHAR_OPERATORS: &[&str] = &[
    "**=", "//=", ">>=", "<<=", "**", "//", "<<", ">>", "==", "!=", "<=", ">=", "->", ":=", "+=",
    "-=", "*=", "/=", "%=", "&=", "|=", "^=",
];

pub const RULES: &[Rule] = &[
    Rule::new(Matcher::Whitespace, TokenCategory::Whitespace),
    Rule::new(Matcher::LineComment("#"), TokenCategory::Comment),
    Rule::new(
        Matcher::Quoted {
            prefixes: STRING_PREFIXES,
            quote: "\"\"\"",
            multiline: true,
        },
        TokenCategory::String,
    ),
    Rule::new(
        Matcher::Quoted {
            prefixes: STRING_PREFIXES,
            quote: "'''",
            multiline: true,
        },
        TokenCategory::String,
    ),
    Rule::new(
        Matcher::Quoted {
            prefixes: STRING_PREFIXES,
            quote: "\"",
            multiline: false,
        },
        TokenCategory::String,
    ),
    Rule::new(
        Matcher::Quoted {
            prefixes: STRING_PREFIXES,
            quote: "'",
            multiline: false,
        },
        TokenCategory::String,
    ),
    Rule::new(Matcher::Number, TokenCategory::Number),
    Rule::new(Matcher::Words(KEYWORDS), TokenCategory::Keyword),
    Rule::new(Matcher::Words(CONSTANTS), TokenCategory::Constant),
    Rule::new(Matcher::Words(TYPES), TokenCategory::Type),
    Rule::new(Matcher::Words(BUILTINS), TokenCategory::Builtin),
    Rule::new(Matcher::Decorator, TokenCategory::Decorator),
    Rule::new(Matcher::CallPosition, TokenCategory::Method),
    Rule::new(Matcher::Capitalized, TokenCategory::Class),
    Rule::new(Matcher::Words(SELF_NAMES), TokenCategory::Builtin),
    Rule::new(Matcher::Dunder, TokenCategory::Builtin),
    Rule::new(
        Matcher::Identifier {
            allow_dollar: false,
        },
        TokenCategory::Text,
    ),
    Rule::new(Matcher::Symbols(MULTI_CHAR_OPERATORS), TokenCategory::Operator),
    Rule::new(Matcher::Chars("+-*/%=<>!&|^~@"), TokenCategory::Operator),
    Rule::new(Matcher::Chars("[]{}(),.:;"), TokenCategory::Punctuation),
];
