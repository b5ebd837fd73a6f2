//! JavaScript / TypeScript rule table

use super::rules::{Matcher, Rule};
use super::token::TokenCategory;

const KEYWORDS: &[&str] = &[
    "function", "const", "let", "var", "if", "else", "for", "while", "return", "class", "extends",
    "import", "export", "from", "default", "async", "await", "try", "catch", "finally", "throw",
    "new", "this", "super", "typeof", "instanceof", "in", "of", "break", "continue", "switch",
    "case", "do", "with", "yield", "delete", "void", "static", "debugger", "interface", "enum",
    "implements", "readonly",
];

const CONSTANTS: &[&str] = &["true", "false", "null", "undefined", "NaN", "Infinity"];

/// TypeScript primitive type names
const TYPES: &[&str] = &[
    "string", "number", "boolean", "any", "unknown", "never", "object", "bigint", "symbol",
];

const BUILTINS: &[&str] = &[
    "Array", "Object", "String", "Number", "Boolean", "Date", "Math", "JSON", "Promise", "RegExp",
    "Error", "Map", "Set", "Symbol", "BigInt", "Reflect", "Proxy", "console", "window",
    "document", "globalThis",
];

const MULTI_CHAR_OPERATORS: &[&str] = &[
    "===", "!==", "**=", "...", "<<=", ">>=", "&&=", "||=", "??=", "=>", "**", "++", "--", "&&",
    "||", "??", "?.", "==", "!=", "<=", ">=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
    "<<", ">>",
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
    Rule::new(Matcher::RegexLiteral, TokenCategory::String),
    Rule::new(Matcher::Number, TokenCategory::Number),
    Rule::new(Matcher::Property, TokenCategory::Property),
    Rule::new(Matcher::Words(KEYWORDS), TokenCategory::Keyword),
    Rule::new(Matcher::Words(CONSTANTS), TokenCategory::Constant),
    Rule::new(Matcher::Words(TYPES), TokenCategory::Type),
    Rule::new(Matcher::Words(BUILTINS), TokenCategory::Builtin),
    Rule::new(Matcher::Decorator, TokenCategory::Decorator),
    Rule::new(Matcher::CallPosition, TokenCategory::Method),
    Rule::new(Matcher::Capitalized, TokenCategory::Class),
    Rule::new(Matcher::Identifier { allow_dollar: true }, TokenCategory::Text),
    Rule::new(Matcher::Symbols(MULTI_CHAR_OPERATORS), TokenCategory::Operator),
    Rule::new(Matcher::Chars("+-*/%=<>!&|^~?:"), TokenCategory::Operator),
    Rule::new(Matcher::Chars("[]{}(),;."), TokenCategory::Punctuation),
];
