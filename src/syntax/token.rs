//! Token data structures
//!
//! Defines token categories, classified tokens, and the per-source token stream.

use serde::Serialize;

/// Lexical category of a token.
///
/// A classification label only; the renderer maps each variant to a fixed
/// CSS class and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenCategory {
    Keyword,
    /// String, template and regular-expression literals
    String,
    Comment,
    Number,
    /// Literal constants (true, None, null, ...)
    Constant,
    /// Identifier naming a known type
    Type,
    /// Identifier naming a known built-in (print, console, self, `__init__`)
    Builtin,
    /// Identifier in call position (followed by `(`)
    Method,
    /// Capitalized identifier
    Class,
    /// Identifier following a `.`
    Property,
    /// Decorator or annotation (`@name`)
    Decorator,
    Operator,
    Punctuation,
    Whitespace,
    /// Plain identifiers and anything unrecognized
    Text,
}

/// Every category, in declaration order
pub const ALL_CATEGORIES: &[TokenCategory] = &[
    TokenCategory::Keyword,
    TokenCategory::String,
    TokenCategory::Comment,
    TokenCategory::Number,
    TokenCategory::Constant,
    TokenCategory::Type,
    TokenCategory::Builtin,
    TokenCategory::Method,
    TokenCategory::Class,
    TokenCategory::Property,
    TokenCategory::Decorator,
    TokenCategory::Operator,
    TokenCategory::Punctuation,
    TokenCategory::Whitespace,
    TokenCategory::Text,
];

impl TokenCategory {
    /// Short lowercase name (`"keyword"`, `"string"`, ...)
    pub fn name(self) -> &'static str {
        match self {
            TokenCategory::Keyword => "keyword",
            TokenCategory::String => "string",
            TokenCategory::Comment => "comment",
            TokenCategory::Number => "number",
            TokenCategory::Constant => "constant",
            TokenCategory::Type => "type",
            TokenCategory::Builtin => "builtin",
            TokenCategory::Method => "method",
            TokenCategory::Class => "class",
            TokenCategory::Property => "property",
            TokenCategory::Decorator => "decorator",
            TokenCategory::Operator => "operator",
            TokenCategory::Punctuation => "punctuation",
            TokenCategory::Whitespace => "whitespace",
            TokenCategory::Text => "text",
        }
    }

    /// CSS class emitted by the renderer for this category
    pub fn css_class(self) -> &'static str {
        match self {
            TokenCategory::Keyword => "syntax-keyword",
            TokenCategory::String => "syntax-string",
            TokenCategory::Comment => "syntax-comment",
            TokenCategory::Number => "syntax-number",
            TokenCategory::Constant => "syntax-constant",
            TokenCategory::Type => "syntax-type",
            TokenCategory::Builtin => "syntax-builtin",
            TokenCategory::Method => "syntax-method",
            TokenCategory::Class => "syntax-class",
            TokenCategory::Property => "syntax-property",
            TokenCategory::Decorator => "syntax-decorator",
            TokenCategory::Operator => "syntax-operator",
            TokenCategory::Punctuation => "syntax-punctuation",
            TokenCategory::Whitespace => "syntax-whitespace",
            TokenCategory::Text => "syntax-text",
        }
    }

    /// Whether tokens of this category are skipped when looking back for
    /// the previous significant token.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenCategory::Whitespace | TokenCategory::Comment)
    }
}

/// A classified, contiguous substring of source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub category: TokenCategory,
    pub text: String,
    /// Byte offset of the first byte (inclusive)
    pub start: usize,
    /// Byte offset one past the last byte (exclusive)
    pub end: usize,
}

impl Token {
    pub fn new(category: TokenCategory, text: &str, start: usize) -> Self {
        Self {
            category,
            text: text.to_string(),
            start,
            end: start + text.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Ordered tokens for one source text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub(crate) fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Concatenate every token's text; equals the scanned source
    pub fn concat_text(&self) -> String {
        let mut out = String::with_capacity(self.tokens.last().map_or(0, |t| t.end));
        for token in &self.tokens {
            out.push_str(&token.text);
        }
        out
    }

    /// Category of the token covering byte offset `offset`, if any
    pub fn category_at(&self, offset: usize) -> Option<TokenCategory> {
        let idx = self.tokens.partition_point(|t| t.end <= offset);
        self.tokens
            .get(idx)
            .filter(|t| t.start <= offset)
            .map(|t| t.category)
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
