//! Lexer selection and the `tokenize` entry point

use super::languages::LanguageId;
use super::rules::Rule;
use super::token::TokenStream;
use super::{generic, javascript, python, scanner};

/// A stateless scanner for one language family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexer {
    language: LanguageId,
}

impl Lexer {
    pub fn new(language: LanguageId) -> Self {
        Self { language }
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    /// Ordered rule table for this family
    pub fn rules(&self) -> &'static [Rule] {
        match self.language {
            LanguageId::Python => python::RULES,
            LanguageId::JavaScript => javascript::RULES,
            LanguageId::Generic => generic::RULES,
        }
    }

    /// Scan `source` into a token stream that covers it exactly
    pub fn scan(&self, source: &str) -> TokenStream {
        TokenStream::from_tokens(scanner::scan(source, self.rules()))
    }
}

/// Pick the lexer for a free-form language hint. Never fails.
pub fn select_lexer(language_hint: &str) -> Lexer {
    Lexer::new(LanguageId::from_hint(language_hint))
}

/// Tokenize `source` using the lexer selected by `language_hint`
pub fn tokenize(source: &str, language_hint: &str) -> TokenStream {
    let lexer = select_lexer(language_hint);
    let tokens = lexer.scan(source);
    tracing::trace!(
        hint = language_hint,
        language = lexer.language().display_name(),
        bytes = source.len(),
        tokens = tokens.len(),
        "tokenized"
    );
    tokens
}
