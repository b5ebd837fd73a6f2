//! Syntax tokenizing module
//!
//! Classifies arbitrary, possibly malformed source text into lexical
//! categories without a grammar:
//! - Language family selection from free-form fence hints
//! - Ordered, first-match rule tables per family
//! - One shared scanning loop that never fails
//!
//! ## Architecture
//!
//! ```text
//! language hint → select_lexer → Lexer (rule table)
//! source text   → scanner::scan → TokenStream
//! ```
//!
//! ## Families
//!
//! - Python
//! - JavaScript / TypeScript
//! - Generic (everything else)

mod generic;
mod javascript;
mod languages;
mod lexer;
mod python;
pub mod rules;
mod scanner;
mod token;

pub use languages::{display_name, LanguageId};
pub use lexer::{select_lexer, tokenize, Lexer};
pub use token::{Token, TokenCategory, TokenStream, ALL_CATEGORIES};
