//! glint - injection-safe syntax highlighting with progressive reveal
//!
//! This crate tokenizes source text without a grammar, renders it to escaped
//! HTML, and reveals chat responses character by character, swapping in the
//! highlighted form once each code segment is complete.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod markup;
pub mod response;
pub mod reveal;
pub mod syntax;
pub mod tracing;

// Re-export commonly used types
pub use config::GlintConfig;
pub use markup::{escape_html, highlight, render, render_text, SafeMarkup};
pub use response::{parse_response, CodeSegment, ResponsePart};
pub use reveal::{RevealController, RevealEvent, RevealSession, RevealState};
pub use syntax::{select_lexer, tokenize, Token, TokenCategory, TokenStream};
