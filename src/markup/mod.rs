//! Safe markup module
//!
//! Turns token streams and response text into escaped HTML, and themes the
//! resulting classes with YAML-defined colors.

mod renderer;
pub mod theme;

pub use renderer::{
    code_block, escape_html, highlight, render, render_document, render_text, SafeMarkup,
};
pub use theme::{load_theme, Color, SyntaxTheme};
