//! Command-line argument parsing
//!
//! Supports:
//! - Highlighting a file or stdin to HTML fragments, pages or JSON tokens
//! - Revealing a chat response on the terminal at typing speed
//! - Printing a theme stylesheet

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

/// Injection-safe syntax highlighting with progressive reveal
#[derive(Parser, Debug)]
#[command(
    name = "glint",
    version,
    about = "Injection-safe syntax highlighting with progressive reveal"
)]
pub struct CliArgs {
    /// Use this config file instead of ~/.config/glint/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Highlight source code (or a whole response) to HTML
    Highlight(HighlightArgs),
    /// Reveal a chat response character by character
    Reveal(RevealArgs),
    /// Print the CSS for a theme
    Stylesheet {
        /// Theme id (defaults to the configured theme)
        #[arg(long, value_name = "ID")]
        theme: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct HighlightArgs {
    /// Source file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Language hint (inferred from the file extension when omitted)
    #[arg(short, long, value_name = "LANG")]
    pub lang: Option<String>,

    /// Treat the input as a chat response with fenced code blocks
    #[arg(long, conflicts_with = "lang")]
    pub response: bool,

    /// Emit a complete HTML page with the theme stylesheet
    #[arg(long)]
    pub standalone: bool,

    /// Theme id for --standalone
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// Emit the token stream as JSON instead of HTML
    #[arg(long, conflicts_with_all = ["standalone", "response"])]
    pub json: bool,
}

#[derive(Args, Debug, Default)]
pub struct RevealArgs {
    /// Response file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Skip all delays
    #[arg(long)]
    pub instant: bool,

    /// Stop after revealing N characters
    #[arg(long, value_name = "N")]
    pub cancel_after: Option<usize>,

    /// Print each segment's highlighted markup once it is finalized
    #[arg(long)]
    pub markup: bool,
}

impl HighlightArgs {
    /// Resolve the language hint: explicit flag, then file extension, then
    /// the configured default
    pub fn language_hint(&self, default: &str) -> String {
        self.lang
            .clone()
            .or_else(|| self.file.as_deref().and_then(extension_hint))
            .unwrap_or_else(|| default.to_string())
    }
}

fn extension_hint(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(str::to_lowercase)
}
