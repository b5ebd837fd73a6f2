//! Injection-safe HTML rendering of token streams and response text
//!
//! Every piece of input text is escaped before it is placed inside one of the
//! renderer's fixed wrappers. Class names come only from [`TokenCategory`].

use std::fmt;

use super::SyntaxTheme;
use crate::syntax::{self, TokenStream};

/// Markup built only by this module: escaped text inside fixed wrappers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeMarkup(String);

impl SafeMarkup {
    /// Escaped text with no wrapping
    pub fn escaped(text: &str) -> Self {
        Self(escape_html(text))
    }

    /// Escaped text in a single `<p>`, with no inline formatting
    pub fn escaped_paragraph(text: &str) -> Self {
        Self(format!("<p>{}</p>", escape_html(text)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SafeMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Concatenation of safe fragments is safe
impl FromIterator<SafeMarkup> for SafeMarkup {
    fn from_iter<I: IntoIterator<Item = SafeMarkup>>(iter: I) -> Self {
        Self(iter.into_iter().map(|m| m.0).collect())
    }
}

impl AsRef<str> for SafeMarkup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Escape the five HTML-significant characters
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// Render a token stream, one `<span class="syntax-…">` per token
pub fn render(tokens: &TokenStream) -> SafeMarkup {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.text.len() + 40).sum());
    for token in tokens {
        out.push_str("<span class=\"");
        out.push_str(token.category.css_class());
        out.push_str("\">");
        push_escaped(&mut out, &token.text);
        out.push_str("</span>");
    }
    SafeMarkup(out)
}

/// Tokenize and render in one step
pub fn highlight(source: &str, language_hint: &str) -> SafeMarkup {
    render(&syntax::tokenize(source, language_hint))
}

/// Wrap highlighted code in a code block container with a language header
pub fn code_block(code: &SafeMarkup, language_hint: &str) -> SafeMarkup {
    let hint = language_hint.trim();
    let hint = if hint.is_empty() { "text" } else { hint };
    SafeMarkup(format!(
        "<div class=\"code-block\" data-language=\"{}\"><div class=\"code-header\"><span class=\"code-language\">{}</span></div><pre class=\"code-content\"><code>{}</code></pre></div>",
        escape_html(hint),
        escape_html(&syntax::display_name(hint)),
        code.as_str()
    ))
}

/// Render plain response text as paragraphs with inline code spans.
///
/// Paragraphs are separated by blank lines. A backtick pair on one line
/// becomes `<span class="inline-code">`.
pub fn render_text(text: &str) -> SafeMarkup {
    let mut out = String::with_capacity(text.len() + 16);
    for paragraph in text.trim().split("\n\n") {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }
        out.push_str("<p>");
        push_inline(&mut out, paragraph);
        out.push_str("</p>");
    }
    SafeMarkup(out)
}

fn push_inline(out: &mut String, mut rest: &str) {
    while let Some(open) = rest.find('`') {
        let after = &rest[open + 1..];
        let close = after
            .find(['`', '\n'])
            .filter(|&i| i > 0 && after[i..].starts_with('`'));
        match close {
            Some(len) => {
                push_escaped(out, &rest[..open]);
                out.push_str("<span class=\"inline-code\">");
                push_escaped(out, &after[..len]);
                out.push_str("</span>");
                rest = &after[len + 1..];
            }
            None => {
                push_escaped(out, &rest[..=open]);
                rest = after;
            }
        }
    }
    push_escaped(out, rest);
}

/// Standalone HTML page embedding the theme stylesheet
pub fn render_document(body: &SafeMarkup, theme: &SyntaxTheme) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>
body {{
    background: {background};
    color: {foreground};
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
    line-height: 1.6;
    padding: 20px;
    max-width: 800px;
    margin: 0 auto;
}}

{stylesheet}
    </style>
</head>
<body>
    <div id="content">{body}</div>
</body>
</html>"#,
        title = escape_html(&theme.name),
        background = theme.background.to_css(),
        foreground = theme.foreground.to_css(),
        stylesheet = theme.stylesheet(),
        body = body.as_str(),
    )
}
