//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use glint::response::CodeSegment;
use glint::TokenStream;

/// Remove every `<...>` tag, leaving entity-encoded text
pub fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Decode the five entities the renderer emits
pub fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Strip tags and decode entities
pub fn plain_text(markup: &str) -> String {
    unescape(&strip_tags(markup))
}

/// Every tag in `markup`, in order
pub fn tags(markup: &str) -> Vec<&str> {
    let mut tags = Vec::new();
    let mut rest = markup;
    while let Some(open) = rest.find('<') {
        let Some(len) = rest[open..].find('>') else {
            break;
        };
        tags.push(&rest[open..open + len + 1]);
        rest = &rest[open + len + 1..];
    }
    tags
}

/// Assert tokens are contiguous, non-empty and cover `source` exactly
pub fn assert_partition(tokens: &TokenStream, source: &str) {
    let mut pos = 0;
    for token in tokens {
        assert_eq!(token.start, pos, "gap or overlap before {:?}", token);
        assert!(token.end > token.start, "empty token {:?}", token);
        assert_eq!(&source[token.start..token.end], token.text);
        pos = token.end;
    }
    assert_eq!(pos, source.len());
}

/// Segments `code-0`, `code-1`, ... from `(hint, raw)` pairs
pub fn segments(items: &[(&str, &str)]) -> Vec<CodeSegment> {
    items
        .iter()
        .enumerate()
        .map(|(i, (hint, raw))| CodeSegment::new(format!("code-{}", i), *hint, *raw))
        .collect()
}
