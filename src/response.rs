//! Splitting chat responses into prose and fenced code
//!
//! Fenced blocks are located with pulldown-cmark so that tildes, longer
//! fences and fences nested in lists behave like any CommonMark renderer.
//! The prose between blocks is kept verbatim (trimmed) for [`render_text`].

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};

use crate::markup::{code_block, highlight, render_text, SafeMarkup};

/// One fenced code block of a response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSegment {
    /// Correlates the segment with its on-screen container
    pub id: String,
    pub language_hint: String,
    pub raw_text: String,
}

impl CodeSegment {
    pub fn new(
        id: impl Into<String>,
        language_hint: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            language_hint: language_hint.into(),
            raw_text: raw_text.into(),
        }
    }
}

/// A response piece, in order of appearance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum ResponsePart {
    Text(String),
    Code(CodeSegment),
}

/// Split `content` into trimmed text parts and fenced code segments.
///
/// Segment ids are `code-0`, `code-1`, ... The language is the first word
/// of the fence info string, `text` when absent. A fence that is never
/// closed runs to the end of the response.
pub fn parse_response(content: &str) -> Vec<ResponsePart> {
    let mut parts = Vec::new();
    let mut text_start = 0;
    let mut open: Option<(String, String)> = None;
    let mut next_id = 0;

    for (event, range) in Parser::new(content).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                if let Some(text) = content.get(text_start..range.start) {
                    push_text(&mut parts, text);
                }
                open = Some((language_from_info(&info), String::new()));
            }
            Event::Text(text) => {
                if let Some((_, body)) = open.as_mut() {
                    body.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((language, body)) = open.take() {
                    parts.push(ResponsePart::Code(CodeSegment::new(
                        format!("code-{}", next_id),
                        language,
                        trim_code(&body),
                    )));
                    next_id += 1;
                    text_start = range.end;
                }
            }
            _ => {}
        }
    }

    if let Some(text) = content.get(text_start..) {
        push_text(&mut parts, text);
    }

    tracing::debug!(
        parts = parts.len(),
        code_segments = next_id,
        "parsed response"
    );
    parts
}

/// The code segments of a parsed response, in order
pub fn code_segments(parts: &[ResponsePart]) -> Vec<CodeSegment> {
    parts
        .iter()
        .filter_map(|part| match part {
            ResponsePart::Code(segment) => Some(segment.clone()),
            ResponsePart::Text(_) => None,
        })
        .collect()
}

/// Fully rendered response: paragraphs for text, highlighted blocks for code
pub fn render_parts(parts: &[ResponsePart]) -> SafeMarkup {
    parts
        .iter()
        .map(|part| match part {
            ResponsePart::Text(text) => render_text(text),
            ResponsePart::Code(segment) => code_block(
                &highlight(&segment.raw_text, &segment.language_hint),
                &segment.language_hint,
            ),
        })
        .collect()
}

fn push_text(parts: &mut Vec<ResponsePart>, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        parts.push(ResponsePart::Text(text.to_string()));
    }
}

fn language_from_info(info: &str) -> String {
    info.split_whitespace()
        .next()
        .unwrap_or("text")
        .to_string()
}

/// Drop leading blank lines and trailing whitespace, keeping the first
/// line's indentation
fn trim_code(body: &str) -> &str {
    let body = body.trim_end();
    match body.find(|c: char| !c.is_whitespace()) {
        Some(first) => {
            let line_start = body[..first].rfind('\n').map_or(0, |n| n + 1);
            &body[line_start..]
        }
        None => "",
    }
}
