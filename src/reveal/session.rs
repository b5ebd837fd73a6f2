//! Progressive reveal of one response
//!
//! A [`RevealSession`] exposes the raw characters of its segments one tick
//! at a time. A segment's highlighted markup is produced exactly once, in the
//! tick after its last character became visible, and never for a segment
//! that was interrupted by cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::RevealConfig;
use crate::markup::{highlight, render_text, SafeMarkup};
use crate::response::CodeSegment;

/// Shared stop flag. Clones observe the same flag, so a stop request may be
/// issued from any thread.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Created, nothing revealed yet
    Idle,
    /// Characters of `segment` are being exposed
    Revealing { segment: usize },
    /// Every character of `segment` is visible; the next tick finalizes it
    SegmentComplete { segment: usize },
    Done,
    /// Stopped while `segment` was current
    Cancelled { segment: usize },
}

impl RevealState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RevealState::Done | RevealState::Cancelled { .. })
    }

    /// Index of the segment this state refers to
    pub fn segment(&self) -> Option<usize> {
        match *self {
            RevealState::Revealing { segment }
            | RevealState::SegmentComplete { segment }
            | RevealState::Cancelled { segment } => Some(segment),
            RevealState::Idle | RevealState::Done => None,
        }
    }
}

/// Observable effect of one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealEvent {
    Revealed { segment: usize, ch: char },
    Finalized { segment: usize, markup: SafeMarkup },
    Cancelled { segment: usize },
    /// Session finished without finalizing anything in this tick
    Done,
}

/// How finished segments are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Content {
    Code,
    Text,
}

#[derive(Debug)]
pub struct RevealSession {
    segments: Vec<CodeSegment>,
    content: Content,
    state: RevealState,
    revealed_char_count: usize,
    /// Byte length of the revealed prefix of the current segment
    revealed_len: usize,
    finalized: Vec<SafeMarkup>,
    cancel: CancelHandle,
    config: RevealConfig,
    last_char: Option<char>,
    pause_pending: bool,
}

impl RevealSession {
    pub fn new(segments: Vec<CodeSegment>) -> Self {
        Self::with_content(segments, Content::Code)
    }

    /// A session for plain response text, finalized with [`render_text`]
    pub fn for_text(text: &str) -> Self {
        Self::with_content(vec![CodeSegment::new("text-0", "text", text)], Content::Text)
    }

    fn with_content(segments: Vec<CodeSegment>, content: Content) -> Self {
        tracing::debug!(segments = segments.len(), ?content, "reveal session created");
        Self {
            finalized: Vec::with_capacity(segments.len()),
            segments,
            content,
            state: RevealState::Idle,
            revealed_char_count: 0,
            revealed_len: 0,
            cancel: CancelHandle::new(),
            config: RevealConfig::default(),
            last_char: None,
            pause_pending: false,
        }
    }

    pub fn with_config(mut self, config: RevealConfig) -> Self {
        self.config = config;
        self
    }

    /// Share an existing stop flag instead of the session's own
    pub fn with_cancel_handle(mut self, cancel: CancelHandle) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn segments(&self) -> &[CodeSegment] {
        &self.segments
    }

    /// Characters of the current segment revealed so far
    pub fn revealed_char_count(&self) -> usize {
        self.revealed_char_count
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Highlighted markup of segment `index`, once it has been finalized
    pub fn finalized(&self, index: usize) -> Option<&SafeMarkup> {
        self.finalized.get(index)
    }

    /// Raw revealed prefix of the current segment
    pub fn visible_text(&self) -> &str {
        self.state
            .segment()
            .and_then(|i| self.segments.get(i))
            .map_or("", |segment| &segment.raw_text[..self.revealed_len])
    }

    /// The revealed prefix as markup. Escaped only, never highlighted, so it
    /// is well-formed at every point of the reveal.
    pub fn visible_markup(&self) -> SafeMarkup {
        let text = self.visible_text();
        match self.content {
            Content::Code => SafeMarkup::escaped(text),
            Content::Text => SafeMarkup::escaped_paragraph(text),
        }
    }

    /// Delay the driver should wait before the next tick
    pub fn next_delay(&self) -> Duration {
        if self.pause_pending {
            return self.config.segment_pause();
        }
        match self.last_char {
            Some(ch) => self.config.char_delay(ch),
            None => Duration::from_millis(self.config.tick_interval_ms),
        }
    }

    /// Advance the session by one step. No-op on a finished session.
    pub fn tick(&mut self) -> Option<RevealEvent> {
        if self.state.is_terminal() {
            return None;
        }
        self.pause_pending = false;

        if self.cancel.is_cancelled() {
            let segment = self.state.segment().unwrap_or(0);
            tracing::debug!(segment, "reveal cancelled");
            self.state = RevealState::Cancelled { segment };
            return Some(RevealEvent::Cancelled { segment });
        }

        match self.state {
            RevealState::Idle => {
                if self.segments.is_empty() {
                    self.state = RevealState::Done;
                    return Some(RevealEvent::Done);
                }
                self.state = RevealState::Revealing { segment: 0 };
                Some(self.reveal_next(0))
            }
            RevealState::Revealing { segment } => Some(self.reveal_next(segment)),
            RevealState::SegmentComplete { segment } => Some(self.finalize(segment)),
            RevealState::Done | RevealState::Cancelled { .. } => None,
        }
    }

    fn reveal_next(&mut self, segment: usize) -> RevealEvent {
        let raw = &self.segments[segment].raw_text;
        let Some(ch) = raw[self.revealed_len..].chars().next() else {
            // empty segment
            return self.finalize(segment);
        };

        self.revealed_len += ch.len_utf8();
        self.revealed_char_count += 1;
        self.last_char = Some(ch);
        if self.revealed_len == raw.len() {
            self.state = RevealState::SegmentComplete { segment };
        }
        RevealEvent::Revealed { segment, ch }
    }

    fn finalize(&mut self, segment: usize) -> RevealEvent {
        let source = &self.segments[segment];
        let markup = match self.content {
            Content::Code => highlight(&source.raw_text, &source.language_hint),
            Content::Text => render_text(&source.raw_text),
        };
        tracing::debug!(
            segment,
            id = %source.id,
            chars = self.revealed_char_count,
            "segment finalized"
        );
        self.finalized.push(markup.clone());

        let next = segment + 1;
        if next < self.segments.len() {
            self.state = RevealState::Revealing { segment: next };
            self.pause_pending = true;
        } else {
            self.state = RevealState::Done;
        }
        self.revealed_char_count = 0;
        self.revealed_len = 0;
        self.last_char = None;

        RevealEvent::Finalized { segment, markup }
    }
}
