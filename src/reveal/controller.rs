//! Single-active-session ownership

use std::time::Duration;

use super::{CancelHandle, RevealConfig, RevealEvent, RevealSession};
use crate::response::CodeSegment;

/// Owns at most one running session. Beginning a new response supersedes
/// the previous one.
#[derive(Debug, Default)]
pub struct RevealController {
    config: RevealConfig,
    active: Option<RevealSession>,
}

impl RevealController {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    /// Start revealing code segments, cancelling any running session
    pub fn begin(&mut self, segments: Vec<CodeSegment>) -> CancelHandle {
        self.start(RevealSession::new(segments))
    }

    /// Start revealing plain text, cancelling any running session
    pub fn begin_text(&mut self, text: &str) -> CancelHandle {
        self.start(RevealSession::for_text(text))
    }

    fn start(&mut self, session: RevealSession) -> CancelHandle {
        if let Some(previous) = self.active.take() {
            if !previous.is_finished() {
                tracing::debug!(state = ?previous.state(), "superseding running reveal");
                previous.cancel();
            }
        }
        let session = session.with_config(self.config);
        let handle = session.cancel_handle();
        self.active = Some(session);
        handle
    }

    /// Tick the active session. The session is dropped once it finishes.
    pub fn tick(&mut self) -> Option<RevealEvent> {
        let session = self.active.as_mut()?;
        let event = session.tick();
        if session.is_finished() {
            self.active = None;
        }
        event
    }

    pub fn cancel(&self) {
        if let Some(session) = &self.active {
            session.cancel();
        }
    }

    pub fn active(&self) -> Option<&RevealSession> {
        self.active.as_ref()
    }

    pub fn next_delay(&self) -> Option<Duration> {
        self.active.as_ref().map(RevealSession::next_delay)
    }
}
