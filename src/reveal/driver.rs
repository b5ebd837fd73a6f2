//! Cooperative driving loop

use std::time::Duration;

use super::{RevealEvent, RevealSession};

/// Tick `session` until it finishes, handing every event to `on_event` and
/// waiting `session.next_delay()` between ticks through `sleep`.
///
/// The sleeper is injected: the CLI passes `std::thread::sleep`, tests pass
/// a no-op. Returns the number of ticks that produced an event.
pub fn drive<S, F>(session: &mut RevealSession, mut sleep: S, mut on_event: F) -> usize
where
    S: FnMut(Duration),
    F: FnMut(RevealEvent),
{
    let mut ticks = 0;
    while let Some(event) = session.tick() {
        ticks += 1;
        on_event(event);
        if session.is_finished() {
            break;
        }
        sleep(session.next_delay());
    }
    tracing::debug!(ticks, state = ?session.state(), "reveal driven to completion");
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::CodeSegment;
    use crate::reveal::RevealState;

    #[test]
    fn test_drive_runs_to_done() {
        let mut session = RevealSession::new(vec![
            CodeSegment::new("code-0", "py", "ab"),
            CodeSegment::new("code-1", "js", "c"),
        ]);
        let mut delays = Vec::new();
        let mut events = Vec::new();
        let ticks = drive(&mut session, |d| delays.push(d), |e| events.push(e));

        // 2 reveals + finalize + 1 reveal + finalize
        assert_eq!(ticks, 5);
        assert_eq!(events.len(), 5);
        assert_eq!(session.state(), RevealState::Done);
        assert_eq!(delays.len(), 4);
        assert_eq!(delays[2], Duration::from_millis(100));
    }

    #[test]
    fn test_drive_stops_on_cancel() {
        let mut session = RevealSession::new(vec![CodeSegment::new("code-0", "py", "abcdef")]);
        let handle = session.cancel_handle();
        let mut events = Vec::new();
        drive(
            &mut session,
            |_| {},
            |e| {
                if matches!(e, RevealEvent::Revealed { ch: 'b', .. }) {
                    handle.cancel();
                }
                events.push(e);
            },
        );
        assert_eq!(events.last(), Some(&RevealEvent::Cancelled { segment: 0 }));
        assert!(!events
            .iter()
            .any(|e| matches!(e, RevealEvent::Finalized { .. })));
    }
}
