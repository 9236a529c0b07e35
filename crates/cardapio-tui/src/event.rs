//! Terminal event handling.
//!
//! Captures keyboard and resize events from the terminal and turns quiet
//! periods into ticks, so the app can drain completed requests between
//! key presses.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Terminal input events.
#[derive(Debug, Clone)]
pub enum TerminalEvent {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// No input arrived within the tick interval.
    Tick,
}

/// Waits up to `tick` for the next terminal event.
///
/// Key releases and repeats, mouse and focus events all collapse into
/// [`TerminalEvent::Tick`].
///
/// # Errors
///
/// Returns an error if polling or reading the terminal fails.
pub fn next(tick: Duration) -> std::io::Result<TerminalEvent> {
    if !event::poll(tick)? {
        return Ok(TerminalEvent::Tick);
    }
    Ok(match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => TerminalEvent::Key(key),
        Event::Resize(w, h) => TerminalEvent::Resize(w, h),
        _ => TerminalEvent::Tick,
    })
}
