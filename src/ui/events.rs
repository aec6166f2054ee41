use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::time::Duration;

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    /// Terminal size changed; the next draw picks up the new area.
    Resize,
}

/// Polls the terminal for input on the calling thread.
pub struct EventHandler {
    poll_interval: Duration,
}

impl EventHandler {
    pub fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }

    /// Waits up to the poll interval for the next relevant event.
    ///
    /// Returns `Ok(None)` on timeout and for events the form ignores
    /// (mouse, focus changes).
    pub fn next(&self) -> io::Result<Option<AppEvent>> {
        if !event::poll(self.poll_interval)? {
            return Ok(None);
        }
        let mapped = match event::read()? {
            Event::Key(key) => Some(AppEvent::Key(key)),
            Event::Paste(text) => Some(AppEvent::Paste(text)),
            Event::Resize(_, _) => Some(AppEvent::Resize),
            _ => None,
        };
        Ok(mapped)
    }
}
