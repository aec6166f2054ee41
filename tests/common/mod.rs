//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use medsus_profile::profile::ActiveTab;
use medsus_profile::submission::{
    acknowledgment, SectionPayload, SubmissionError, SubmissionReceipt, SubmissionSink,
};
use medsus_profile::ui::app::App;
use medsus_profile::ui::input::handle_key;
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// Payloads received by a [`RecordingSink`], shared with the test.
pub type SubmissionLog = Rc<RefCell<Vec<SectionPayload>>>;

/// Sink that records every payload and acknowledges it.
pub struct RecordingSink {
    log: SubmissionLog,
}

impl SubmissionSink for RecordingSink {
    fn submit(&mut self, payload: &SectionPayload) -> Result<SubmissionReceipt, SubmissionError> {
        self.log.borrow_mut().push(payload.clone());
        Ok(SubmissionReceipt {
            id: Uuid::new_v4(),
            section: payload.section(),
            message: acknowledgment(payload.section()),
        })
    }
}

/// Sink that refuses every submission with a fixed reason.
pub struct RejectingSink {
    reason: String,
}

impl SubmissionSink for RejectingSink {
    fn submit(&mut self, payload: &SectionPayload) -> Result<SubmissionReceipt, SubmissionError> {
        Err(SubmissionError::Rejected {
            section: payload.section(),
            reason: self.reason.clone(),
        })
    }
}

/// App whose sink rejects with `reason`.
pub fn rejecting_app(tab: ActiveTab, reason: &str) -> App {
    let sink = RejectingSink {
        reason: reason.to_string(),
    };
    App::new(tab, Box::new(sink))
}

/// App wired to a recording sink.
pub fn recording_app(tab: ActiveTab) -> (App, SubmissionLog) {
    let log: SubmissionLog = Rc::new(RefCell::new(Vec::new()));
    let sink = RecordingSink {
        log: Rc::clone(&log),
    };
    (App::new(tab, Box::new(sink)), log)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

/// Types `text` into the focused field, one key press per character.
pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_key(app, key(KeyCode::Char(ch)));
    }
}

pub fn press(app: &mut App, code: KeyCode, times: usize) {
    for _ in 0..times {
        handle_key(app, key(code));
    }
}
