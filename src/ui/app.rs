use crate::profile::ActiveTab;
use crate::submission::SubmissionSink;
use crate::ui::ack::{AckDialogState, AckIntent, AckReducer};
use crate::ui::editors;
use crate::ui::mvi::Reducer;
use crate::ui::profile::{ProfileIntent, ProfileReducer, ProfileState};
use crossterm::event::{KeyCode, KeyEvent};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Profile form controller. Sole owner of mutable state.
pub struct App {
    should_quit: bool,
    /// Tab, focus and the three records (MVI pattern).
    profile: ProfileState,
    /// Submission acknowledgment dialog (MVI pattern).
    ack_dialog: AckDialogState,
    /// Where submitted sections go (resource, managed outside MVI).
    sink: Box<dyn SubmissionSink>,
}

impl App {
    pub fn new(initial_tab: ActiveTab, sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            should_quit: false,
            profile: ProfileState::with_tab(initial_tab),
            ack_dialog: AckDialogState::default(),
            sink,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.profile.active_tab
    }

    pub fn ack_dialog(&self) -> &AckDialogState {
        &self.ack_dialog
    }

    pub fn dispatch_profile(&mut self, intent: ProfileIntent) {
        dispatch_mvi!(self, profile, ProfileReducer, intent);
    }

    pub fn dispatch_ack(&mut self, intent: AckIntent) {
        dispatch_mvi!(self, ack_dialog, AckReducer, intent);
    }

    pub fn select_tab(&mut self, tab: ActiveTab) {
        self.dispatch_profile(ProfileIntent::SelectTab(tab));
    }

    /// Hands one section's record to the sink and shows the outcome.
    ///
    /// Only the named section is serialized; the other records are not read.
    pub fn submit(&mut self, section: ActiveTab) {
        let payload = self.profile.payload(section);
        let intent = match self.sink.submit(&payload) {
            Ok(receipt) => {
                tracing::debug!(
                    submission_id = %receipt.id,
                    section = section.as_str(),
                    "Submission acknowledged"
                );
                AckIntent::Saved {
                    section,
                    message: receipt.message,
                }
            }
            Err(err) => {
                tracing::error!(section = section.as_str(), "Submission failed: {}", err);
                AckIntent::Failed {
                    section,
                    error: err.to_string(),
                }
            }
        };
        self.dispatch_ack(intent);
    }

    /// Submits whichever tab is displayed.
    pub fn submit_active(&mut self) {
        self.submit(self.profile.active_tab);
    }

    pub fn dismiss_ack(&mut self) {
        if let Some(section) = self.ack_dialog.section() {
            tracing::debug!(section = section.as_str(), "Acknowledgment dismissed");
        }
        self.dispatch_ack(AckIntent::Dismiss);
    }

    /// Routes a key press to the focused editor or the submit button.
    pub fn on_key(&mut self, key: KeyEvent) {
        let Some(target) = self.profile.focused_target() else {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                self.submit_active();
            }
            return;
        };

        let control = target.spec().control;
        let emitted = editors::emit(control, self.profile.value(target), &key);
        match emitted {
            Some(value) => self.dispatch_profile(ProfileIntent::Edit { target, value }),
            None if key.code == KeyCode::Enter => self.dispatch_profile(ProfileIntent::FocusNext),
            None => {}
        }
    }

    /// Appends pasted text to the focused field.
    pub fn on_paste(&mut self, text: &str) {
        if self.ack_dialog.is_visible() {
            return;
        }
        let Some(target) = self.profile.focused_target() else {
            return;
        };
        let pasted = editors::paste(target.spec().control, self.profile.value(target), text);
        if let Some(value) = pasted {
            self.dispatch_profile(ProfileIntent::Edit { target, value });
        }
    }
}
