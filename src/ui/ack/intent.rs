//! Intents for the acknowledgment dialog.

use crate::profile::ActiveTab;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AckIntent {
    /// Submission succeeded; show the sink's message.
    Saved { section: ActiveTab, message: String },

    /// Submission failed; show the error.
    Failed { section: ActiveTab, error: String },

    /// User closed the dialog.
    Dismiss,
}

impl Intent for AckIntent {}
