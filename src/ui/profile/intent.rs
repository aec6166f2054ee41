use crate::profile::{ActiveTab, FieldTarget, FieldValue};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileIntent {
    /// Show a tab. Idempotent; other tabs keep their data.
    SelectTab(ActiveTab),
    NextTab,
    PreviousTab,
    /// Move focus to the next field (wraps through the submit button).
    FocusNext,
    FocusPrevious,
    /// Replace one field of the record that owns `target`.
    Edit {
        target: FieldTarget,
        value: FieldValue,
    },
}

impl Intent for ProfileIntent {}
