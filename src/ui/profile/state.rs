use crate::profile::{
    ActiveTab, FieldRef, FieldTarget, MedicalHistory, PersonalData, PreferencesData, Record,
};
use crate::submission::SectionPayload;
use crate::ui::mvi::UiState;

/// All mutable form data: the active tab, keyboard focus and the three
/// records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    pub active_tab: ActiveTab,
    /// Index into the active tab's fields; `field_count()` is the submit
    /// button.
    pub focused: usize,
    pub personal: PersonalData,
    pub medical: MedicalHistory,
    pub preferences: PreferencesData,
}

impl UiState for ProfileState {}

impl ProfileState {
    pub fn with_tab(tab: ActiveTab) -> Self {
        Self {
            active_tab: tab,
            ..Self::default()
        }
    }

    /// Number of fields on the active tab.
    pub fn field_count(&self) -> usize {
        FieldTarget::count(self.active_tab)
    }

    /// Number of focus stops on the active tab (fields plus the button).
    pub fn focus_stops(&self) -> usize {
        self.field_count() + 1
    }

    pub fn submit_focused(&self) -> bool {
        self.focused == self.field_count()
    }

    /// The focused field, or `None` when the submit button has focus.
    pub fn focused_target(&self) -> Option<FieldTarget> {
        FieldTarget::at(self.active_tab, self.focused)
    }

    pub fn value(&self, target: FieldTarget) -> FieldRef<'_> {
        match target {
            FieldTarget::Personal(field) => self.personal.get(field),
            FieldTarget::Medical(field) => self.medical.get(field),
            FieldTarget::Preferences(field) => self.preferences.get(field),
        }
    }

    /// Snapshot of one section's record for submission.
    pub fn payload(&self, section: ActiveTab) -> SectionPayload {
        match section {
            ActiveTab::Personal => SectionPayload::Personal(self.personal.clone()),
            ActiveTab::Medical => SectionPayload::Medical(self.medical.clone()),
            ActiveTab::Preferences => SectionPayload::Preferences(self.preferences.clone()),
        }
    }
}
