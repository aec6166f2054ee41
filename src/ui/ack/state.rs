//! State for the submission acknowledgment dialog.

use crate::profile::ActiveTab;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AckDialogState {
    #[default]
    Hidden,

    /// The sink accepted the section.
    Saved { section: ActiveTab, message: String },

    /// The sink refused the section.
    Failed { section: ActiveTab, error: String },
}

impl UiState for AckDialogState {}

impl AckDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn section(&self) -> Option<ActiveTab> {
        match self {
            Self::Hidden => None,
            Self::Saved { section, .. } | Self::Failed { section, .. } => Some(*section),
        }
    }
}
