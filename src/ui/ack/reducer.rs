//! Reducer for the acknowledgment dialog.

use crate::ui::mvi::Reducer;

use super::intent::AckIntent;
use super::state::AckDialogState;

pub struct AckReducer;

impl Reducer for AckReducer {
    type State = AckDialogState;
    type Intent = AckIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        // A new outcome always replaces whatever was shown.
        match intent {
            AckIntent::Saved { section, message } => AckDialogState::Saved { section, message },
            AckIntent::Failed { section, error } => AckDialogState::Failed { section, error },
            AckIntent::Dismiss => AckDialogState::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ActiveTab;

    #[test]
    fn saved_shows_message() {
        let state = AckReducer::reduce(
            AckDialogState::Hidden,
            AckIntent::Saved {
                section: ActiveTab::Personal,
                message: "Personal data saved (simulated)!".to_string(),
            },
        );
        assert!(matches!(
            state,
            AckDialogState::Saved { section: ActiveTab::Personal, ref message }
                if message == "Personal data saved (simulated)!"
        ));
    }

    #[test]
    fn dismiss_hides() {
        let state = AckDialogState::Failed {
            section: ActiveTab::Medical,
            error: "boom".to_string(),
        };
        assert_eq!(
            AckReducer::reduce(state, AckIntent::Dismiss),
            AckDialogState::Hidden
        );
    }

    #[test]
    fn dismiss_when_hidden_is_noop() {
        assert_eq!(
            AckReducer::reduce(AckDialogState::Hidden, AckIntent::Dismiss),
            AckDialogState::Hidden
        );
    }
}
