use crate::profile::{with_field, ActiveTab, FieldTarget};
use crate::ui::mvi::Reducer;
use crate::ui::profile::intent::ProfileIntent;
use crate::ui::profile::state::ProfileState;

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::SelectTab(tab) => select_tab(state, tab),
            ProfileIntent::NextTab => {
                let tab = state.active_tab.next();
                select_tab(state, tab)
            }
            ProfileIntent::PreviousTab => {
                let tab = state.active_tab.previous();
                select_tab(state, tab)
            }
            ProfileIntent::FocusNext => {
                let stops = state.focus_stops();
                ProfileState {
                    focused: (state.focused + 1) % stops,
                    ..state
                }
            }
            ProfileIntent::FocusPrevious => {
                let stops = state.focus_stops();
                ProfileState {
                    focused: (state.focused + stops - 1) % stops,
                    ..state
                }
            }
            ProfileIntent::Edit { target, value } => {
                let mut state = state;
                let result = match target {
                    FieldTarget::Personal(field) => {
                        with_field(&state.personal, field, value).map(|r| state.personal = r)
                    }
                    FieldTarget::Medical(field) => {
                        with_field(&state.medical, field, value).map(|r| state.medical = r)
                    }
                    FieldTarget::Preferences(field) => {
                        with_field(&state.preferences, field, value).map(|r| state.preferences = r)
                    }
                };
                if let Err(err) = result {
                    // Rejected updates leave the record as it was.
                    tracing::warn!(section = target.tab().as_str(), "Dropped field update: {}", err);
                }
                state
            }
        }
    }
}

fn select_tab(state: ProfileState, tab: ActiveTab) -> ProfileState {
    if state.active_tab == tab {
        return state;
    }
    tracing::debug!(from = state.active_tab.as_str(), to = tab.as_str(), "Switching tab");
    ProfileState {
        active_tab: tab,
        focused: 0,
        ..state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{FieldValue, PersonalField, PreferenceField};

    #[test]
    fn select_same_tab_keeps_focus() {
        let state = ProfileState {
            focused: 3,
            ..ProfileState::default()
        };
        let next = ProfileReducer::reduce(state.clone(), ProfileIntent::SelectTab(ActiveTab::Personal));
        assert_eq!(next, state);
    }

    #[test]
    fn select_other_tab_resets_focus() {
        let state = ProfileState {
            focused: 3,
            ..ProfileState::default()
        };
        let next = ProfileReducer::reduce(state, ProfileIntent::SelectTab(ActiveTab::Medical));
        assert_eq!(next.active_tab, ActiveTab::Medical);
        assert_eq!(next.focused, 0);
    }

    #[test]
    fn focus_wraps_through_submit_button() {
        let state = ProfileState::with_tab(ActiveTab::Medical);
        let state = ProfileReducer::reduce(state, ProfileIntent::FocusPrevious);
        assert!(state.submit_focused());
        let state = ProfileReducer::reduce(state, ProfileIntent::FocusNext);
        assert_eq!(state.focused, 0);
    }

    #[test]
    fn mismatched_edit_is_dropped() {
        let state = ProfileState::default();
        let next = ProfileReducer::reduce(
            state.clone(),
            ProfileIntent::Edit {
                target: FieldTarget::Personal(PersonalField::Email),
                value: FieldValue::Flag(true),
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn checkbox_edit_sets_flag() {
        let next = ProfileReducer::reduce(
            ProfileState::with_tab(ActiveTab::Preferences),
            ProfileIntent::Edit {
                target: FieldTarget::Preferences(PreferenceField::WhatsappNotifications),
                value: FieldValue::Flag(true),
            },
        );
        assert!(next.preferences.whatsapp_notifications);
        assert!(!next.preferences.email_notifications);
    }
}
