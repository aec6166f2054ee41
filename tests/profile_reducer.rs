use medsus_profile::profile::{
    ActiveTab, FieldTarget, FieldValue, MedicalField, MedicalHistory, PersonalData, PersonalField,
    PreferenceField, PreferencesData,
};
use medsus_profile::submission::SectionPayload;
use medsus_profile::ui::mvi::Reducer;
use medsus_profile::ui::profile::{ProfileIntent, ProfileReducer, ProfileState};

fn edit(state: ProfileState, target: FieldTarget, value: impl Into<FieldValue>) -> ProfileState {
    ProfileReducer::reduce(
        state,
        ProfileIntent::Edit {
            target,
            value: value.into(),
        },
    )
}

fn select(state: ProfileState, tab: ActiveTab) -> ProfileState {
    ProfileReducer::reduce(state, ProfileIntent::SelectTab(tab))
}

#[test]
fn typing_full_name_touches_only_that_field() {
    let state = edit(
        ProfileState::default(),
        FieldTarget::Personal(PersonalField::FullName),
        "Ana Silva",
    );

    assert_eq!(state.personal.full_name, "Ana Silva");
    assert_eq!(state.personal.email, "");
    assert_eq!(state.active_tab, ActiveTab::Personal);
    assert_eq!(state.medical, MedicalHistory::default());
    assert_eq!(state.preferences, PreferencesData::default());
}

#[test]
fn edits_to_each_record_leave_the_others_alone() {
    let state = ProfileState::default();
    let state = edit(state, FieldTarget::Medical(MedicalField::Allergies), "Dipirona");
    assert_eq!(state.medical.allergies, "Dipirona");
    assert_eq!(state.personal, PersonalData::default());

    let state = edit(
        state,
        FieldTarget::Preferences(PreferenceField::PreferenceObservations),
        "Prefiro manhã",
    );
    assert_eq!(state.preferences.preference_observations, "Prefiro manhã");
    assert_eq!(state.medical.allergies, "Dipirona");
    assert_eq!(state.personal, PersonalData::default());
}

#[test]
fn checkbox_edit_from_medical_tab_serializes_only_medical() {
    let state = select(ProfileState::default(), ActiveTab::Medical);
    let state = edit(
        state,
        FieldTarget::Preferences(PreferenceField::EmailNotifications),
        true,
    );

    assert!(state.preferences.email_notifications);
    assert_eq!(state.active_tab, ActiveTab::Medical);

    let payload = state.payload(ActiveTab::Medical);
    assert_eq!(payload, SectionPayload::Medical(MedicalHistory::default()));
    let json = serde_json::to_value(&payload).unwrap();
    assert!(json["payload"].get("emailNotifications").is_none());
}

#[test]
fn blood_type_survives_a_round_trip_through_preferences() {
    let state = select(ProfileState::default(), ActiveTab::Medical);
    let state = edit(state, FieldTarget::Medical(MedicalField::BloodType), "O+");
    let state = select(state, ActiveTab::Preferences);
    let state = select(state, ActiveTab::Medical);

    assert_eq!(state.medical.blood_type, "O+");
    assert_eq!(state.active_tab, ActiveTab::Medical);
}

#[test]
fn clearing_a_select_is_allowed() {
    let state = edit(
        ProfileState::default(),
        FieldTarget::Preferences(PreferenceField::PreferredTime),
        "Manhã (07h - 12h)",
    );
    let state = edit(
        state,
        FieldTarget::Preferences(PreferenceField::PreferredTime),
        "",
    );
    assert_eq!(state.preferences.preferred_time, "");
}

#[test]
fn mismatched_value_kind_is_dropped() {
    let before = edit(
        ProfileState::default(),
        FieldTarget::Personal(PersonalField::City),
        "Caxias",
    );

    let after = edit(
        before.clone(),
        FieldTarget::Preferences(PreferenceField::WhatsappNotifications),
        "yes",
    );
    assert_eq!(after, before);

    let after = edit(
        before.clone(),
        FieldTarget::Personal(PersonalField::City),
        true,
    );
    assert_eq!(after, before);
}

#[test]
fn unknown_select_option_is_dropped() {
    let before = ProfileState::default();
    let after = edit(
        before.clone(),
        FieldTarget::Medical(MedicalField::BloodType),
        "Z-",
    );
    assert_eq!(after, before);
}

#[test]
fn selecting_the_active_tab_is_a_no_op() {
    let state = ProfileReducer::reduce(ProfileState::default(), ProfileIntent::FocusNext);
    assert_eq!(state.focused, 1);

    let again = select(state.clone(), ActiveTab::Personal);
    assert_eq!(again, state);
}

#[test]
fn switching_tabs_resets_focus_and_keeps_data() {
    let state = edit(
        ProfileState::default(),
        FieldTarget::Personal(PersonalField::Email),
        "ana@email.com",
    );
    let state = ProfileReducer::reduce(state, ProfileIntent::FocusNext);
    let state = ProfileReducer::reduce(state, ProfileIntent::NextTab);

    assert_eq!(state.active_tab, ActiveTab::Medical);
    assert_eq!(state.focused, 0);
    assert_eq!(state.personal.email, "ana@email.com");
}

#[test]
fn tab_cycling_wraps_both_ways() {
    let state = ProfileReducer::reduce(ProfileState::default(), ProfileIntent::PreviousTab);
    assert_eq!(state.active_tab, ActiveTab::Preferences);
    let state = ProfileReducer::reduce(state, ProfileIntent::NextTab);
    assert_eq!(state.active_tab, ActiveTab::Personal);
}

#[test]
fn focus_wraps_through_the_submit_button() {
    let mut state = ProfileState::with_tab(ActiveTab::Medical);
    for _ in 0..6 {
        state = ProfileReducer::reduce(state, ProfileIntent::FocusNext);
    }
    assert!(state.submit_focused());

    let state = ProfileReducer::reduce(state, ProfileIntent::FocusNext);
    assert_eq!(state.focused, 0);

    let state = ProfileReducer::reduce(state, ProfileIntent::FocusPrevious);
    assert!(state.submit_focused());
}
