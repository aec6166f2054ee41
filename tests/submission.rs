use medsus_profile::profile::{ActiveTab, MedicalHistory, PersonalData, PreferencesData};
use medsus_profile::submission::{
    acknowledgment, LocalAckSink, SectionPayload, SubmissionError, SubmissionSink,
};
use medsus_profile::ui::profile::ProfileState;

#[test]
fn each_section_payload_names_its_section() {
    let state = ProfileState::default();
    for tab in ActiveTab::ALL {
        let payload = state.payload(tab);
        assert_eq!(payload.section(), tab);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["section"], tab.as_str());
    }
}

#[test]
fn preferences_payload_keeps_boolean_flags() {
    let payload = SectionPayload::Preferences(PreferencesData {
        preferred_unit: "UBS Centro".to_string(),
        whatsapp_notifications: true,
        ..PreferencesData::default()
    });
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["payload"]["preferredUnit"], "UBS Centro");
    assert_eq!(json["payload"]["whatsappNotifications"], true);
    assert_eq!(json["payload"]["emailNotifications"], false);
}

#[test]
fn personal_payload_uses_camel_case_keys() {
    let payload = SectionPayload::Personal(PersonalData {
        full_name: "Ana Silva".to_string(),
        birth_date: "1990-04-12".to_string(),
        ..PersonalData::default()
    });
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["payload"]["fullName"], "Ana Silva");
    assert_eq!(json["payload"]["birthDate"], "1990-04-12");
    assert_eq!(json["payload"].as_object().unwrap().len(), 9);
}

#[test]
fn local_sink_issues_distinct_receipts() {
    let mut sink = LocalAckSink::new();
    let payload = SectionPayload::Medical(MedicalHistory::default());

    let first = sink.submit(&payload).unwrap();
    let second = sink.submit(&payload).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.section, ActiveTab::Medical);
    assert_eq!(first.message, acknowledgment(ActiveTab::Medical));
}

#[test]
fn rejection_message_names_section_and_reason() {
    let err = SubmissionError::Rejected {
        section: ActiveTab::Preferences,
        reason: "offline".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Submission of preferences data was rejected: offline"
    );
}
