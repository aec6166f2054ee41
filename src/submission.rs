//! Submission sink boundary.
//!
//! A sink receives one section's record and either acknowledges it or fails.
//! The only sink shipped today is [`LocalAckSink`], which writes the payload
//! to the log and acknowledges locally.

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::profile::{ActiveTab, MedicalHistory, PersonalData, PreferencesData};

/// One section's record, tagged by section.
///
/// Serializes as `{"section": "medical", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "section", content = "payload", rename_all = "lowercase")]
pub enum SectionPayload {
    Personal(PersonalData),
    Medical(MedicalHistory),
    Preferences(PreferencesData),
}

impl SectionPayload {
    pub fn section(&self) -> ActiveTab {
        match self {
            Self::Personal(_) => ActiveTab::Personal,
            Self::Medical(_) => ActiveTab::Medical,
            Self::Preferences(_) => ActiveTab::Preferences,
        }
    }
}

/// Acknowledgment returned by a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub section: ActiveTab,
    /// User-visible acknowledgment text.
    pub message: String,
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Failed to serialize {section} data: {source}")]
    Serialize {
        section: ActiveTab,
        #[source]
        source: serde_json::Error,
    },

    #[error("Submission of {section} data was rejected: {reason}")]
    Rejected { section: ActiveTab, reason: String },
}

/// External boundary that would persist a record.
pub trait SubmissionSink {
    fn submit(&mut self, payload: &SectionPayload) -> Result<SubmissionReceipt, SubmissionError>;
}

/// Sink that only logs the payload and acknowledges it.
#[derive(Debug, Default)]
pub struct LocalAckSink;

impl LocalAckSink {
    pub fn new() -> Self {
        Self
    }
}

impl SubmissionSink for LocalAckSink {
    fn submit(&mut self, payload: &SectionPayload) -> Result<SubmissionReceipt, SubmissionError> {
        let section = payload.section();
        let body = serde_json::to_string(payload)
            .map_err(|source| SubmissionError::Serialize { section, source })?;
        let id = Uuid::new_v4();

        tracing::info!(
            submission_id = %id,
            section = section.as_str(),
            payload = %body,
            "Submitting {} data (simulated)",
            section
        );

        Ok(SubmissionReceipt {
            id,
            section,
            message: acknowledgment(section),
        })
    }
}

/// Acknowledgment text for a saved section.
pub fn acknowledgment(section: ActiveTab) -> String {
    format!("{} data saved (simulated)!", section.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acknowledgment_names_the_section() {
        assert_eq!(
            acknowledgment(ActiveTab::Personal),
            "Personal data saved (simulated)!"
        );
        assert_eq!(
            acknowledgment(ActiveTab::Preferences),
            "Preferences data saved (simulated)!"
        );
    }

    #[test]
    fn payload_serializes_section_and_record() {
        let payload = SectionPayload::Medical(MedicalHistory {
            blood_type: "O+".to_string(),
            ..MedicalHistory::default()
        });
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["section"], "medical");
        assert_eq!(json["payload"]["bloodType"], "O+");
        assert!(json["payload"].get("emailNotifications").is_none());
    }

    #[test]
    fn local_sink_acknowledges() {
        let mut sink = LocalAckSink::new();
        let receipt = sink
            .submit(&SectionPayload::Preferences(PreferencesData::default()))
            .unwrap();
        assert_eq!(receipt.section, ActiveTab::Preferences);
        assert_eq!(receipt.message, "Preferences data saved (simulated)!");
    }
}
