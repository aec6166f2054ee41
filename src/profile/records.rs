use serde::{Deserialize, Serialize};
use std::fmt;

use crate::profile::fields::{FieldRef, FieldSpec, InputKind, ValueKind};
use crate::profile::options::{BLOOD_TYPES, PREFERRED_TIMES, PREFERRED_UNITS, REMINDER_OPTIONS};
use crate::profile::tab::ActiveTab;

/// Closed set of field names of one record.
pub trait RecordField: Copy + Eq + fmt::Debug + 'static {
    /// All fields in display order.
    const ALL: &'static [Self];

    fn spec(self) -> &'static FieldSpec;
}

/// Mutable slot of a field, tagged by value kind.
pub enum Slot<'a> {
    Text(&'a mut String),
    Flag(&'a mut bool),
}

impl Slot<'_> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Flag(_) => ValueKind::Flag,
        }
    }
}

/// A flat form record bound to one tab.
pub trait Record: Clone + PartialEq + Default + Serialize {
    type Field: RecordField;

    fn get(&self, field: Self::Field) -> FieldRef<'_>;

    fn slot(&mut self, field: Self::Field) -> Slot<'_>;
}

// ============================================================================
// Personal data
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub cpf: String,
    pub birth_date: String,
    pub cep: String,
    pub address: String,
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Cpf,
    BirthDate,
    Cep,
    Address,
    City,
    State,
}

static PERSONAL_SPECS: [FieldSpec; 9] = [
    FieldSpec::input("fullName", "Nome Completo", InputKind::Text, Some("Seu nome completo")),
    FieldSpec::input("email", "Email", InputKind::Email, Some("nome@email.com")),
    FieldSpec::input("phone", "Telefone", InputKind::Tel, Some("(99) 99999-9999")),
    FieldSpec::input("cpf", "CPF", InputKind::Text, Some("000.000.000-00")),
    FieldSpec::input("birthDate", "Data de Nascimento", InputKind::Date, Some("AAAA-MM-DD")),
    FieldSpec::input("cep", "CEP", InputKind::Text, Some("00000-000")),
    FieldSpec::input("address", "Endereço", InputKind::Text, Some("Rua Tal, Quadra Tal")),
    FieldSpec::input("city", "Cidade", InputKind::Text, Some("Caxias")),
    FieldSpec::input("state", "Estado", InputKind::Text, Some("Maranhão")),
];

impl RecordField for PersonalField {
    const ALL: &'static [Self] = &[
        Self::FullName,
        Self::Email,
        Self::Phone,
        Self::Cpf,
        Self::BirthDate,
        Self::Cep,
        Self::Address,
        Self::City,
        Self::State,
    ];

    fn spec(self) -> &'static FieldSpec {
        &PERSONAL_SPECS[self as usize]
    }
}

impl Record for PersonalData {
    type Field = PersonalField;

    fn get(&self, field: PersonalField) -> FieldRef<'_> {
        FieldRef::Text(match field {
            PersonalField::FullName => &self.full_name,
            PersonalField::Email => &self.email,
            PersonalField::Phone => &self.phone,
            PersonalField::Cpf => &self.cpf,
            PersonalField::BirthDate => &self.birth_date,
            PersonalField::Cep => &self.cep,
            PersonalField::Address => &self.address,
            PersonalField::City => &self.city,
            PersonalField::State => &self.state,
        })
    }

    fn slot(&mut self, field: PersonalField) -> Slot<'_> {
        Slot::Text(match field {
            PersonalField::FullName => &mut self.full_name,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
            PersonalField::Cpf => &mut self.cpf,
            PersonalField::BirthDate => &mut self.birth_date,
            PersonalField::Cep => &mut self.cep,
            PersonalField::Address => &mut self.address,
            PersonalField::City => &mut self.city,
            PersonalField::State => &mut self.state,
        })
    }
}

// ============================================================================
// Medical history
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalHistory {
    pub blood_type: String,
    pub emergency_contact: String,
    pub allergies: String,
    pub medications: String,
    pub chronic_conditions: String,
    pub medical_observations: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MedicalField {
    BloodType,
    EmergencyContact,
    Allergies,
    Medications,
    ChronicConditions,
    MedicalObservations,
}

static MEDICAL_SPECS: [FieldSpec; 6] = [
    FieldSpec::select("bloodType", "Tipo Sanguíneo", BLOOD_TYPES),
    FieldSpec::input(
        "emergencyContact",
        "Contato de Emergência",
        InputKind::Text,
        Some("Nome - (99) 99999-9999"),
    ),
    FieldSpec::input("allergies", "Alergias", InputKind::Text, Some("Penicilina, etc.")),
    FieldSpec::input(
        "medications",
        "Medicamentos em uso",
        InputKind::Text,
        Some("Nenhum ou liste os medicamentos"),
    ),
    FieldSpec::input(
        "chronicConditions",
        "Condições Crônicas",
        InputKind::Text,
        Some("Nenhuma ou liste as condições"),
    ),
    FieldSpec::textarea("medicalObservations", "Observações Médicas", "Sem observações"),
];

impl RecordField for MedicalField {
    const ALL: &'static [Self] = &[
        Self::BloodType,
        Self::EmergencyContact,
        Self::Allergies,
        Self::Medications,
        Self::ChronicConditions,
        Self::MedicalObservations,
    ];

    fn spec(self) -> &'static FieldSpec {
        &MEDICAL_SPECS[self as usize]
    }
}

impl Record for MedicalHistory {
    type Field = MedicalField;

    fn get(&self, field: MedicalField) -> FieldRef<'_> {
        FieldRef::Text(match field {
            MedicalField::BloodType => &self.blood_type,
            MedicalField::EmergencyContact => &self.emergency_contact,
            MedicalField::Allergies => &self.allergies,
            MedicalField::Medications => &self.medications,
            MedicalField::ChronicConditions => &self.chronic_conditions,
            MedicalField::MedicalObservations => &self.medical_observations,
        })
    }

    fn slot(&mut self, field: MedicalField) -> Slot<'_> {
        Slot::Text(match field {
            MedicalField::BloodType => &mut self.blood_type,
            MedicalField::EmergencyContact => &mut self.emergency_contact,
            MedicalField::Allergies => &mut self.allergies,
            MedicalField::Medications => &mut self.medications,
            MedicalField::ChronicConditions => &mut self.chronic_conditions,
            MedicalField::MedicalObservations => &mut self.medical_observations,
        })
    }
}

// ============================================================================
// Preferences
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesData {
    pub preferred_unit: String,
    pub preferred_time: String,
    pub appointment_reminder: String,
    pub email_notifications: bool,
    pub whatsapp_notifications: bool,
    pub preference_observations: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceField {
    PreferredUnit,
    PreferredTime,
    AppointmentReminder,
    EmailNotifications,
    WhatsappNotifications,
    PreferenceObservations,
}

static PREFERENCE_SPECS: [FieldSpec; 6] = [
    FieldSpec::select("preferredUnit", "Unidade Preferida", PREFERRED_UNITS),
    FieldSpec::select("preferredTime", "Horário Preferido", PREFERRED_TIMES),
    FieldSpec::select("appointmentReminder", "Lembrete de Consultas", REMINDER_OPTIONS),
    FieldSpec::checkbox(
        "emailNotifications",
        "Notificações por e-mail",
        "Receber lembretes e confirmações por E-mail",
        "Notificações",
    ),
    FieldSpec::checkbox(
        "whatsappNotifications",
        "Notificações por WhatsApp",
        "Receber lembretes e confirmações por WhatsApp",
        "Notificações",
    ),
    FieldSpec::textarea(
        "preferenceObservations",
        "Observações de preferências",
        "Sem observações",
    ),
];

impl RecordField for PreferenceField {
    const ALL: &'static [Self] = &[
        Self::PreferredUnit,
        Self::PreferredTime,
        Self::AppointmentReminder,
        Self::EmailNotifications,
        Self::WhatsappNotifications,
        Self::PreferenceObservations,
    ];

    fn spec(self) -> &'static FieldSpec {
        &PREFERENCE_SPECS[self as usize]
    }
}

impl Record for PreferencesData {
    type Field = PreferenceField;

    fn get(&self, field: PreferenceField) -> FieldRef<'_> {
        match field {
            PreferenceField::PreferredUnit => FieldRef::Text(&self.preferred_unit),
            PreferenceField::PreferredTime => FieldRef::Text(&self.preferred_time),
            PreferenceField::AppointmentReminder => FieldRef::Text(&self.appointment_reminder),
            PreferenceField::EmailNotifications => FieldRef::Flag(self.email_notifications),
            PreferenceField::WhatsappNotifications => FieldRef::Flag(self.whatsapp_notifications),
            PreferenceField::PreferenceObservations => {
                FieldRef::Text(&self.preference_observations)
            }
        }
    }

    fn slot(&mut self, field: PreferenceField) -> Slot<'_> {
        match field {
            PreferenceField::PreferredUnit => Slot::Text(&mut self.preferred_unit),
            PreferenceField::PreferredTime => Slot::Text(&mut self.preferred_time),
            PreferenceField::AppointmentReminder => Slot::Text(&mut self.appointment_reminder),
            PreferenceField::EmailNotifications => Slot::Flag(&mut self.email_notifications),
            PreferenceField::WhatsappNotifications => Slot::Flag(&mut self.whatsapp_notifications),
            PreferenceField::PreferenceObservations => {
                Slot::Text(&mut self.preference_observations)
            }
        }
    }
}

// ============================================================================
// Cross-record addressing
// ============================================================================

/// A field of any record, tagged by the record that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTarget {
    Personal(PersonalField),
    Medical(MedicalField),
    Preferences(PreferenceField),
}

impl FieldTarget {
    /// The field at `index` in the display order of `tab`.
    pub fn at(tab: ActiveTab, index: usize) -> Option<Self> {
        match tab {
            ActiveTab::Personal => PersonalField::ALL.get(index).copied().map(Self::Personal),
            ActiveTab::Medical => MedicalField::ALL.get(index).copied().map(Self::Medical),
            ActiveTab::Preferences => PreferenceField::ALL
                .get(index)
                .copied()
                .map(Self::Preferences),
        }
    }

    /// All fields of `tab` in display order.
    pub fn for_tab(tab: ActiveTab) -> Vec<Self> {
        (0..Self::count(tab))
            .filter_map(|index| Self::at(tab, index))
            .collect()
    }

    pub fn count(tab: ActiveTab) -> usize {
        match tab {
            ActiveTab::Personal => PersonalField::ALL.len(),
            ActiveTab::Medical => MedicalField::ALL.len(),
            ActiveTab::Preferences => PreferenceField::ALL.len(),
        }
    }

    pub fn tab(&self) -> ActiveTab {
        match self {
            Self::Personal(_) => ActiveTab::Personal,
            Self::Medical(_) => ActiveTab::Medical,
            Self::Preferences(_) => ActiveTab::Preferences,
        }
    }

    pub fn spec(&self) -> &'static FieldSpec {
        match self {
            Self::Personal(field) => field.spec(),
            Self::Medical(field) => field.spec(),
            Self::Preferences(field) => field.spec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::fields::Control;

    fn assert_slots_match_controls<R: Record>() {
        let mut record = R::default();
        for &field in <R::Field as RecordField>::ALL {
            let expected = field.spec().control.value_kind();
            assert_eq!(record.get(field).kind(), expected, "{field:?}");
            assert_eq!(record.slot(field).kind(), expected, "{field:?}");
        }
    }

    #[test]
    fn slot_kinds_follow_control_kinds() {
        assert_slots_match_controls::<PersonalData>();
        assert_slots_match_controls::<MedicalHistory>();
        assert_slots_match_controls::<PreferencesData>();
    }

    #[test]
    fn spec_table_lines_up_with_enum_order() {
        let keys: Vec<&str> = PersonalField::ALL.iter().map(|f| f.spec().key).collect();
        assert_eq!(
            keys,
            [
                "fullName",
                "email",
                "phone",
                "cpf",
                "birthDate",
                "cep",
                "address",
                "city",
                "state"
            ]
        );
        assert_eq!(MedicalField::BloodType.spec().key, "bloodType");
        assert_eq!(
            MedicalField::MedicalObservations.spec().key,
            "medicalObservations"
        );
        assert_eq!(
            PreferenceField::WhatsappNotifications.spec().key,
            "whatsappNotifications"
        );
    }

    #[test]
    fn serialized_keys_match_spec_keys() {
        let json = serde_json::to_value(PreferencesData::default()).unwrap();
        let object = json.as_object().unwrap();
        for field in PreferenceField::ALL {
            assert!(object.contains_key(field.spec().key), "{field:?}");
        }
        let json = serde_json::to_value(PersonalData::default()).unwrap();
        assert!(json.get("birthDate").is_some());
    }

    #[test]
    fn blood_type_is_a_select_over_blood_types() {
        assert_eq!(
            MedicalField::BloodType.spec().control,
            Control::Select(BLOOD_TYPES)
        );
    }

    #[test]
    fn targets_cover_each_tab() {
        assert_eq!(FieldTarget::for_tab(ActiveTab::Personal).len(), 9);
        assert_eq!(FieldTarget::for_tab(ActiveTab::Medical).len(), 6);
        assert_eq!(FieldTarget::for_tab(ActiveTab::Preferences).len(), 6);
        assert_eq!(FieldTarget::at(ActiveTab::Medical, 6), None);
        for tab in ActiveTab::ALL {
            for target in FieldTarget::for_tab(tab) {
                assert_eq!(target.tab(), tab);
            }
        }
    }
}
