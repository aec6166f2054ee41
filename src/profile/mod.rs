//! Profile domain model: tabs, records, field catalogue and the
//! record update reducer.

mod fields;
pub mod options;
mod records;
mod tab;
mod update;

pub use fields::{Control, FieldRef, FieldSpec, FieldValue, InputKind, ValueKind};
pub use records::{
    FieldTarget, MedicalField, MedicalHistory, PersonalData, PersonalField, PreferenceField,
    PreferencesData, Record, RecordField, Slot,
};
pub use tab::{ActiveTab, UnknownTab};
pub use update::{with_field, UpdateError};
