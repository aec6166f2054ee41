use thiserror::Error;

use crate::profile::fields::{Control, FieldValue, ValueKind};
use crate::profile::records::{Record, RecordField, Slot};

/// Reasons a field update is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    #[error("field '{field}' holds a {expected} value, got {actual}")]
    KindMismatch {
        field: &'static str,
        expected: ValueKind,
        actual: ValueKind,
    },

    #[error("'{value}' is not an option of field '{field}'")]
    UnknownOption { field: &'static str, value: String },
}

/// Returns a copy of `record` with `field` replaced by `value`.
///
/// Every other field is left untouched. The empty string is always a valid
/// select value (the "unselected" option).
pub fn with_field<R: Record>(
    record: &R,
    field: R::Field,
    value: FieldValue,
) -> Result<R, UpdateError> {
    let spec = field.spec();

    if let (Control::Select(options), FieldValue::Text(text)) = (spec.control, &value) {
        if !text.is_empty() && !options.contains(&text.as_str()) {
            return Err(UpdateError::UnknownOption {
                field: spec.key,
                value: text.clone(),
            });
        }
    }

    let mut next = record.clone();
    match (next.slot(field), value) {
        (Slot::Text(slot), FieldValue::Text(text)) => *slot = text,
        (Slot::Flag(slot), FieldValue::Flag(flag)) => *slot = flag,
        (slot, value) => {
            return Err(UpdateError::KindMismatch {
                field: spec.key,
                expected: slot.kind(),
                actual: value.kind(),
            })
        }
    }
    Ok(next)
}
