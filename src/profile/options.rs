//! Fixed option sets for the enumerated select fields.

pub const BLOOD_TYPES: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

pub const PREFERRED_UNITS: &[&str] = &[
    "UBS Centro",
    "UBS Vila Nova",
    "Hospital Municipal",
    "Clínica da Família",
    "Policlínica Regional",
];

pub const PREFERRED_TIMES: &[&str] = &[
    "Manhã (07h - 12h)",
    "Tarde (12h - 18h)",
    "Noite (18h - 22h)",
];

pub const REMINDER_OPTIONS: &[&str] = &[
    "1 hora antes",
    "1 dia antes",
    "2 dias antes",
    "1 semana antes",
];

/// Label rendered for the empty ("unselected") option.
pub const UNSELECTED_LABEL: &str = "Selecione...";
