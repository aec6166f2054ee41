use std::fmt;

/// Native typing of a single-line input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Date,
}

impl InputKind {
    /// Whether a typed character is accepted by this input type.
    ///
    /// This mirrors what a browser input of the same type lets through;
    /// it is not format validation.
    pub fn accepts(&self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self {
            Self::Text => true,
            Self::Email => !ch.is_whitespace(),
            Self::Tel => ch.is_ascii_digit() || matches!(ch, ' ' | '(' | ')' | '+' | '-'),
            Self::Date => ch.is_ascii_digit() || matches!(ch, '-' | '/'),
        }
    }
}

/// Which kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Flag,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Flag => f.write_str("boolean"),
        }
    }
}

/// Control archetype used to edit a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Input(InputKind),
    Select(&'static [&'static str]),
    TextArea { rows: u16 },
    Checkbox { description: Option<&'static str> },
}

impl Control {
    /// Checkboxes hold flags, every other control holds text.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Self::Checkbox { .. } => ValueKind::Flag,
            _ => ValueKind::Text,
        }
    }
}

/// Static descriptor of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Serialized key (camelCase).
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub control: Control,
    /// Fieldset legend shown above the first field of a group.
    pub legend: Option<&'static str>,
}

impl FieldSpec {
    pub const fn input(
        key: &'static str,
        label: &'static str,
        kind: InputKind,
        placeholder: Option<&'static str>,
    ) -> Self {
        Self {
            key,
            label,
            placeholder,
            control: Control::Input(kind),
            legend: None,
        }
    }

    pub const fn select(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            placeholder: None,
            control: Control::Select(options),
            legend: None,
        }
    }

    pub const fn textarea(key: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            key,
            label,
            placeholder: Some(placeholder),
            control: Control::TextArea { rows: 3 },
            legend: None,
        }
    }

    pub const fn checkbox(
        key: &'static str,
        label: &'static str,
        description: &'static str,
        legend: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            placeholder: None,
            control: Control::Checkbox {
                description: Some(description),
            },
            legend: Some(legend),
        }
    }
}

/// Owned value emitted by an editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Flag(_) => ValueKind::Flag,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Borrowed view of a field's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRef<'a> {
    Text(&'a str),
    Flag(bool),
}

impl FieldRef<'_> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Flag(_) => ValueKind::Flag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_accepts_phone_punctuation_only() {
        for ch in "(11) 91234-5678 +55".chars() {
            assert!(InputKind::Tel.accepts(ch), "rejected {ch:?}");
        }
        assert!(!InputKind::Tel.accepts('a'));
    }

    #[test]
    fn email_rejects_whitespace() {
        assert!(InputKind::Email.accepts('@'));
        assert!(!InputKind::Email.accepts(' '));
    }

    #[test]
    fn date_accepts_digits_and_separators() {
        assert!(InputKind::Date.accepts('1'));
        assert!(InputKind::Date.accepts('-'));
        assert!(InputKind::Date.accepts('/'));
        assert!(!InputKind::Date.accepts('x'));
    }

    #[test]
    fn no_input_accepts_control_chars() {
        assert!(!InputKind::Text.accepts('\n'));
        assert!(!InputKind::Text.accepts('\t'));
    }

    #[test]
    fn only_checkbox_holds_flags() {
        assert_eq!(
            Control::Checkbox { description: None }.value_kind(),
            ValueKind::Flag
        );
        assert_eq!(Control::Input(InputKind::Text).value_kind(), ValueKind::Text);
        assert_eq!(Control::Select(&["a"]).value_kind(), ValueKind::Text);
        assert_eq!(Control::TextArea { rows: 3 }.value_kind(), ValueKind::Text);
    }
}
