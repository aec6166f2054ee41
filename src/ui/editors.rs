//! Field editors.
//!
//! Editors are stateless: given a field's descriptor and its current value
//! they compute either the lines to draw or the value a key press emits.
//! The emitted value is tagged by control type, so only checkboxes ever
//! produce `FieldValue::Flag`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::profile::options::UNSELECTED_LABEL;
use crate::profile::{Control, FieldRef, FieldSpec, FieldValue, InputKind};
use crate::ui::theme::{BRAND_SKY, FOCUS_HIGHLIGHT, MUTED_TEXT, TEXT};

const CARET: &str = "▏";

/// Value emitted by `key` on a field showing `current`, if any.
pub fn emit(control: Control, current: FieldRef<'_>, key: &KeyEvent) -> Option<FieldValue> {
    match (control, current) {
        (Control::Input(kind), FieldRef::Text(text)) => edit_line(kind, text, key),
        (Control::TextArea { .. }, FieldRef::Text(text)) => edit_multiline(text, key),
        (Control::Select(options), FieldRef::Text(text)) => cycle_select(options, text, key),
        (Control::Checkbox { .. }, FieldRef::Flag(checked)) => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(FieldValue::Flag(!checked)),
            _ => None,
        },
        // Control and value disagree; nothing sensible to emit.
        _ => None,
    }
}

/// Value emitted by pasting `pasted` into a field showing `current`.
pub fn paste(control: Control, current: FieldRef<'_>, pasted: &str) -> Option<FieldValue> {
    let FieldRef::Text(text) = current else {
        return None;
    };
    let accepted: String = match control {
        Control::Input(kind) => pasted.chars().filter(|ch| kind.accepts(*ch)).collect(),
        Control::TextArea { .. } => pasted
            .chars()
            .filter(|ch| *ch == '\n' || !ch.is_control())
            .collect(),
        Control::Select(_) | Control::Checkbox { .. } => return None,
    };
    if accepted.is_empty() {
        return None;
    }
    Some(FieldValue::Text(format!("{text}{accepted}")))
}

/// Ctrl+Alt together is how AltGr characters arrive on Windows.
fn is_alt_gr(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn typed_char(key: &KeyEvent) -> Option<char> {
    if !is_alt_gr(key)
        && key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) => Some(ch),
        _ => None,
    }
}

fn is_ctrl_u(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && !is_alt_gr(key)
        && matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'u'))
}

fn edit_line(kind: InputKind, text: &str, key: &KeyEvent) -> Option<FieldValue> {
    if is_ctrl_u(key) {
        return (!text.is_empty()).then(|| FieldValue::Text(String::new()));
    }
    if key.code == KeyCode::Backspace {
        return pop_char(text);
    }
    let ch = typed_char(key).filter(|ch| kind.accepts(*ch))?;
    Some(FieldValue::Text(format!("{text}{ch}")))
}

fn edit_multiline(text: &str, key: &KeyEvent) -> Option<FieldValue> {
    if is_ctrl_u(key) {
        return (!text.is_empty()).then(|| FieldValue::Text(String::new()));
    }
    match key.code {
        KeyCode::Backspace => pop_char(text),
        KeyCode::Enter => Some(FieldValue::Text(format!("{text}\n"))),
        _ => {
            let ch = typed_char(key).filter(|ch| !ch.is_control())?;
            Some(FieldValue::Text(format!("{text}{ch}")))
        }
    }
}

fn pop_char(text: &str) -> Option<FieldValue> {
    let mut chars = text.chars();
    chars.next_back()?;
    Some(FieldValue::Text(chars.as_str().to_string()))
}

/// Cycles through `["", options...]`.
fn cycle_select(options: &[&str], text: &str, key: &KeyEvent) -> Option<FieldValue> {
    let stops = options.len() + 1;
    // Position 0 is the unselected option.
    let position = options
        .iter()
        .position(|option| *option == text)
        .map(|idx| idx + 1)
        .unwrap_or(0);
    let next = match key.code {
        KeyCode::Right | KeyCode::Char(' ') => (position + 1) % stops,
        KeyCode::Left => (position + stops - 1) % stops,
        KeyCode::Backspace | KeyCode::Delete => 0,
        _ => return None,
    };
    if next == position {
        return None;
    }
    let value = match next {
        0 => String::new(),
        idx => options[idx - 1].to_string(),
    };
    Some(FieldValue::Text(value))
}

// ============================================================================
// Rendering
// ============================================================================

/// Lines drawn for one field: legend (if any), label, then the control.
pub fn render(
    spec: &FieldSpec,
    value: FieldRef<'_>,
    focused: bool,
    show_legend: bool,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if show_legend {
        if let Some(legend) = spec.legend {
            lines.push(Line::from(Span::styled(
                format!("  {}", legend),
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD),
            )));
        }
    }

    let marker = if focused { "▸ " } else { "  " };
    let label_style = if focused {
        Style::default().fg(BRAND_SKY).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
    };

    match (spec.control, value) {
        (Control::Checkbox { description }, FieldRef::Flag(checked)) => {
            let mark = if checked { "[x] " } else { "[ ] " };
            lines.push(Line::from(vec![
                Span::styled(marker, label_style),
                Span::styled(mark, field_style(focused)),
                Span::styled(spec.label, label_style),
            ]));
            if let Some(description) = description {
                lines.push(Line::from(Span::styled(
                    format!("        {}", description),
                    Style::default().fg(MUTED_TEXT),
                )));
            }
        }
        (Control::Select(_), FieldRef::Text(text)) => {
            lines.push(Line::from(Span::styled(
                format!("{}{}", marker, spec.label),
                label_style,
            )));
            let (shown, style) = if text.is_empty() {
                (UNSELECTED_LABEL.to_string(), placeholder_style(focused))
            } else {
                (text.to_string(), field_style(focused))
            };
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(format!("◂ {} ▸", shown), style),
            ]));
        }
        (Control::TextArea { rows }, FieldRef::Text(text)) => {
            lines.push(Line::from(Span::styled(
                format!("{}{}", marker, spec.label),
                label_style,
            )));
            let mut body: Vec<String> = if text.is_empty() {
                Vec::new()
            } else {
                text.split('\n').map(str::to_string).collect()
            };
            let placeholder = body.is_empty();
            if placeholder {
                body.push(spec.placeholder.unwrap_or_default().to_string());
            }
            if focused && !placeholder {
                if let Some(last) = body.last_mut() {
                    last.push_str(CARET);
                }
            }
            while body.len() < rows as usize {
                body.push(String::new());
            }
            let style = if placeholder {
                placeholder_style(focused)
            } else {
                field_style(focused)
            };
            for row in body {
                lines.push(Line::from(vec![
                    Span::raw("    │ "),
                    Span::styled(row, style),
                ]));
            }
        }
        (Control::Input(_), FieldRef::Text(text)) => {
            lines.push(Line::from(Span::styled(
                format!("{}{}", marker, spec.label),
                label_style,
            )));
            let content = if text.is_empty() {
                Span::styled(
                    spec.placeholder.unwrap_or_default().to_string(),
                    placeholder_style(focused),
                )
            } else if focused {
                Span::styled(format!("{}{}", text, CARET), field_style(focused))
            } else {
                Span::styled(text.to_string(), field_style(focused))
            };
            lines.push(Line::from(vec![Span::raw("    "), content]));
        }
        (_, value) => {
            lines.push(Line::from(Span::styled(
                format!("{}{} (unsupported {} value)", marker, spec.label, value.kind()),
                label_style,
            )));
        }
    }
    lines
}

fn field_style(focused: bool) -> Style {
    let style = Style::default().fg(TEXT);
    if focused {
        style.bg(FOCUS_HIGHLIGHT)
    } else {
        style
    }
}

fn placeholder_style(focused: bool) -> Style {
    let style = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC);
    if focused {
        style.bg(FOCUS_HIGHLIGHT)
    } else {
        style
    }
}
