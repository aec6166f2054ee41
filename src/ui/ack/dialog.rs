use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::ui::ack::state::AckDialogState;
use crate::ui::components::{wrap_words, PopupDialog};
use crate::ui::theme::{MUTED_TEXT, STATUS_ERROR, STATUS_OK, TEXT};

const DIALOG_WIDTH: u16 = 48;
/// Columns taken by the border and the leading " ✔ " marker.
const DETAIL_INDENT: u16 = 2 + 3;

pub fn render_ack_dialog(frame: &mut Frame, state: &AckDialogState) {
    let (title, headline, detail, accent) = match state {
        AckDialogState::Hidden => return,
        AckDialogState::Saved { message, .. } => ("Salvo", "✔ ", message.as_str(), STATUS_OK),
        AckDialogState::Failed { error, .. } => {
            ("Falha ao salvar", "✖ ", error.as_str(), STATUS_ERROR)
        }
    };

    let area = frame.area();
    let detail_width = DIALOG_WIDTH.min(area.width).saturating_sub(DETAIL_INDENT);
    let detail_style = Style::default().fg(TEXT).add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from("")];
    for (idx, row) in wrap_words(detail, usize::from(detail_width))
        .into_iter()
        .enumerate()
    {
        let lead = if idx == 0 {
            Span::styled(format!(" {}", headline), Style::default().fg(accent))
        } else {
            Span::raw("   ")
        };
        lines.push(Line::from(vec![lead, Span::styled(row, detail_style)]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Enter/Esc: OK",
        Style::default().fg(MUTED_TEXT),
    )));

    PopupDialog::new(title, lines)
        .fixed_width(DIALOG_WIDTH)
        .border_color(accent)
        .render(frame, area);
}
