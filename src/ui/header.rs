use crate::ui::icons::Icon;
use crate::ui::theme::{BRAND_SKY, BRAND_TEAL, GLOBAL_BORDER, SEPARATOR, TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Navigation entries. They are decorative: none of them is selectable.
pub const NAV_ITEMS: [&str; 4] = ["Histórico", "Sobre", "Chat", "Agendar Consulta"];

pub struct Header;

impl Header {
    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT);
        let separator_style = Style::default().fg(SEPARATOR);

        let mut spans = vec![Span::raw(" ")];
        spans.extend(logo_spans());
        spans.push(Span::raw("    "));
        for (idx, item) in NAV_ITEMS.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  │  ", separator_style));
            }
            spans.push(Span::styled(*item, text_style));
        }

        // Push the user glyph to the right edge.
        let used: usize = spans.iter().map(|span| span.width()).sum();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width.saturating_sub(used).saturating_sub(2);
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Icon::User.span(Style::default().fg(BRAND_TEAL)));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

/// Logo mark plus brand name.
pub fn logo_spans() -> Vec<Span<'static>> {
    vec![
        Icon::Logo.span(Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD)),
        Span::styled(
            " MedSUS",
            Style::default().fg(BRAND_SKY).add_modifier(Modifier::BOLD),
        ),
    ]
}
