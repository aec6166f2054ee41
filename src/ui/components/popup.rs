use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{BRAND_SKY, POPUP_BORDER};

/// Bordered modal box centered over the screen.
///
/// Width follows the widest line unless fixed; height follows the number of
/// rows the lines take once wrapped to the inner width.
pub struct PopupDialog<'a> {
    title: &'a str,
    lines: Vec<Line<'a>>,
    fixed_width: Option<u16>,
    border_color: Color,
}

impl<'a> PopupDialog<'a> {
    pub fn new(title: &'a str, lines: Vec<Line<'a>>) -> Self {
        Self {
            title,
            lines,
            fixed_width: None,
            border_color: POPUP_BORDER,
        }
    }

    pub fn fixed_width(mut self, width: u16) -> Self {
        self.fixed_width = Some(width);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let content_width = self.lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let width = self
            .fixed_width
            .unwrap_or_else(|| content_width.saturating_add(4));
        let inner_width = width.min(area.width).saturating_sub(2);
        let height = wrapped_rows(&self.lines, inner_width).saturating_add(2);
        let popup_area = centered_rect_by_size(area, width, height);

        frame.render_widget(Clear, popup_area);
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(BRAND_SKY),
            ))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color));
        let widget = Paragraph::new(self.lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(widget, popup_area);
    }
}

/// Rows needed to show `lines` at `width` columns, at least one per line.
fn wrapped_rows(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    rows.min(usize::from(u16::MAX)) as u16
}

/// Greedy word wrap of `text` to `width` columns.
///
/// Words wider than `width` are split across rows.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;

    for word in text.split_whitespace() {
        let word_width = Span::raw(word).width();
        let needed = if row.is_empty() {
            word_width
        } else {
            row_width + 1 + word_width
        };
        if needed <= width {
            if !row.is_empty() {
                row.push(' ');
            }
            row.push_str(word);
            row_width = needed;
            continue;
        }

        if !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        if word_width <= width {
            row.push_str(word);
            row_width = word_width;
            continue;
        }
        for ch in word.chars() {
            let ch_width = Span::raw(ch.to_string()).width();
            if row_width + ch_width > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(ch);
            row_width += ch_width;
        }
    }
    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}
