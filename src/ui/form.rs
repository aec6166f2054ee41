use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use crate::profile::{ActiveTab, FieldTarget};
use crate::ui::editors;
use crate::ui::profile::ProfileState;
use crate::ui::theme::{BRAND_SKY, BUTTON_BLUE, GLOBAL_BORDER, INACTIVE_TAB, MUTED_TEXT, TEXT};

/// Page title and subtitle.
pub fn title_widget() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            "Meu Perfil",
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Gerencie suas informações pessoais e preferências",
            Style::default().fg(MUTED_TEXT),
        )),
    ])
    .alignment(Alignment::Center)
}

pub fn tabs_widget(active: ActiveTab) -> Tabs<'static> {
    let titles: Vec<Line<'static>> = ActiveTab::ALL
        .iter()
        .enumerate()
        .map(|(idx, tab)| Line::from(format!(" F{} {} ", idx + 1, tab.label())))
        .collect();
    Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(TEXT).bg(INACTIVE_TAB))
        .highlight_style(
            Style::default()
                .fg(TEXT)
                .bg(BRAND_SKY)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" ")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

/// Lines of the active section plus the line index of the focused item.
pub fn section_lines(state: &ProfileState) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut focused_line = 0;
    let mut last_legend = None;

    for (idx, target) in FieldTarget::for_tab(state.active_tab).into_iter().enumerate() {
        let spec = target.spec();
        let show_legend = spec.legend.is_some() && spec.legend != last_legend;
        last_legend = spec.legend;

        let focused = state.focused == idx;
        if focused {
            focused_line = lines.len();
        }
        lines.extend(editors::render(spec, state.value(target), focused, show_legend));
        lines.push(Line::from(""));
    }

    let button_style = if state.submit_focused() {
        focused_line = lines.len();
        Style::default()
            .fg(TEXT)
            .bg(BUTTON_BLUE)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(TEXT).bg(BUTTON_BLUE).add_modifier(Modifier::BOLD)
    };
    lines.push(
        Line::from(Span::styled(
            format!("  {}  ", state.active_tab.submit_label()),
            button_style,
        ))
        .alignment(Alignment::Center),
    );

    (lines, focused_line)
}

/// Scroll offset that keeps `focused_line` visible with a little context.
pub fn scroll_offset(focused_line: usize, viewport: u16) -> u16 {
    let viewport = viewport as usize;
    if viewport == 0 {
        return 0;
    }
    let keep_below = 3.min(viewport.saturating_sub(1));
    focused_line
        .saturating_add(keep_below + 1)
        .saturating_sub(viewport)
        .min(u16::MAX as usize) as u16
}

pub fn render_section(frame: &mut Frame, area: Rect, state: &ProfileState) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", state.active_tab.heading()),
            Style::default().fg(BRAND_SKY).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    let (lines, focused_line) = section_lines(state);
    let offset = scroll_offset(focused_line, inner.height);
    frame.render_widget(Paragraph::new(lines).block(block).scroll((offset, 0)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_scroll_when_focus_fits() {
        assert_eq!(scroll_offset(0, 20), 0);
        assert_eq!(scroll_offset(16, 20), 0);
    }

    #[test]
    fn scrolls_to_keep_focus_visible() {
        assert_eq!(scroll_offset(30, 20), 14);
        assert_eq!(scroll_offset(5, 0), 0);
    }

    #[test]
    fn button_is_last_line() {
        let state = ProfileState::default();
        let (lines, focused) = section_lines(&state);
        assert_eq!(focused, 0);
        let last: String = lines
            .last()
            .unwrap()
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert!(last.contains("Editar Informações Pessoais"));
    }

    #[test]
    fn notification_legend_shown_once() {
        let state = ProfileState::with_tab(ActiveTab::Preferences);
        let (lines, _) = section_lines(&state);
        let legends = lines
            .iter()
            .filter(|line| {
                line.spans
                    .iter()
                    .any(|span| span.content.trim() == "Notificações")
            })
            .count();
        assert_eq!(legends, 1);
    }
}
