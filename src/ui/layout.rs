use ratatui::layout::{Constraint, Layout, Rect};

pub const HEADER_HEIGHT: u16 = 3;
pub const TITLE_HEIGHT: u16 = 2;
pub const TABS_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 6;

/// Screen regions of the profile page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellRegions {
    pub header: Rect,
    pub title: Rect,
    pub tabs: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> ShellRegions {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(TITLE_HEIGHT),
        Constraint::Length(TABS_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ShellRegions {
        header: chunks[0],
        title: chunks[1],
        tabs: chunks[2],
        body: chunks[3],
        footer: chunks[4],
    }
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
