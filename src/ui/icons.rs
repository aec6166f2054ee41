//! Fixed glyphs standing in for the page's icons.

use ratatui::style::Style;
use ratatui::text::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Logo,
    User,
    Phone,
    Email,
    Location,
    Facebook,
    Instagram,
    Twitter,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Logo => "✚",
            Self::User => "◉",
            Self::Phone => "☎",
            Self::Email => "✉",
            Self::Location => "⌖",
            Self::Facebook => "f",
            Self::Instagram => "◎",
            Self::Twitter => "X",
        }
    }

    /// The glyph styled by the caller.
    pub fn span(&self, style: Style) -> Span<'static> {
        Span::styled(self.glyph(), style)
    }
}
