use crate::ui::header::logo_spans;
use crate::ui::icons::Icon;
use crate::ui::theme::{BRAND_TEAL, GLOBAL_BORDER, MUTED_TEXT, SEPARATOR, TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use std::time::{SystemTime, UNIX_EPOCH};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const TAGLINE: &str =
    "Conectando você aos melhores profissionais de saúde de forma simples e segura.";
pub const CONTACT_PHONE: &str = "(11) 91234-5678";
pub const CONTACT_EMAIL: &str = "contato@medsus.com.br";
pub const CONTACT_LOCATION: &str = "São Paulo, SP, Brasil";
pub const KEY_HINTS: &str =
    " F1-F3/Ctrl+N/Ctrl+P: Aba │ Tab/↑↓: Campo │ Ctrl+S: Salvar │ Ctrl+Q: Sair";

pub struct Footer {
    year: i64,
}

impl Footer {
    pub fn new() -> Self {
        Self {
            year: current_year(),
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT);
        let muted = Style::default().fg(MUTED_TEXT);
        let icon_style = Style::default().fg(BRAND_TEAL);
        let separator = Span::styled("  │  ", Style::default().fg(SEPARATOR));

        let mut brand = vec![Span::raw(" ")];
        brand.extend(logo_spans());
        brand.push(Span::styled(format!("  {}", TAGLINE), muted));

        let contact = Line::from(vec![
            Span::raw(" "),
            Icon::Phone.span(icon_style),
            Span::styled(format!(" {}", CONTACT_PHONE), text_style),
            separator.clone(),
            Icon::Email.span(icon_style),
            Span::styled(format!(" {}", CONTACT_EMAIL), text_style),
            separator.clone(),
            Icon::Location.span(icon_style),
            Span::styled(format!(" {}", CONTACT_LOCATION), text_style),
            separator,
            Icon::Facebook.span(muted),
            Span::raw(" "),
            Icon::Instagram.span(muted),
            Span::raw(" "),
            Icon::Twitter.span(muted),
        ]);

        let copyright = format!(
            " © {} MedSUS. Todos os direitos reservados.",
            self.year
        );
        let version = format!("v{} ", VERSION);
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(copyright.chars().count())
            .saturating_sub(version.chars().count());

        let hints_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        Paragraph::new(vec![
            Line::from(brand),
            contact,
            Line::from(vec![
                Span::styled(copyright, muted),
                Span::raw(" ".repeat(padding)),
                Span::styled(version, muted),
            ]),
            Line::from(Span::styled(KEY_HINTS, hints_style)),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

/// Year on the local calendar.
fn current_year() -> i64 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    year_from_unix_secs(shift_to_local(secs, local_offset_secs()))
}

fn shift_to_local(secs: u64, offset_secs: i64) -> u64 {
    (secs as i64).saturating_add(offset_secs).max(0) as u64
}

/// Local timezone offset from UTC, in seconds.
fn local_offset_secs() -> i64 {
    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;
        unsafe {
            let now = libc::time(std::ptr::null_mut());
            let mut tm = MaybeUninit::<libc::tm>::uninit();
            if libc::localtime_r(&now, tm.as_mut_ptr()).is_null() {
                return 0;
            }
            (*tm.as_ptr()).tm_gmtoff as i64
        }
    }
    #[cfg(not(unix))]
    {
        0
    }
}

/// Gregorian year of a unix timestamp, read as UTC.
pub fn year_from_unix_secs(secs: u64) -> i64 {
    // Civil-from-days, counting eras from 0000-03-01.
    let days = (secs / 86_400) as i64 + 719_468;
    let era = days.div_euclid(146_097);
    let day_of_era = days - era * 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_index = (5 * day_of_year + 2) / 153;
    let year = year_of_era + era * 400;
    // Month indices 10 and 11 are January and February of the next year.
    if month_index >= 10 {
        year + 1
    } else {
        year
    }
}
