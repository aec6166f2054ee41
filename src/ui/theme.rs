use ratatui::style::Color;

pub const BRAND_SKY: Color = Color::Rgb(0x0e, 0xa5, 0xe9);
pub const BRAND_TEAL: Color = Color::Rgb(0x14, 0xb8, 0xa6);
pub const BUTTON_BLUE: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x47, 0x55, 0x69);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub const SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const INACTIVE_TAB: Color = Color::Rgb(0x33, 0x41, 0x55);
pub const FOCUS_HIGHLIGHT: Color = Color::Rgb(0x1e, 0x29, 0x3b);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
