use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x1d, 0xa1, 0xf2);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const DIM_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SELECTION_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const THREAD_RULE: Color = Color::Rgb(0x1d, 0x4e, 0x6e);
