use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Composer => " Enter: Tweet │ Ctrl+G: Image │ Ctrl+X: Drop image │ Tab: Feed",
        Focus::ImageUrl => " Enter: Add Image │ Esc: Close",
        Focus::Feed => " ↑/↓: Select │ c: Comments │ n: New tweet │ Ctrl+R: Refresh",
        Focus::Comment => " Enter: Post comment │ Esc: Close",
        Focus::Nav => " ↑/↓: Move │ Enter: Open",
    }
}

pub struct Footer {
    focus: Focus,
}

impl Footer {
    pub fn new(focus: Focus) -> Self {
        Self { focus }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = format!("{} │ Ctrl+L: Sign in/out │ Ctrl+Q: Quit", hints(self.focus));
        let version = format!("v{} ", VERSION);

        // Char count, not bytes
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
