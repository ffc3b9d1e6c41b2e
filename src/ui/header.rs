use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::session::{Session, UNKNOWN_USER};
use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use crate::ui::thread::LoadStatus;

pub struct Header<'a> {
    session: &'a Session,
    feed_status: &'a LoadStatus,
    tweet_count: usize,
}

impl<'a> Header<'a> {
    pub fn new(session: &'a Session, feed_status: &'a LoadStatus, tweet_count: usize) -> Self {
        Self {
            session,
            feed_status,
            tweet_count,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let separator = Span::styled("  │  ", Style::default().fg(GLOBAL_BORDER));
        let (status, status_style) = match self.feed_status {
            LoadStatus::Idle => ("idle".to_string(), Style::default().fg(DIM_TEXT)),
            LoadStatus::Loading => ("loading…".to_string(), Style::default().fg(DIM_TEXT)),
            LoadStatus::Loaded => (
                format!("{} tweets", self.tweet_count),
                Style::default().fg(STATUS_OK),
            ),
            LoadStatus::Failed(_) => ("offline".to_string(), Style::default().fg(STATUS_ERROR)),
        };
        let who = match self.session.identity() {
            Some(identity) => identity
                .name
                .clone()
                .unwrap_or_else(|| UNKNOWN_USER.to_string()),
            None => "signed out".to_string(),
        };

        let line = Line::from(vec![
            Span::styled(
                "  Home",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            separator.clone(),
            Span::styled(status, status_style),
            separator,
            Span::styled(who, Style::default().fg(HEADER_TEXT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
