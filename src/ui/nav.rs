use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::feed::handle;
use crate::session::{Session, UNKNOWN_USER};
use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, SELECTION_BG};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRow {
    Home,
    Explore,
    Notifications,
    Messages,
    Bookmarks,
    Lists,
    Account,
    More,
}

pub const NAV_ROWS: [NavRow; 8] = [
    NavRow::Home,
    NavRow::Explore,
    NavRow::Notifications,
    NavRow::Messages,
    NavRow::Bookmarks,
    NavRow::Lists,
    NavRow::Account,
    NavRow::More,
];

impl NavRow {
    pub fn title(&self, session: &Session) -> &'static str {
        match self {
            NavRow::Home => "Home",
            NavRow::Explore => "Explore",
            NavRow::Notifications => "Notifications",
            NavRow::Messages => "Messages",
            NavRow::Bookmarks => "Bookmarks",
            NavRow::Lists => "Lists",
            NavRow::Account if session.is_signed_in() => "Sign out",
            NavRow::Account => "Sign In",
            NavRow::More => "More",
        }
    }
}

pub struct NavPanel<'a> {
    session: &'a Session,
    selected: Option<usize>,
}

impl<'a> NavPanel<'a> {
    pub fn new(session: &'a Session, selected: Option<usize>) -> Self {
        Self { session, selected }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let mut lines = Vec::with_capacity(NAV_ROWS.len() + 4);
        for (index, row) in NAV_ROWS.iter().enumerate() {
            let mut style = Style::default().fg(HEADER_TEXT);
            if *row == NavRow::Account {
                style = style.fg(ACCENT).add_modifier(Modifier::BOLD);
            }
            if self.selected == Some(index) {
                style = style.bg(SELECTION_BG);
            }
            lines.push(Line::from(Span::styled(
                format!(" {}", row.title(self.session)),
                style,
            )));
        }

        lines.push(Line::from(""));
        if let Some(identity) = self.session.identity() {
            let name = identity.name.as_deref().unwrap_or(UNKNOWN_USER);
            lines.push(Line::from(Span::styled(
                format!(" {}", name),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!(" {}", handle(name)),
                Style::default().fg(DIM_TEXT),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                " Not signed in",
                Style::default().fg(DIM_TEXT),
            )));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
