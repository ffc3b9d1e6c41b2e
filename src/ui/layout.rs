use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const NAV_WIDTH: u16 = 24;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub nav: Rect,
    pub composer: Rect,
    pub feed: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect, image_panel_open: bool) -> Regions {
    let [header, body, footer] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .areas(area);

    let nav_width = if body.width > NAV_WIDTH * 3 {
        NAV_WIDTH
    } else {
        0
    };
    let [nav, main] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(nav_width), Constraint::Min(0)])
        .areas(body);

    let composer_height = if image_panel_open { 7 } else { 4 };
    let [composer, feed] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(composer_height), Constraint::Min(0)])
        .areas(main);

    Regions {
        header,
        nav,
        composer,
        feed,
        footer,
    }
}

/// Toast stack in the top-right corner of `area`.
pub fn toast_rect(area: Rect, count: usize, width: u16) -> Rect {
    let width = width.min(area.width);
    let height = (count as u16).saturating_mul(3).min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width,
        height,
    }
}
