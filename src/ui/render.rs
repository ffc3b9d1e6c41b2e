use chrono::{DateTime, Utc};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::feed::{handle, time_ago, Comment};
use crate::ui::app::{App, Focus};
use crate::ui::feed::TweetItem;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, toast_rect};
use crate::ui::nav::NavPanel;
use crate::ui::notify::{Toast, ToastKind};
use crate::ui::theme::{
    ACCENT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER, SELECTION_BG, STATUS_ERROR,
    STATUS_OK, THREAD_RULE,
};
use crate::ui::thread::LoadStatus;

const CURSOR: &str = "▏";
const TOAST_WIDTH: u16 = 36;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area, app.composer().image_panel_open);
    let now = Utc::now();

    let header = Header::new(app.session(), app.feed().status(), app.feed().items().len());
    frame.render_widget(header.widget(), regions.header);

    if regions.nav.width > 0 {
        let selected = (app.focus() == Focus::Nav).then_some(app.nav_selection());
        frame.render_widget(NavPanel::new(app.session(), selected).widget(), regions.nav);
    }

    draw_composer(frame, app, regions.composer);
    draw_feed(frame, app, regions.feed, now);

    let footer = Footer::new(app.focus());
    frame.render_widget(footer.widget(regions.footer), regions.footer);

    draw_toasts(frame, app.toasts().visible(), area);
}

fn draw_composer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let composer = app.composer();
    let focused = matches!(app.focus(), Focus::Composer | Focus::ImageUrl);
    let mut lines = Vec::new();

    let text_line = if composer.text.is_empty() {
        let mut spans = vec![Span::styled(
            "What's Happening?",
            Style::default().fg(DIM_TEXT),
        )];
        if app.focus() == Focus::Composer {
            spans.insert(0, Span::raw(CURSOR));
        }
        Line::from(spans)
    } else {
        let mut text = composer.text.clone();
        if app.focus() == Focus::Composer {
            text.push_str(CURSOR);
        }
        Line::from(Span::styled(text, Style::default().fg(HEADER_TEXT)))
    };
    lines.push(text_line);

    let button_style = if app.can_submit_tweet() {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DIM_TEXT)
    };
    let button = if composer.submitting {
        "[ Posting… ]"
    } else {
        "[ Tweet ]"
    };
    let mut actions = vec![Span::styled("🖼 ", Style::default().fg(ACCENT))];
    if let Some(url) = composer.image_url() {
        actions.push(Span::styled(
            format!("{}  ", url),
            Style::default().fg(DIM_TEXT),
        ));
    }
    actions.push(Span::styled(button, button_style));
    lines.push(Line::from(actions));

    if composer.image_panel_open {
        let mut pending = composer.pending_image.clone();
        if app.focus() == Focus::ImageUrl {
            pending.push_str(CURSOR);
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Image URL: ", Style::default().fg(DIM_TEXT)),
            Span::styled(pending, Style::default().fg(HEADER_TEXT)),
        ]));
        lines.push(Line::from(Span::styled(
            "[ Add Image ]",
            Style::default().fg(ACCENT),
        )));
    }

    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(widget, area);
}

fn draw_feed(frame: &mut Frame<'_>, app: &App, area: Rect, now: DateTime<Utc>) {
    frame.render_widget(Clear, area);
    let feed = app.feed();

    if feed.items().is_empty() {
        let message = match feed.status() {
            LoadStatus::Loading | LoadStatus::Idle => "Loading tweets…".to_string(),
            LoadStatus::Failed(reason) => format!("Could not load tweets: {}", reason),
            LoadStatus::Loaded => "No tweets yet.".to_string(),
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(DIM_TEXT),
            ))),
            area,
        );
        return;
    }

    let mut lines = Vec::new();
    let mut selected_top = 0usize;
    for (index, item) in feed.items().iter().enumerate() {
        let selected = index == feed.selected();
        if selected {
            selected_top = lines.len();
        }
        let comment_focus = selected && app.focus() == Focus::Comment;
        tweet_lines(&mut lines, item, selected, comment_focus, now);
        lines.push(Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(GLOBAL_BORDER),
        )));
    }

    let scroll = selected_top.saturating_sub(area.height as usize / 4) as u16;
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}

fn tweet_lines(
    lines: &mut Vec<Line<'static>>,
    item: &TweetItem,
    selected: bool,
    comment_focus: bool,
    now: DateTime<Utc>,
) {
    let tweet = &item.tweet;
    let thread = &item.thread;
    let row_style = if selected {
        Style::default().bg(SELECTION_BG)
    } else {
        Style::default()
    };

    let mut author = vec![
        Span::styled(
            tweet.username.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} · {}", handle(&tweet.username), time_ago(tweet.created_at, now)),
            Style::default().fg(DIM_TEXT),
        ),
    ];
    if tweet.block_tweet {
        author.push(Span::styled(" [blocked]", Style::default().fg(STATUS_ERROR)));
    }
    lines.push(Line::from(author).style(row_style));
    lines.push(
        Line::from(Span::styled(
            tweet.text.clone(),
            Style::default().fg(HEADER_TEXT),
        ))
        .style(row_style),
    );
    if let Some(url) = tweet.image_url() {
        lines.push(Line::from(Span::styled(
            format!("🖼  {}", url),
            Style::default().fg(ACCENT),
        )));
    }

    let status = match &thread.status {
        LoadStatus::Loading => " loading…".to_string(),
        LoadStatus::Failed(reason) => format!(" ({})", reason),
        LoadStatus::Idle | LoadStatus::Loaded => String::new(),
    };
    lines.push(Line::from(vec![
        Span::styled(
            format!("💬 {}", thread.comments.len()),
            Style::default().fg(DIM_TEXT),
        ),
        Span::styled(status, Style::default().fg(DIM_TEXT)),
        Span::styled("   🔁   ♡   ⇪", Style::default().fg(DIM_TEXT)),
    ]));

    if thread.is_panel_visible() {
        let mut draft = thread.draft.clone();
        if comment_focus {
            draft.push_str(CURSOR);
        }
        let placeholder = thread.draft.is_empty() && !comment_focus;
        lines.push(Line::from(vec![
            Span::styled("  › ", Style::default().fg(ACCENT)),
            if placeholder {
                Span::styled("Write a comment…", Style::default().fg(DIM_TEXT))
            } else {
                Span::styled(draft, Style::default().fg(HEADER_TEXT))
            },
            Span::styled("  [ Post ]", Style::default().fg(ACCENT)),
        ]));
    }

    for comment in &thread.comments {
        comment_lines(lines, comment, now);
    }
}

fn comment_lines(lines: &mut Vec<Line<'static>>, comment: &Comment, now: DateTime<Utc>) {
    let rule = Span::styled("  ┃ ", Style::default().fg(THREAD_RULE));
    lines.push(Line::from(vec![
        rule.clone(),
        Span::styled(
            comment.username.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " {} · {}",
                handle(&comment.username),
                time_ago(comment.created_at, now)
            ),
            Style::default().fg(DIM_TEXT),
        ),
    ]));
    lines.push(Line::from(vec![
        rule,
        Span::styled(comment.comment.clone(), Style::default().fg(HEADER_TEXT)),
    ]));
}

fn draw_toasts(frame: &mut Frame<'_>, toasts: &[Toast], area: Rect) {
    if toasts.is_empty() {
        return;
    }
    let stack = toast_rect(area, toasts.len(), TOAST_WIDTH);
    for (index, toast) in toasts.iter().enumerate() {
        let y = stack.y + index as u16 * 3;
        if y + 3 > stack.y + stack.height {
            break;
        }
        let rect = Rect {
            x: stack.x,
            y,
            width: stack.width,
            height: 3,
        };
        let (marker, color) = match toast.kind {
            ToastKind::Loading => ("…", DIM_TEXT),
            ToastKind::Success => ("✓", STATUS_OK),
            ToastKind::Failure => ("✗", STATUS_ERROR),
            ToastKind::Info => (toast.icon.unwrap_or("•"), ACCENT),
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!(" {} ", marker), Style::default().fg(color)),
                Span::styled(toast.message.clone(), Style::default().fg(HEADER_TEXT)),
            ]))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(POPUP_BORDER)),
            ),
            rect,
        );
    }
}
