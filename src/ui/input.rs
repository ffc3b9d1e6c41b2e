use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Focus};
use crate::ui::composer::ComposerIntent;
use crate::ui::thread::ThreadIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'l') {
        app.toggle_session();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.refresh_tweets();
        return;
    }
    if matches!(key.code, KeyCode::Tab) {
        app.cycle_focus();
        return;
    }

    match app.focus() {
        Focus::Composer => composer_key(app, key),
        Focus::ImageUrl => image_url_key(app, key),
        Focus::Feed => feed_key(app, key),
        Focus::Comment => comment_key(app, key),
        Focus::Nav => nav_key(app, key),
    }
}

/// Bracketed paste goes into whichever text field has focus.
pub fn handle_paste(app: &mut App, text: &str) {
    let text = text.replace(['\r', '\n'], " ");
    match app.focus() {
        Focus::Composer => {
            let joined = format!("{}{}", app.composer().text, text);
            app.dispatch_composer(ComposerIntent::SetText(joined));
        }
        Focus::ImageUrl => {
            let joined = format!("{}{}", app.composer().pending_image, text.trim());
            app.dispatch_composer(ComposerIntent::SetPendingImage(joined));
        }
        Focus::Comment => {
            for ch in text.chars() {
                app.dispatch_selected_thread(ThreadIntent::DraftInsertChar(ch));
            }
        }
        Focus::Feed | Focus::Nav => {}
    }
}

fn composer_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'g') {
        app.toggle_image_panel();
        return;
    }
    if is_ctrl_char(key, 'x') {
        app.dispatch_composer(ComposerIntent::ClearImage);
        return;
    }
    match key.code {
        KeyCode::Enter => {
            if let Err(reason) = app.submit_tweet() {
                tracing::debug!("Tweet submit ignored: {}", reason);
            }
        }
        KeyCode::Backspace => app.dispatch_composer(ComposerIntent::Backspace),
        KeyCode::Esc => app.set_focus(Focus::Feed),
        KeyCode::Char(ch) if is_plain(key) => {
            app.dispatch_composer(ComposerIntent::InsertChar(ch))
        }
        _ => {}
    }
}

fn image_url_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.attach_image(),
        KeyCode::Esc => app.toggle_image_panel(),
        KeyCode::Backspace => app.dispatch_composer(ComposerIntent::PendingBackspace),
        KeyCode::Char(ch) if is_plain(key) => {
            app.dispatch_composer(ComposerIntent::PendingInsertChar(ch))
        }
        _ => {}
    }
}

fn feed_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Enter | KeyCode::Char('c') => app.toggle_comments(),
        KeyCode::Char('n') => app.set_focus(Focus::Composer),
        _ => {}
    }
}

fn comment_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if let Err(reason) = app.submit_comment() {
                tracing::debug!("Comment submit ignored: {}", reason);
            }
        }
        KeyCode::Esc => {
            app.dispatch_selected_thread(ThreadIntent::ClosePanel);
            app.set_focus(Focus::Feed);
        }
        KeyCode::Backspace => app.dispatch_selected_thread(ThreadIntent::DraftBackspace),
        KeyCode::Char(ch) if is_plain(key) => {
            app.dispatch_selected_thread(ThreadIntent::DraftInsertChar(ch))
        }
        _ => {}
    }
}

fn nav_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_nav_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_nav_selection(1),
        KeyCode::Enter => app.activate_nav(),
        _ => {}
    }
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
