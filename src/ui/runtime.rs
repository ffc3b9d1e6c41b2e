use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::config::UiConfig;
use crate::session::{Identity, Session};
use crate::store::FeedStore;
use crate::sync::{spawn_worker, FeedWorker};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run<S: FeedStore>(
    store: Arc<S>,
    session: Session,
    profile: Identity,
    ui: &UiConfig,
) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("chirp-store")
        .enable_all()
        .build()?;

    let tick_rate = Duration::from_millis(ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let worker_task = spawn_worker(
        runtime.handle(),
        FeedWorker::new(store),
        command_rx,
        events.sender(),
    );

    let mut app = App::new(session, profile, Duration::from_millis(ui.toast_ttl_ms));
    app.set_command_sender(command_tx);

    let (mut terminal, guard) = setup_terminal()?;
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, &text),
            Ok(AppEvent::Tick) => app.on_tick(),
            // Next draw picks up the new size
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Store(event)) => app.on_store_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    drop(app);
    worker_task.abort();
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!("UI loop finished");
    Ok(())
}
