//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_store;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chirp::config::StoreConfig;
use chirp::session::{Identity, Session};
use chirp::store::FeedStore;
use chirp::sync::{FeedWorker, UiCommand};
use chirp::ui::app::App;
use tempfile::TempDir;
use tokio::sync::mpsc;

pub use mock_store::MockStore;

pub fn ada() -> Identity {
    Identity::new("Ada Lovelace", "https://img/ada.png")
}

/// Store config pointing both reads and writes at `url`.
pub fn store_config(url: &str) -> StoreConfig {
    StoreConfig {
        base_url: url.to_string(),
        origin: url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- App harness --------------------------------------------------------------

/// Drives an `App` against a worker without a terminal.
///
/// Commands the app issues are queued and only executed on `pump`, so tests can
/// decide which results arrive and in which order.
pub struct Harness<S> {
    pub app: App,
    pub worker: FeedWorker<S>,
    commands: mpsc::UnboundedReceiver<UiCommand>,
}

impl<S: FeedStore> Harness<S> {
    pub fn new(store: Arc<S>, session: Session) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut app = App::new(session, ada(), Duration::from_secs(3));
        app.set_command_sender(tx);
        Self {
            app,
            worker: FeedWorker::new(store),
            commands: rx,
        }
    }

    /// Commands issued by the app and not yet executed.
    pub fn take_commands(&mut self) -> Vec<UiCommand> {
        let mut commands = Vec::new();
        while let Ok(command) = self.commands.try_recv() {
            commands.push(command);
        }
        commands
    }

    /// Execute queued commands in issue order, feeding results back, until idle.
    pub async fn pump(&mut self) {
        loop {
            let commands = self.take_commands();
            if commands.is_empty() {
                break;
            }
            for command in commands {
                let event = self.worker.execute(command).await;
                self.app.on_store_event(event);
            }
        }
    }

    /// Start the app and settle the initial reads.
    pub async fn started(mut self) -> Self {
        self.app.start();
        self.pump().await;
        self
    }
}

/// Poll `check` until it holds or `timeout` passes.
pub async fn eventually(timeout: Duration, mut check: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}
