use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use chirp::cli::Cli;
use chirp::config::Config;
use chirp::logging::init_tracing;
use chirp::session::Session;
use chirp::store::{HttpStore, MemoryStore};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::read_from(&config_path).context("Failed to load configuration")?;
    cli.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    let log_path = init_tracing(&config.logging).context("Failed to open log file")?;
    tracing::info!(log = %log_path.display(), "chirp {} starting", env!("CARGO_PKG_VERSION"));

    let profile = config.profile.identity();
    let session = if config.profile.signed_in {
        Session::signed_in(profile.clone())
    } else {
        Session::signed_out()
    };

    if cli.offline {
        tracing::info!("Offline mode, using sample feed");
        let store = Arc::new(MemoryStore::with_sample_feed());
        chirp::ui::run(store, session, profile, &config.ui)?;
    } else {
        let store = HttpStore::new(&config.store).context("Failed to build store client")?;
        tracing::info!(
            base_url = store.base_url(),
            origin = store.origin(),
            "Using remote store"
        );
        chirp::ui::run(Arc::new(store), session, profile, &config.ui)?;
    }

    Ok(())
}
