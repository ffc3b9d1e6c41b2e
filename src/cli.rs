use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "chirp")]
#[command(about = "Terminal client for a tweet and comment feed", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir/chirp/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Store base URL for reads
    #[arg(long)]
    pub base_url: Option<String>,

    /// Store origin for writes
    #[arg(long)]
    pub origin: Option<String>,

    /// Display name used when signing in
    #[arg(long)]
    pub name: Option<String>,

    /// Avatar URL used when signing in
    #[arg(long)]
    pub image: Option<String>,

    /// Start signed in
    #[arg(long)]
    pub signed_in: bool,

    /// Use an in-process sample feed instead of a remote store
    #[arg(long)]
    pub offline: bool,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Layer command-line values over the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.store.base_url = base_url.clone();
        }
        if let Some(origin) = &self.origin {
            config.store.origin = origin.clone();
        }
        if let Some(name) = &self.name {
            config.profile.name = Some(name.clone());
        }
        if let Some(image) = &self.image {
            config.profile.image = Some(image.clone());
        }
        if self.signed_in {
            config.profile.signed_in = true;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}
