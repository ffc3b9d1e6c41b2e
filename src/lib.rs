pub mod cli;
pub mod config;
pub mod feed;
pub mod logging;
pub mod session;
pub mod store;
pub mod sync;
pub mod ui;
