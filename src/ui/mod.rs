pub mod app;
pub mod composer;
pub mod events;
pub mod feed;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod nav;
pub mod notify;
pub mod render;
pub mod runtime;
pub mod submit;
pub mod terminal_guard;
pub mod theme;
pub mod thread;

pub use runtime::run;
