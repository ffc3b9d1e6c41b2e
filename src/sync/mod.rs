//! Bridge between the UI event loop and the async store.
//!
//! ```text
//! UI thread ──UiCommand──→ worker (tokio) ──store calls──→ FeedStore
//!     ↑                                                      │
//!     └────────────── AppEvent::Store(StoreEvent) ←──────────┘
//! ```

mod command;
mod worker;

pub use command::{Fetched, MountId, StoreEvent, UiCommand, UiCommandSender};
pub use worker::{spawn_worker, FeedWorker};
