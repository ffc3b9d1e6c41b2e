//! Model-View-Intent (MVI) primitives for the feed UI.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Store results re-enter the loop as intents, so every state change of the
//! composer and of a comment thread goes through its reducer.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
