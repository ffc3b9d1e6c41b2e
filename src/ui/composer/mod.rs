mod intent;
mod reducer;
mod state;

pub use intent::ComposerIntent;
pub use reducer::ComposerReducer;
pub use state::ComposerState;
