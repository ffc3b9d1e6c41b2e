mod intent;
mod reducer;
mod state;

pub use intent::ThreadIntent;
pub use reducer::ThreadReducer;
pub use state::{CommentPanel, CommentThreadState, LoadStatus};
