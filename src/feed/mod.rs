//! Feed records exchanged with the content store.

mod display;
mod types;

pub use display::{handle, time_ago};
pub use types::{Comment, CommentBody, Tweet, TweetBody, TweetRef};
