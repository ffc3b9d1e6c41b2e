use tokio::sync::mpsc;

use crate::feed::{Comment, CommentBody, Tweet, TweetBody};
use crate::store::{StoreError, WriteReceipt};
use crate::ui::notify::ToastId;

/// Identity of one mounted tweet item. A tweet that leaves the list and comes back
/// gets a new mount id, so results addressed to the old one are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountId(pub u64);

/// Requests from the UI thread to the sync worker.
#[derive(Debug, Clone)]
pub enum UiCommand {
    LoadTweets,
    LoadComments { tweet_id: String, mount: MountId },
    PostTweet { body: TweetBody },
    PostComment {
        body: CommentBody,
        mount: MountId,
        toast: ToastId,
    },
}

/// Unbounded: the UI thread never blocks and a send fails only once the worker is gone.
pub type UiCommandSender = mpsc::UnboundedSender<UiCommand>;

/// Result of a read, stamped with the order in which it was issued.
#[derive(Debug)]
pub struct Fetched<T> {
    pub seq: u64,
    pub result: Result<T, StoreError>,
}

/// Outcome of a command, delivered back to the UI thread.
#[derive(Debug)]
pub enum StoreEvent {
    TweetsLoaded(Fetched<Vec<Tweet>>),
    CommentsLoaded {
        tweet_id: String,
        mount: MountId,
        fetched: Fetched<Vec<Comment>>,
    },
    /// A confirmed write carries the list read right after it.
    TweetPosted {
        result: Result<(WriteReceipt, Fetched<Vec<Tweet>>), StoreError>,
    },
    CommentPosted {
        tweet_id: String,
        mount: MountId,
        toast: ToastId,
        result: Result<(WriteReceipt, Fetched<Vec<Comment>>), StoreError>,
    },
}
