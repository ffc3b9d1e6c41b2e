use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::feed::{Comment, CommentBody, Tweet, TweetBody};
use crate::store::FeedStore;
use crate::ui::events::AppEvent;
use crate::ui::notify::ToastId;

use super::command::{Fetched, MountId, StoreEvent, UiCommand};

/// Executes UI commands against a store.
///
/// Every read takes a sequence number from a shared counter right before the
/// request goes out. The store is append-only, so a read issued later never sees
/// less than one issued earlier; consumers keep the highest sequence they applied.
pub struct FeedWorker<S> {
    store: Arc<S>,
    seq: Arc<AtomicU64>,
}

impl<S> Clone for FeedWorker<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            seq: Arc::clone(&self.seq),
        }
    }
}

impl<S: FeedStore> FeedWorker<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn execute(&self, command: UiCommand) -> StoreEvent {
        match command {
            UiCommand::LoadTweets => StoreEvent::TweetsLoaded(self.fetch_tweets().await),
            UiCommand::LoadComments { tweet_id, mount } => {
                let fetched = self.fetch_comments(&tweet_id).await;
                StoreEvent::CommentsLoaded {
                    tweet_id,
                    mount,
                    fetched,
                }
            }
            UiCommand::PostTweet { body } => self.post_tweet(body).await,
            UiCommand::PostComment { body, mount, toast } => {
                self.post_comment(body, mount, toast).await
            }
        }
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn fetch_tweets(&self) -> Fetched<Vec<Tweet>> {
        let seq = self.next_seq();
        let result = self.store.fetch_tweets().await;
        match &result {
            Ok(tweets) => tracing::debug!(seq, count = tweets.len(), "Tweets fetched"),
            Err(err) => tracing::warn!(seq, kind = err.kind(), "Tweet fetch failed: {}", err),
        }
        Fetched { seq, result }
    }

    async fn fetch_comments(&self, tweet_id: &str) -> Fetched<Vec<Comment>> {
        let seq = self.next_seq();
        let result = self.store.fetch_comments(tweet_id).await;
        match &result {
            Ok(comments) => {
                tracing::debug!(seq, tweet_id, count = comments.len(), "Comments fetched")
            }
            Err(err) => tracing::warn!(
                seq,
                tweet_id,
                kind = err.kind(),
                "Comment fetch failed: {}",
                err
            ),
        }
        Fetched { seq, result }
    }

    async fn post_tweet(&self, body: TweetBody) -> StoreEvent {
        match self.store.add_tweet(&body).await {
            Ok(receipt) => {
                tracing::info!(status = receipt.status, "Tweet posted");
                let refreshed = self.fetch_tweets().await;
                StoreEvent::TweetPosted {
                    result: Ok((receipt, refreshed)),
                }
            }
            Err(err) => {
                tracing::warn!(kind = err.kind(), "Tweet write failed: {}", err);
                StoreEvent::TweetPosted { result: Err(err) }
            }
        }
    }

    async fn post_comment(&self, body: CommentBody, mount: MountId, toast: ToastId) -> StoreEvent {
        let tweet_id = body.tweet_id.clone();
        match self.store.add_comment(&body).await {
            Ok(receipt) => {
                tracing::info!(tweet_id = %tweet_id, status = receipt.status, "Comment posted");
                let refreshed = self.fetch_comments(&tweet_id).await;
                StoreEvent::CommentPosted {
                    tweet_id,
                    mount,
                    toast,
                    result: Ok((receipt, refreshed)),
                }
            }
            Err(err) => {
                tracing::warn!(
                    tweet_id = %tweet_id,
                    kind = err.kind(),
                    "Comment write failed: {}",
                    err
                );
                StoreEvent::CommentPosted {
                    tweet_id,
                    mount,
                    toast,
                    result: Err(err),
                }
            }
        }
    }
}

/// Run the worker on `runtime` until the command channel closes.
///
/// Each command gets its own task; commands are not serialized.
pub fn spawn_worker<S: FeedStore>(
    runtime: &Handle,
    worker: FeedWorker<S>,
    mut commands: mpsc::UnboundedReceiver<UiCommand>,
    events: std::sync::mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        while let Some(command) = commands.recv().await {
            let worker = worker.clone();
            let events = events.clone();
            tokio::spawn(async move {
                let event = worker.execute(command).await;
                if events.send(AppEvent::Store(event)).is_err() {
                    tracing::trace!("Store event dropped (UI gone)");
                }
            });
        }
        tracing::debug!("Command channel closed, sync worker exiting");
    })
}
