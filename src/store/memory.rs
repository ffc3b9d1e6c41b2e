use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

use crate::feed::{Comment, CommentBody, Tweet, TweetBody, TweetRef};

use super::{Endpoint, FeedStore, StoreError, WriteReceipt};

#[derive(Default)]
struct Records {
    /// Newest first, the order the store hands them out.
    tweets: Vec<Tweet>,
    comments: Vec<Comment>,
}

/// In-process store. Append-only, newest-first reads.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Records>,
    next_id: AtomicU64,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    latency: Mutex<Duration>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with a couple of tweets and comments.
    pub fn with_sample_feed() -> Self {
        let store = Self::new();
        let now = Utc::now();
        let first = store.insert_tweet(
            TweetBody {
                text: "Shipping a terminal client for the feed today.".to_string(),
                username: "Grace Hopper".to_string(),
                profile_img: "https://example.com/avatars/grace.png".to_string(),
                image: None,
            },
            now - ChronoDuration::hours(3),
        );
        store.insert_comment(
            CommentBody {
                tweet_id: first.id.clone(),
                comment: "Looks great in an 80x24 window too.".to_string(),
                username: "Alan Turing".to_string(),
                profile_img: "https://example.com/avatars/alan.png".to_string(),
            },
            now - ChronoDuration::hours(2),
        );
        store.insert_tweet(
            TweetBody {
                text: "Anyone else refetching everything after every write?".to_string(),
                username: "Alan Turing".to_string(),
                profile_img: "https://example.com/avatars/alan.png".to_string(),
                image: Some("https://example.com/images/board.png".to_string()),
            },
            now - ChronoDuration::minutes(25),
        );
        store
    }

    /// Delay applied to every call.
    pub fn set_latency(&self, latency: Duration) {
        *self.latency.lock() = latency;
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of all tweets, for assertions.
    pub fn tweets(&self) -> Vec<Tweet> {
        self.records.lock().tweets.clone()
    }

    /// Snapshot of the comments of one tweet, newest first.
    pub fn comments_for(&self, tweet_id: &str) -> Vec<Comment> {
        self.records
            .lock()
            .comments
            .iter()
            .filter(|c| c.tweet_id() == tweet_id)
            .cloned()
            .collect()
    }

    fn next_id(&self, prefix: &str) -> String {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{}", prefix, n)
    }

    fn insert_tweet(&self, body: TweetBody, at: chrono::DateTime<Utc>) -> Tweet {
        let tweet = Tweet {
            id: self.next_id("tweet"),
            created_at: at,
            updated_at: at,
            rev: Uuid::new_v4().to_string(),
            username: body.username,
            profile_img: body.profile_img,
            text: body.text,
            image: body.image,
            block_tweet: false,
        };
        self.records.lock().tweets.insert(0, tweet.clone());
        tweet
    }

    fn insert_comment(&self, body: CommentBody, at: chrono::DateTime<Utc>) -> Comment {
        let comment = Comment {
            id: self.next_id("comment"),
            created_at: at,
            updated_at: at,
            rev: Uuid::new_v4().to_string(),
            username: body.username,
            profile_img: body.profile_img,
            comment: body.comment,
            tweet: TweetRef {
                id: body.tweet_id,
                kind: "reference".to_string(),
            },
        };
        self.records.lock().comments.insert(0, comment.clone());
        comment
    }

    async fn simulate(&self, endpoint: Endpoint, fail: &AtomicBool) -> Result<(), StoreError> {
        let latency = *self.latency.lock();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        if fail.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable { endpoint });
        }
        Ok(())
    }
}

fn receipt<T: serde::Serialize>(record: &T) -> WriteReceipt {
    WriteReceipt {
        status: 200,
        body: serde_json::to_value(record).unwrap_or(serde_json::Value::Null),
    }
}

impl FeedStore for MemoryStore {
    async fn fetch_tweets(&self) -> Result<Vec<Tweet>, StoreError> {
        self.simulate(Endpoint::GetTweets, &self.fail_reads).await?;
        Ok(self.tweets())
    }

    async fn fetch_comments(&self, tweet_id: &str) -> Result<Vec<Comment>, StoreError> {
        self.simulate(Endpoint::GetComments, &self.fail_reads).await?;
        Ok(self.comments_for(tweet_id))
    }

    async fn add_tweet(&self, body: &TweetBody) -> Result<WriteReceipt, StoreError> {
        self.simulate(Endpoint::AddTweet, &self.fail_writes).await?;
        let tweet = self.insert_tweet(body.clone(), Utc::now());
        Ok(receipt(&tweet))
    }

    async fn add_comment(&self, body: &CommentBody) -> Result<WriteReceipt, StoreError> {
        self.simulate(Endpoint::AddComment, &self.fail_writes).await?;
        let comment = self.insert_comment(body.clone(), Utc::now());
        Ok(receipt(&comment))
    }
}
