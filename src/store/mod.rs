//! Access to the external content store.
//!
//! The store is only reachable through four endpoints: two reads (all tweets, comments
//! of one tweet) and two writes (add tweet, add comment). [`FeedStore`] is the seam the
//! rest of the crate depends on; [`HttpStore`] talks to a real deployment and
//! [`MemoryStore`] keeps records in-process for offline use.

mod error;
mod http;
mod memory;

use std::fmt;
use std::future::Future;

use crate::feed::{Comment, CommentBody, Tweet, TweetBody};

pub use error::StoreError;
pub use http::HttpStore;
pub use memory::MemoryStore;

/// The four store endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    GetTweets,
    GetComments,
    AddTweet,
    AddComment,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::GetTweets => "getTweets",
            Endpoint::GetComments => "getComments",
            Endpoint::AddTweet => "addTweet",
            Endpoint::AddComment => "addComment",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::GetTweets => "/api/getTweets",
            Endpoint::GetComments => "/api/getComments",
            Endpoint::AddTweet => "/api/addTweet",
            Endpoint::AddComment => "/api/addComment",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded body of a confirmed write. Field layout is store-defined.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteReceipt {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Read/write access to tweets and comments.
///
/// Reads return records in the order the store delivers them.
pub trait FeedStore: Send + Sync + 'static {
    fn fetch_tweets(&self) -> impl Future<Output = Result<Vec<Tweet>, StoreError>> + Send;

    fn fetch_comments(
        &self,
        tweet_id: &str,
    ) -> impl Future<Output = Result<Vec<Comment>, StoreError>> + Send;

    fn add_tweet(
        &self,
        body: &TweetBody,
    ) -> impl Future<Output = Result<WriteReceipt, StoreError>> + Send;

    fn add_comment(
        &self,
        body: &CommentBody,
    ) -> impl Future<Output = Result<WriteReceipt, StoreError>> + Send;
}

/// Fail-soft comment read: any failure degrades to an empty list.
pub async fn comments_or_empty<S: FeedStore>(store: &S, tweet_id: &str) -> Vec<Comment> {
    match store.fetch_comments(tweet_id).await {
        Ok(comments) => comments,
        Err(err) => {
            tracing::warn!(
                tweet_id,
                kind = err.kind(),
                "Comment fetch failed, showing none: {}",
                err
            );
            Vec::new()
        }
    }
}
