use std::time::{Duration, Instant};

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::feed::{Comment, CommentBody, Tweet, TweetBody};

use super::{Endpoint, FeedStore, StoreError, WriteReceipt};

const MAX_ERROR_BODY: usize = 200;

/// Store client over HTTP. Reads go to `base_url`, writes to `origin`.
pub struct HttpStore {
    client: Client,
    base_url: String,
    origin: String,
}

impl HttpStore {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()
            .map_err(|e| StoreError::InvalidUrl {
                url: config.base_url.clone(),
                reason: format!("failed to build HTTP client: {}", e),
            })?;

        let store = Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            origin: config.origin.trim_end_matches('/').to_string(),
        };
        // Surface a bad address at startup rather than on first request.
        store.url(&store.base_url, Endpoint::GetTweets)?;
        store.url(&store.origin, Endpoint::AddTweet)?;
        Ok(store)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn url(&self, root: &str, endpoint: Endpoint) -> Result<Url, StoreError> {
        let raw = format!("{}{}", root, endpoint.path());
        Url::parse(&raw).map_err(|e| StoreError::InvalidUrl {
            url: raw,
            reason: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        url: Url,
    ) -> Result<T, StoreError> {
        let request_id = Uuid::new_v4();
        let started = Instant::now();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| StoreError::Transport { endpoint, source })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| StoreError::Transport { endpoint, source })?;

        tracing::debug!(
            %request_id,
            endpoint = endpoint.as_str(),
            status = status.as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            bytes = bytes.len(),
            "store read"
        );

        if !status.is_success() {
            return Err(StoreError::Status {
                endpoint,
                status: status.as_u16(),
                message: error_excerpt(&bytes),
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| StoreError::Decode {
            endpoint,
            message: e.to_string(),
        })
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<WriteReceipt, StoreError> {
        let url = self.url(&self.origin, endpoint)?;
        let request_id = Uuid::new_v4();
        let started = Instant::now();
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|source| StoreError::Transport { endpoint, source })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| StoreError::Transport { endpoint, source })?;

        tracing::info!(
            %request_id,
            endpoint = endpoint.as_str(),
            status = status.as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            "store write"
        );

        if !status.is_success() {
            return Err(StoreError::Status {
                endpoint,
                status: status.as_u16(),
                message: error_excerpt(&bytes),
            });
        }

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Decode {
                endpoint,
                message: e.to_string(),
            })?
        };

        Ok(WriteReceipt {
            status: status.as_u16(),
            body,
        })
    }
}

impl FeedStore for HttpStore {
    async fn fetch_tweets(&self) -> Result<Vec<Tweet>, StoreError> {
        let url = self.url(&self.base_url, Endpoint::GetTweets)?;
        self.get_json(Endpoint::GetTweets, url).await
    }

    async fn fetch_comments(&self, tweet_id: &str) -> Result<Vec<Comment>, StoreError> {
        let mut url = self.url(&self.base_url, Endpoint::GetComments)?;
        url.query_pairs_mut().append_pair("tweetId", tweet_id);
        self.get_json(Endpoint::GetComments, url).await
    }

    async fn add_tweet(&self, body: &TweetBody) -> Result<WriteReceipt, StoreError> {
        self.post_json(Endpoint::AddTweet, body).await
    }

    async fn add_comment(&self, body: &CommentBody) -> Result<WriteReceipt, StoreError> {
        self.post_json(Endpoint::AddComment, body).await
    }
}

fn error_excerpt(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let text = text.trim();
    if text.is_empty() {
        return "empty response".to_string();
    }
    text.chars().take(MAX_ERROR_BODY).collect()
}
