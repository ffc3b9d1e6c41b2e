//! In-process HTTP store speaking the four feed endpoints.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Value,
}

#[derive(Default)]
struct Records {
    tweets: Vec<Value>,
    comments: Vec<Value>,
    requests: Vec<CapturedRequest>,
    failing: HashSet<&'static str>,
    delay_ms: u64,
    next_id: u64,
}

#[derive(Clone, Default)]
struct MockState {
    records: Arc<Mutex<Records>>,
}

/// Mock content store for testing.
pub struct MockStore {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockStore {
    pub async fn start() -> Self {
        let state = MockState::default();
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/api/getTweets", get(get_tweets))
            .route("/api/getComments", get(get_comments))
            .route("/api/addTweet", post(add_tweet))
            .route("/api/addComment", post(add_comment))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock store");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Seed a tweet directly, as if another client had posted it.
    pub fn seed_tweet(&self, username: &str, text: &str) -> String {
        let mut records = self.state.records.lock();
        let id = next_id(&mut records, "tweet");
        let tweet = tweet_record(&id, username, "https://img/seed.png", text, None);
        records.tweets.insert(0, tweet);
        id
    }

    pub fn seed_comment(&self, tweet_id: &str, username: &str, comment: &str) -> String {
        let mut records = self.state.records.lock();
        let id = next_id(&mut records, "comment");
        let record = comment_record(&id, tweet_id, username, "https://img/seed.png", comment);
        records.comments.insert(0, record);
        id
    }

    /// Make `endpoint` (e.g. "addComment") answer 500.
    pub fn fail(&self, endpoint: &'static str) {
        self.state.records.lock().failing.insert(endpoint);
    }

    pub fn recover(&self, endpoint: &'static str) {
        self.state.records.lock().failing.remove(endpoint);
    }

    pub fn set_delay(&self, delay: Duration) {
        self.state.records.lock().delay_ms = delay.as_millis() as u64;
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.records.lock().requests.clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<CapturedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    pub fn tweet_count(&self) -> usize {
        self.state.records.lock().tweets.len()
    }

    pub fn comment_count(&self, tweet_id: &str) -> usize {
        self.state
            .records
            .lock()
            .comments
            .iter()
            .filter(|c| c["tweet"]["_ref"] == tweet_id)
            .count()
    }
}

impl Drop for MockStore {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

fn next_id(records: &mut Records, prefix: &str) -> String {
    records.next_id += 1;
    format!("{}-{}", prefix, records.next_id)
}

fn tweet_record(
    id: &str,
    username: &str,
    profile_img: &str,
    text: &str,
    image: Option<&str>,
) -> Value {
    let now = Utc::now().to_rfc3339();
    let mut record = json!({
        "_id": id,
        "_type": "tweet",
        "_rev": "rev-1",
        "_createdAt": now,
        "_updatedAt": now,
        "username": username,
        "profileImg": profile_img,
        "text": text,
        "blockTweet": false,
    });
    if let Some(image) = image {
        record["image"] = json!(image);
    }
    record
}

fn comment_record(
    id: &str,
    tweet_id: &str,
    username: &str,
    profile_img: &str,
    comment: &str,
) -> Value {
    let now = Utc::now().to_rfc3339();
    json!({
        "_id": id,
        "_type": "comment",
        "_rev": "rev-1",
        "_createdAt": now,
        "_updatedAt": now,
        "username": username,
        "profileImg": profile_img,
        "comment": comment,
        "tweet": { "_ref": tweet_id, "_type": "reference" },
    })
}

/// Record the request, apply delay, and report whether the endpoint should fail.
async fn enter(
    state: &MockState,
    method: &str,
    endpoint: &'static str,
    query: HashMap<String, String>,
    body: Value,
) -> bool {
    let (delay_ms, failing) = {
        let mut records = state.records.lock();
        records.requests.push(CapturedRequest {
            method: method.to_string(),
            path: format!("/api/{}", endpoint),
            query,
            body,
        });
        (records.delay_ms, records.failing.contains(endpoint))
    };
    if delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
    failing
}

fn failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "injected failure"})),
    )
        .into_response()
}

async fn get_tweets(State(state): State<MockState>) -> Response {
    if enter(&state, "GET", "getTweets", HashMap::new(), Value::Null).await {
        return failure();
    }
    let tweets = state.records.lock().tweets.clone();
    Json(Value::Array(tweets)).into_response()
}

async fn get_comments(
    State(state): State<MockState>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let tweet_id = query.get("tweetId").cloned().unwrap_or_default();
    if enter(&state, "GET", "getComments", query, Value::Null).await {
        return failure();
    }
    let comments: Vec<Value> = state
        .records
        .lock()
        .comments
        .iter()
        .filter(|c| c["tweet"]["_ref"] == tweet_id.as_str())
        .cloned()
        .collect();
    Json(Value::Array(comments)).into_response()
}

async fn add_tweet(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    if enter(&state, "POST", "addTweet", HashMap::new(), body.clone()).await {
        return failure();
    }
    let mut records = state.records.lock();
    let id = next_id(&mut records, "tweet");
    let record = tweet_record(
        &id,
        body["username"].as_str().unwrap_or_default(),
        body["profileImg"].as_str().unwrap_or_default(),
        body["text"].as_str().unwrap_or_default(),
        body["image"].as_str(),
    );
    records.tweets.insert(0, record);
    Json(json!({"transactionId": format!("tx-{}", id), "results": [{"id": id}]})).into_response()
}

async fn add_comment(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    if enter(&state, "POST", "addComment", HashMap::new(), body.clone()).await {
        return failure();
    }
    let mut records = state.records.lock();
    let id = next_id(&mut records, "comment");
    let record = comment_record(
        &id,
        body["tweetId"].as_str().unwrap_or_default(),
        body["username"].as_str().unwrap_or_default(),
        body["profileImg"].as_str().unwrap_or_default(),
        body["comment"].as_str().unwrap_or_default(),
    );
    records.comments.insert(0, record);
    Json(json!({"transactionId": format!("tx-{}", id), "results": [{"id": id}]})).into_response()
}
