use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post record as delivered by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_updatedAt")]
    pub updated_at: DateTime<Utc>,
    /// Store revision marker.
    #[serde(rename = "_rev", default)]
    pub rev: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub profile_img: String,
    pub text: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Moderation flag set by the store.
    #[serde(default)]
    pub block_tweet: bool,
}

impl Tweet {
    /// Image URL, if one is attached. The store may hand back an empty string.
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Back-reference from a comment to its owning tweet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetRef {
    #[serde(rename = "_ref")]
    pub id: String,
    #[serde(rename = "_type", default = "reference_kind")]
    pub kind: String,
}

fn reference_kind() -> String {
    "reference".to_string()
}

/// A reply record. It refers to exactly one tweet by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "_rev", default)]
    pub rev: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub profile_img: String,
    pub comment: String,
    pub tweet: TweetRef,
}

impl Comment {
    pub fn tweet_id(&self) -> &str {
        &self.tweet.id
    }
}

/// Payload for the add-tweet endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetBody {
    pub text: String,
    pub username: String,
    pub profile_img: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Payload for the add-comment endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentBody {
    pub tweet_id: String,
    pub comment: String,
    pub username: String,
    pub profile_img: String,
}
