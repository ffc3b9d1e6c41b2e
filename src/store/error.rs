use thiserror::Error;

use super::Endpoint;

/// Errors that can occur while talking to the content store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Configured URL could not be used to build a request
    #[error("Invalid store URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Request never produced a response (connect, timeout, body read)
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    /// Store answered with a non-2xx status
    #[error("Store returned {status} for {endpoint}: {message}")]
    Status {
        endpoint: Endpoint,
        status: u16,
        message: String,
    },

    /// Response body was not the expected JSON
    #[error("Malformed {endpoint} response: {message}")]
    Decode { endpoint: Endpoint, message: String },

    /// Store refused to serve the call (offline store)
    #[error("Store unavailable for {endpoint}")]
    Unavailable { endpoint: Endpoint },
}

impl StoreError {
    /// Short classification for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::InvalidUrl { .. } => "invalid_url",
            StoreError::Transport { .. } => "transport",
            StoreError::Status { .. } => "status",
            StoreError::Decode { .. } => "decode",
            StoreError::Unavailable { .. } => "unavailable",
        }
    }

    /// Message suitable for a notification.
    pub fn user_message(&self) -> &'static str {
        match self {
            StoreError::InvalidUrl { .. } => "Store address is misconfigured",
            StoreError::Transport { .. } | StoreError::Unavailable { .. } => {
                "Could not reach the store"
            }
            StoreError::Status { .. } => "The store rejected the request",
            StoreError::Decode { .. } => "The store sent an unexpected response",
        }
    }
}
