use thiserror::Error;

/// Why a submit action was refused before any store write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("sign in to post")]
    SignedOut,
    #[error("nothing to post")]
    EmptyText,
    #[error("a post is already in flight")]
    InFlight,
    #[error("tweet is not on screen")]
    NotMounted,
}
