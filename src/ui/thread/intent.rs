use crate::feed::Comment;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ThreadIntent {
    /// Mount-time read was sent.
    LoadStarted,
    /// Comment icon pressed. Ignored when signed out.
    TogglePanel { signed_in: bool },
    ClosePanel,
    SetDraft(String),
    DraftInsertChar(char),
    DraftBackspace,
    /// A comment read resolved.
    CommentsLoaded {
        seq: u64,
        result: Result<Vec<Comment>, String>,
    },
    SubmitStarted,
    /// Write confirmed; carries the refetch that followed it.
    Posted {
        seq: u64,
        result: Result<Vec<Comment>, String>,
    },
    PostFailed,
}

impl Intent for ThreadIntent {}
