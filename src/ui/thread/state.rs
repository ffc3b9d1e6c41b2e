use crate::feed::{Comment, CommentBody};
use crate::session::Session;
use crate::ui::mvi::UiState;
use crate::ui::submit::SubmitRejected;

/// Visibility of the comment entry panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentPanel {
    #[default]
    Hidden,
    Visible,
}

/// Progress of the comment read for one thread.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Comments of one tweet item, owned exclusively by that item.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommentThreadState {
    /// In store order.
    pub comments: Vec<Comment>,
    pub status: LoadStatus,
    pub draft: String,
    pub panel: CommentPanel,
    /// Comment writes not yet resolved.
    pub in_flight: usize,
    /// Sequence of the newest read applied so far.
    pub applied_seq: Option<u64>,
}

impl UiState for CommentThreadState {}

impl CommentThreadState {
    pub fn is_panel_visible(&self) -> bool {
        self.panel == CommentPanel::Visible
    }

    /// Build the write payload for the current draft.
    pub fn prepare_submit(
        &self,
        tweet_id: &str,
        session: &Session,
    ) -> Result<CommentBody, SubmitRejected> {
        if !session.is_signed_in() {
            return Err(SubmitRejected::SignedOut);
        }
        if self.draft.is_empty() {
            return Err(SubmitRejected::EmptyText);
        }
        let author = session.author();
        Ok(CommentBody {
            tweet_id: tweet_id.to_string(),
            comment: self.draft.clone(),
            username: author.username,
            profile_img: author.profile_img,
        })
    }

    /// True if a read stamped `seq` is newer than anything applied.
    pub fn accepts(&self, seq: u64) -> bool {
        self.applied_seq.map_or(true, |applied| seq > applied)
    }
}
