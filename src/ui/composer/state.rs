use crate::feed::TweetBody;
use crate::session::Session;
use crate::ui::mvi::UiState;
use crate::ui::submit::SubmitRejected;

/// Draft of a new tweet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComposerState {
    pub text: String,
    /// Attached image URL; empty means none.
    pub image: String,
    pub image_panel_open: bool,
    /// Contents of the image-URL entry field, not yet attached.
    pub pending_image: String,
    /// A write is outstanding.
    pub submitting: bool,
}

impl UiState for ComposerState {}

impl ComposerState {
    pub fn image_url(&self) -> Option<&str> {
        (!self.image.is_empty()).then_some(self.image.as_str())
    }

    /// Whether the Tweet action is enabled.
    pub fn can_submit(&self, session: &Session) -> bool {
        self.check(session).is_ok()
    }

    /// Build the write payload, or say why submitting is disabled.
    pub fn prepare_submit(&self, session: &Session) -> Result<TweetBody, SubmitRejected> {
        self.check(session)?;
        let author = session.author();
        Ok(TweetBody {
            text: self.text.clone(),
            username: author.username,
            profile_img: author.profile_img,
            image: self.image_url().map(str::to_string),
        })
    }

    fn check(&self, session: &Session) -> Result<(), SubmitRejected> {
        if !session.is_signed_in() {
            return Err(SubmitRejected::SignedOut);
        }
        if self.text.is_empty() {
            return Err(SubmitRejected::EmptyText);
        }
        if self.submitting {
            return Err(SubmitRejected::InFlight);
        }
        Ok(())
    }
}
