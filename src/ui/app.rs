use std::time::Duration;

use crate::feed::Tweet;
use crate::session::{Identity, Session};
use crate::store::StoreError;
use crate::sync::{Fetched, StoreEvent, UiCommand, UiCommandSender};
use crate::ui::composer::{ComposerIntent, ComposerReducer, ComposerState};
use crate::ui::feed::FeedState;
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavRow, NAV_ROWS};
use crate::ui::notify::Toasts;
use crate::ui::submit::SubmitRejected;
use crate::ui::thread::ThreadIntent;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Composer,
    /// Image URL entry inside the composer.
    ImageUrl,
    Feed,
    /// Comment draft of the selected tweet.
    Comment,
    Nav,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    session: Session,
    /// Identity used by "Sign In".
    profile: Identity,
    composer: ComposerState,
    feed: FeedState,
    toasts: Toasts,
    nav_selection: usize,
    commands: Option<UiCommandSender>,
}

impl App {
    pub fn new(session: Session, profile: Identity, toast_ttl: Duration) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Composer,
            session,
            profile,
            composer: ComposerState::default(),
            feed: FeedState::default(),
            toasts: Toasts::new(toast_ttl),
            nav_selection: 0,
            commands: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.commands = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// Tab order: composer → feed → nav.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Composer | Focus::ImageUrl => Focus::Feed,
            Focus::Feed | Focus::Comment => Focus::Nav,
            Focus::Nav => Focus::Composer,
        };
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn composer(&self) -> &ComposerState {
        &self.composer
    }

    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn nav_selection(&self) -> usize {
        self.nav_selection
    }

    pub fn on_tick(&mut self) {
        self.toasts.prune();
    }

    /// Initial read of the tweet list.
    pub fn start(&mut self) {
        self.refresh_tweets();
    }

    pub fn refresh_tweets(&mut self) {
        self.feed.mark_loading();
        self.send_command(UiCommand::LoadTweets);
    }

    // ========================================================================
    // Session
    // ========================================================================

    pub fn toggle_session(&mut self) {
        if self.session.is_signed_in() {
            self.session.sign_out();
            let mounts: Vec<String> = self
                .feed
                .items()
                .iter()
                .map(|item| item.tweet.id.clone())
                .collect();
            for tweet_id in mounts {
                if let Some(item) = self.feed.item_mut(&tweet_id) {
                    item.dispatch(ThreadIntent::ClosePanel);
                }
            }
            if self.focus == Focus::Comment {
                self.focus = Focus::Feed;
            }
            tracing::info!("Signed out");
        } else {
            self.session.sign_in(self.profile.clone());
            tracing::info!("Signed in");
        }
    }

    // ========================================================================
    // Navigation panel
    // ========================================================================

    pub fn move_nav_selection(&mut self, direction: i32) {
        let last = NAV_ROWS.len() - 1;
        self.nav_selection = if direction.is_negative() {
            self.nav_selection.saturating_sub(1)
        } else {
            (self.nav_selection + 1).min(last)
        };
    }

    pub fn activate_nav(&mut self) {
        match NAV_ROWS.get(self.nav_selection) {
            Some(NavRow::Account) => self.toggle_session(),
            Some(NavRow::Home) => {
                self.focus = Focus::Feed;
                self.refresh_tweets();
            }
            _ => {}
        }
    }

    // ========================================================================
    // Composer (MVI pattern)
    // ========================================================================

    pub fn dispatch_composer(&mut self, intent: ComposerIntent) {
        dispatch_mvi!(self, composer, ComposerReducer, intent);
    }

    pub fn can_submit_tweet(&self) -> bool {
        self.composer.can_submit(&self.session)
    }

    pub fn toggle_image_panel(&mut self) {
        self.dispatch_composer(ComposerIntent::ToggleImagePanel);
        self.focus = if self.composer.image_panel_open {
            Focus::ImageUrl
        } else {
            Focus::Composer
        };
    }

    pub fn attach_image(&mut self) {
        self.dispatch_composer(ComposerIntent::AttachImage);
        self.focus = Focus::Composer;
    }

    /// Post the draft. Disabled (no write) without identity or text.
    pub fn submit_tweet(&mut self) -> Result<(), SubmitRejected> {
        let body = self.composer.prepare_submit(&self.session)?;
        self.dispatch_composer(ComposerIntent::SubmitStarted);
        if !self.send_command(UiCommand::PostTweet { body }) {
            self.dispatch_composer(ComposerIntent::PostFailed);
            self.toasts.error("Tweet not posted");
        }
        Ok(())
    }

    // ========================================================================
    // Comment threads (MVI pattern, one state per tweet item)
    // ========================================================================

    pub fn move_selection(&mut self, direction: i32) {
        self.feed.move_selection(direction);
    }

    /// Comment icon on the selected tweet.
    pub fn toggle_comments(&mut self) {
        let signed_in = self.session.is_signed_in();
        let Some(item) = self.feed.selected_item_mut() else {
            return;
        };
        item.dispatch(ThreadIntent::TogglePanel { signed_in });
        let visible = item.thread.is_panel_visible();
        self.focus = if visible { Focus::Comment } else { Focus::Feed };
    }

    pub fn dispatch_selected_thread(&mut self, intent: ThreadIntent) {
        if let Some(item) = self.feed.selected_item_mut() {
            item.dispatch(intent);
        }
    }

    pub fn submit_comment(&mut self) -> Result<(), SubmitRejected> {
        let tweet_id = self
            .feed
            .selected_item()
            .map(|item| item.tweet.id.clone())
            .ok_or(SubmitRejected::NotMounted)?;
        self.submit_comment_on(&tweet_id)
    }

    pub fn submit_comment_on(&mut self, tweet_id: &str) -> Result<(), SubmitRejected> {
        let item = self
            .feed
            .item_mut(tweet_id)
            .ok_or(SubmitRejected::NotMounted)?;
        let body = item.thread.prepare_submit(tweet_id, &self.session)?;
        let mount = item.mount;
        item.dispatch(ThreadIntent::SubmitStarted);

        let toast = self.toasts.loading("Posting Comment...");
        if !self.send_command(UiCommand::PostComment { body, mount, toast }) {
            self.toasts.failure(toast, "Comment not posted");
            if let Some(item) = self.feed.mounted_mut(tweet_id, mount) {
                item.dispatch(ThreadIntent::PostFailed);
            }
        }
        Ok(())
    }

    // ========================================================================
    // Store results
    // ========================================================================

    pub fn on_store_event(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::TweetsLoaded(fetched) => self.apply_tweets(fetched),
            StoreEvent::TweetPosted { result } => match result {
                Ok((_receipt, refreshed)) => {
                    self.dispatch_composer(ComposerIntent::Posted);
                    self.toasts.info("Tweet Posted", "🚀");
                    self.apply_tweets(refreshed);
                }
                Err(err) => {
                    self.dispatch_composer(ComposerIntent::PostFailed);
                    self.toasts
                        .error(format!("Tweet not posted: {}", err.user_message()));
                }
            },
            StoreEvent::CommentsLoaded {
                tweet_id,
                mount,
                fetched,
            } => {
                let Some(item) = self.feed.mounted_mut(&tweet_id, mount) else {
                    tracing::debug!(tweet_id = %tweet_id, "Comments for unmounted tweet dropped");
                    return;
                };
                item.dispatch(ThreadIntent::CommentsLoaded {
                    seq: fetched.seq,
                    result: fetched.result.map_err(describe),
                });
            }
            StoreEvent::CommentPosted {
                tweet_id,
                mount,
                toast,
                result,
            } => {
                let intent = match result {
                    Ok((_receipt, refreshed)) => {
                        self.toasts.success(toast, "Comment Posted!");
                        ThreadIntent::Posted {
                            seq: refreshed.seq,
                            result: refreshed.result.map_err(describe),
                        }
                    }
                    Err(err) => {
                        self.toasts.failure(
                            toast,
                            format!("Comment not posted: {}", err.user_message()),
                        );
                        ThreadIntent::PostFailed
                    }
                };
                match self.feed.mounted_mut(&tweet_id, mount) {
                    Some(item) => item.dispatch(intent),
                    None => {
                        tracing::debug!(tweet_id = %tweet_id, "Comment result for unmounted tweet dropped")
                    }
                }
            }
        }
    }

    fn apply_tweets(&mut self, fetched: Fetched<Vec<Tweet>>) {
        let tweets = match fetched.result {
            Ok(tweets) => tweets,
            Err(err) => {
                self.feed.mark_failed(describe(err));
                self.toasts.error("Could not load tweets");
                return;
            }
        };
        let Some(mounted) = self.feed.replace(fetched.seq, tweets) else {
            tracing::debug!(seq = fetched.seq, "Stale tweet list dropped");
            return;
        };
        for (tweet_id, mount) in mounted {
            let command = UiCommand::LoadComments {
                tweet_id: tweet_id.clone(),
                mount,
            };
            // A thread whose read never went out stays idle.
            if !self.send_command(command) {
                continue;
            }
            if let Some(item) = self.feed.mounted_mut(&tweet_id, mount) {
                item.dispatch(ThreadIntent::LoadStarted);
            }
        }
    }

    fn send_command(&self, command: UiCommand) -> bool {
        let Some(sender) = &self.commands else {
            return false;
        };

        match sender.send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Store command not sent: {}", err);
                false
            }
        }
    }
}

fn describe(err: StoreError) -> String {
    err.user_message().to_string()
}
