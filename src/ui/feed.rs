//! The tweet list. Items are keyed by tweet id; each owns its comment thread.

use crate::feed::Tweet;
use crate::sync::MountId;
use crate::ui::mvi::Reducer;
use crate::ui::thread::{CommentThreadState, LoadStatus, ThreadIntent, ThreadReducer};

#[derive(Debug, Clone, PartialEq)]
pub struct TweetItem {
    pub tweet: Tweet,
    pub mount: MountId,
    pub thread: CommentThreadState,
}

impl TweetItem {
    pub fn dispatch(&mut self, intent: ThreadIntent) {
        self.thread = ThreadReducer::reduce(std::mem::take(&mut self.thread), intent);
    }
}

#[derive(Debug, Default)]
pub struct FeedState {
    items: Vec<TweetItem>,
    selected: usize,
    status: LoadStatus,
    applied_seq: Option<u64>,
    next_mount: u64,
}

impl FeedState {
    pub fn items(&self) -> &[TweetItem] {
        &self.items
    }

    pub fn tweets(&self) -> Vec<&Tweet> {
        self.items.iter().map(|item| &item.tweet).collect()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&TweetItem> {
        self.items.get(self.selected)
    }

    pub fn selected_item_mut(&mut self) -> Option<&mut TweetItem> {
        self.items.get_mut(self.selected)
    }

    pub fn item_mut(&mut self, tweet_id: &str) -> Option<&mut TweetItem> {
        self.items.iter_mut().find(|item| item.tweet.id == tweet_id)
    }

    /// The item for `tweet_id`, only if it is still the same mount.
    pub fn mounted_mut(&mut self, tweet_id: &str, mount: MountId) -> Option<&mut TweetItem> {
        self.item_mut(tweet_id).filter(|item| item.mount == mount)
    }

    pub fn move_selection(&mut self, direction: i32) {
        if self.items.is_empty() {
            self.selected = 0;
            return;
        }
        let last = self.items.len() - 1;
        self.selected = if direction.is_negative() {
            self.selected.saturating_sub(1)
        } else {
            (self.selected + 1).min(last)
        };
    }

    pub fn mark_loading(&mut self) {
        if self.status != LoadStatus::Loaded {
            self.status = LoadStatus::Loading;
        }
    }

    pub fn mark_failed(&mut self, reason: String) {
        self.status = LoadStatus::Failed(reason);
    }

    /// Replace the list with a fresh read.
    ///
    /// Returns `None` when a newer read is already displayed. Otherwise returns the
    /// items that were mounted by this replacement and still need their comments.
    /// Items whose tweet id survives keep their thread state untouched.
    pub fn replace(&mut self, seq: u64, tweets: Vec<Tweet>) -> Option<Vec<(String, MountId)>> {
        if self.applied_seq.is_some_and(|applied| seq <= applied) {
            return None;
        }
        self.applied_seq = Some(seq);
        self.status = LoadStatus::Loaded;

        let selected_id = self.selected_item().map(|item| item.tweet.id.clone());
        let mut previous = std::mem::take(&mut self.items);
        let mut mounted = Vec::new();

        for tweet in tweets {
            let existing = previous
                .iter()
                .position(|item| item.tweet.id == tweet.id)
                .map(|index| previous.swap_remove(index));
            let item = match existing {
                Some(item) => TweetItem { tweet, ..item },
                None => {
                    self.next_mount += 1;
                    let mount = MountId(self.next_mount);
                    mounted.push((tweet.id.clone(), mount));
                    TweetItem {
                        tweet,
                        mount,
                        thread: CommentThreadState::default(),
                    }
                }
            };
            self.items.push(item);
        }

        for gone in &previous {
            tracing::debug!(tweet_id = %gone.tweet.id, "Tweet item unmounted");
        }

        self.selected = selected_id
            .and_then(|id| self.items.iter().position(|item| item.tweet.id == id))
            .unwrap_or(0);

        Some(mounted)
    }
}
