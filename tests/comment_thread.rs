//! Comment threads: mounting, posting, failure handling, and result ordering.

mod common;

use std::sync::Arc;
use std::time::Duration;

use chirp::feed::TweetBody;
use chirp::session::Session;
use chirp::store::{FeedStore, HttpStore, MemoryStore};
use chirp::sync::{spawn_worker, FeedWorker, StoreEvent, UiCommand};
use chirp::ui::events::AppEvent;
use chirp::ui::notify::ToastKind;
use chirp::ui::submit::SubmitRejected;
use chirp::ui::thread::{CommentPanel, LoadStatus, ThreadIntent};
use common::{ada, eventually, store_config, Harness, MockStore};
use tokio::sync::mpsc;

/// Sample feed: tweet-3 (no comments) above tweet-1 (one comment).
const COMMENTED: &str = "tweet-1";

fn comment_texts<S>(harness: &Harness<S>, tweet_id: &str) -> Vec<String> {
    harness
        .app
        .feed()
        .items()
        .iter()
        .find(|item| item.tweet.id == tweet_id)
        .map(|item| item.thread.comments.iter().map(|c| c.comment.clone()).collect())
        .unwrap_or_default()
}

fn store_texts(store: &MemoryStore, tweet_id: &str) -> Vec<String> {
    store
        .comments_for(tweet_id)
        .into_iter()
        .map(|c| c.comment)
        .collect()
}

fn select(harness: &mut Harness<MemoryStore>, tweet_id: &str) {
    while harness
        .app
        .feed()
        .selected_item()
        .is_some_and(|item| item.tweet.id != tweet_id)
    {
        let before = harness.app.feed().selected();
        harness.app.move_selection(1);
        assert_ne!(before, harness.app.feed().selected(), "tweet not in feed");
    }
}

async fn signed_in_with_draft(draft: &str) -> (Arc<MemoryStore>, Harness<MemoryStore>) {
    let store = Arc::new(MemoryStore::with_sample_feed());
    let mut harness = Harness::new(Arc::clone(&store), Session::signed_in(ada()))
        .started()
        .await;
    select(&mut harness, COMMENTED);
    harness.app.toggle_comments();
    harness
        .app
        .dispatch_selected_thread(ThreadIntent::SetDraft(draft.to_string()));
    (store, harness)
}

#[tokio::test]
async fn each_mounted_tweet_reads_its_comments_once() {
    let store = Arc::new(MemoryStore::with_sample_feed());
    let mut harness = Harness::new(Arc::clone(&store), Session::signed_out());

    harness.app.start();
    let commands = harness.take_commands();
    let event = harness.worker.execute(commands.into_iter().next().unwrap()).await;
    harness.app.on_store_event(event);

    let mut loads = Vec::new();
    for command in harness.take_commands() {
        if let UiCommand::LoadComments { tweet_id, .. } = &command {
            loads.push(tweet_id.clone());
        }
        let event = harness.worker.execute(command).await;
        harness.app.on_store_event(event);
    }
    loads.sort();
    assert_eq!(loads, vec!["tweet-1".to_string(), "tweet-3".to_string()]);

    // A refresh with the same tweets mounts nothing new.
    harness.app.refresh_tweets();
    let commands = harness.take_commands();
    for command in commands {
        let event = harness.worker.execute(command).await;
        harness.app.on_store_event(event);
    }
    assert!(harness.take_commands().is_empty());
    assert_eq!(comment_texts(&harness, COMMENTED), store_texts(&store, COMMENTED));
}

#[tokio::test]
async fn signed_out_cannot_open_or_submit() {
    let store = Arc::new(MemoryStore::with_sample_feed());
    let mut harness = Harness::new(Arc::clone(&store), Session::signed_out())
        .started()
        .await;
    select(&mut harness, COMMENTED);

    harness.app.toggle_comments();
    let item = harness.app.feed().selected_item().unwrap();
    assert_eq!(item.thread.panel, CommentPanel::Hidden);

    harness
        .app
        .dispatch_selected_thread(ThreadIntent::SetDraft("sneaky".to_string()));
    assert_eq!(harness.app.submit_comment(), Err(SubmitRejected::SignedOut));
    assert!(harness.take_commands().is_empty());
    assert_eq!(store.comments_for(COMMENTED).len(), 1);
}

#[tokio::test]
async fn confirmed_comment_refreshes_only_its_thread() {
    let (store, mut harness) = signed_in_with_draft("agreed").await;

    harness.app.submit_comment().unwrap();
    let loading = harness.app.toasts().visible();
    assert_eq!(loading.len(), 1);
    assert_eq!(loading[0].kind, ToastKind::Loading);
    assert_eq!(loading[0].message, "Posting Comment...");

    let commands = harness.take_commands();
    assert!(matches!(commands.as_slice(), [UiCommand::PostComment { .. }]));
    for command in commands {
        let event = harness.worker.execute(command).await;
        assert!(matches!(
            &event,
            StoreEvent::CommentPosted { result: Ok(_), .. }
        ));
        harness.app.on_store_event(event);
    }
    // The refetch came back with the write; no tweet list reload was issued.
    assert!(harness.take_commands().is_empty());

    assert_eq!(
        comment_texts(&harness, COMMENTED),
        store_texts(&store, COMMENTED)
    );
    assert_eq!(comment_texts(&harness, COMMENTED)[0], "agreed");
    let stored = &store.comments_for(COMMENTED)[0];
    assert_eq!(stored.username, "Ada Lovelace");
    assert_eq!(stored.profile_img, "https://img/ada.png");

    let toasts = harness.app.toasts().visible();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts[0].message, "Comment Posted!");

    let thread = &harness.app.feed().selected_item().unwrap().thread;
    assert!(thread.draft.is_empty());
    assert_eq!(thread.panel, CommentPanel::Hidden);
    assert_eq!(thread.in_flight, 0);
}

#[tokio::test]
async fn failed_comment_keeps_draft_and_thread() {
    let (store, mut harness) = signed_in_with_draft("lost?").await;
    let before = comment_texts(&harness, COMMENTED);
    store.set_fail_writes(true);

    harness.app.submit_comment().unwrap();
    harness.pump().await;

    assert_eq!(comment_texts(&harness, COMMENTED), before);
    let thread = &harness.app.feed().selected_item().unwrap().thread;
    assert_eq!(thread.draft, "lost?");
    assert_eq!(thread.panel, CommentPanel::Visible);
    assert_eq!(thread.in_flight, 0);

    let toasts = harness.app.toasts().visible();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Failure);
}

#[tokio::test]
async fn empty_draft_is_not_submitted() {
    let (_store, mut harness) = signed_in_with_draft("").await;
    assert_eq!(harness.app.submit_comment(), Err(SubmitRejected::EmptyText));
    assert!(harness.take_commands().is_empty());
    assert!(harness.app.toasts().visible().is_empty());
}

#[tokio::test]
async fn comment_read_failure_shows_empty_thread() {
    let mock = MockStore::start().await;
    let tweet_id = mock.seed_tweet("Grace Hopper", "first");
    mock.seed_comment(&tweet_id, "Alan Turing", "hidden by failure");
    mock.fail("getComments");
    let store = Arc::new(HttpStore::new(&store_config(&mock.url())).unwrap());

    let harness = Harness::new(store, Session::signed_out()).started().await;

    let item = &harness.app.feed().items()[0];
    assert!(item.thread.comments.is_empty());
    assert!(matches!(item.thread.status, LoadStatus::Failed(_)));
    assert_eq!(mock.requests_to("/api/getComments").len(), 1);
}

#[tokio::test]
async fn concurrent_comment_results_applied_out_of_order() {
    let (store, mut harness) = signed_in_with_draft("first").await;
    harness.app.submit_comment().unwrap();
    harness
        .app
        .dispatch_selected_thread(ThreadIntent::SetDraft("second".to_string()));
    harness.app.submit_comment().unwrap();

    let commands = harness.take_commands();
    assert_eq!(commands.len(), 2);
    let mut events = Vec::new();
    for command in commands {
        events.push(harness.worker.execute(command).await);
    }
    // Newest result lands first; the older refetch must not roll it back.
    for event in events.into_iter().rev() {
        harness.app.on_store_event(event);
    }

    assert_eq!(
        comment_texts(&harness, COMMENTED),
        store_texts(&store, COMMENTED)
    );
    assert_eq!(store.comments_for(COMMENTED).len(), 3);
    let toasts = harness.app.toasts().visible();
    assert_eq!(toasts.len(), 2);
    assert!(toasts.iter().all(|t| t.kind == ToastKind::Success));
    assert_eq!(harness.app.feed().selected_item().unwrap().thread.in_flight, 0);
}

#[tokio::test]
async fn stale_tweet_list_does_not_replace_newer_one() {
    let store = Arc::new(MemoryStore::with_sample_feed());
    let mut harness = Harness::new(Arc::clone(&store), Session::signed_out())
        .started()
        .await;

    harness.app.refresh_tweets();
    let older = harness.take_commands();
    let older_event = harness
        .worker
        .execute(older.into_iter().next().unwrap())
        .await;

    store
        .add_tweet(&TweetBody {
            text: "posted elsewhere".to_string(),
            username: "Grace Hopper".to_string(),
            profile_img: "https://img/grace.png".to_string(),
            image: None,
        })
        .await
        .unwrap();

    harness.app.refresh_tweets();
    let newer = harness.take_commands();
    let newer_event = harness
        .worker
        .execute(newer.into_iter().next().unwrap())
        .await;

    harness.app.on_store_event(newer_event);
    harness.app.on_store_event(older_event);
    harness.pump().await;

    let shown: Vec<String> = harness
        .app
        .feed()
        .items()
        .iter()
        .map(|item| item.tweet.id.clone())
        .collect();
    let stored: Vec<String> = store.tweets().into_iter().map(|t| t.id).collect();
    assert_eq!(shown, stored);
}

#[tokio::test]
async fn every_thread_of_a_large_feed_loads_its_comments() {
    let store = Arc::new(MemoryStore::new());
    for i in 0..100 {
        store
            .add_tweet(&TweetBody {
                text: format!("tweet number {i}"),
                username: "Grace Hopper".to_string(),
                profile_img: "https://img/grace.png".to_string(),
                image: None,
            })
            .await
            .unwrap();
    }

    let mut harness = Harness::new(Arc::clone(&store), Session::signed_out());
    harness.app.start();
    let commands = harness.take_commands();
    assert!(matches!(commands.as_slice(), [UiCommand::LoadTweets]));
    for command in commands {
        let event = harness.worker.execute(command).await;
        harness.app.on_store_event(event);
    }
    let loads = harness.take_commands();
    assert_eq!(loads.len(), 100);
    for command in loads {
        let event = harness.worker.execute(command).await;
        harness.app.on_store_event(event);
    }

    let items = harness.app.feed().items();
    assert_eq!(items.len(), 100);
    assert!(items
        .iter()
        .all(|item| item.thread.status == LoadStatus::Loaded));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn spawned_worker_delivers_results_to_ui_channel() {
    let store = Arc::new(MemoryStore::with_sample_feed());
    store.set_latency(Duration::from_millis(20));
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = std::sync::mpsc::channel();
    let handle = spawn_worker(
        &tokio::runtime::Handle::current(),
        FeedWorker::new(Arc::clone(&store)),
        command_rx,
        event_tx,
    );

    command_tx.send(UiCommand::LoadTweets).unwrap();

    let mut received = None;
    let arrived = eventually(Duration::from_secs(2), || {
        if let Ok(AppEvent::Store(event)) = event_rx.try_recv() {
            received = Some(event);
        }
        received.is_some()
    })
    .await;
    assert!(arrived);
    let Some(StoreEvent::TweetsLoaded(fetched)) = received else {
        panic!("Expected TweetsLoaded");
    };
    assert_eq!(fetched.result.unwrap().len(), 2);

    drop(command_tx);
    tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("worker exits when the channel closes")
        .unwrap();
}
