//! End-to-end behavior of the sync engine against a scripted backend.

mod common;

use std::sync::Arc;

use clip_app::{AppSession, RefreshPolicy, SyncError};
use clip_core::ports::EditorSurfacePort;
use clip_core::Language;
use common::{clip, server_error, Harness};

fn session(harness: &Harness, policy: RefreshPolicy) -> AppSession {
    AppSession::new(harness.deps("BraveFalcon"), policy)
}

#[tokio::test]
async fn blank_submissions_never_reach_the_backend() {
    let harness = Harness::new();
    let session = session(&harness, RefreshPolicy::default());

    for text in ["", "   ", "\n\t "] {
        let err = session
            .sync()
            .submit(text, &Language::plaintext())
            .await
            .unwrap_err();
        assert!(matches!(err, SyncError::EmptyClip));
    }

    assert_eq!(harness.backend.add_calls(), 0);
    assert_eq!(harness.backend.list_calls(), 0);
    assert_eq!(
        harness.notifier.messages(),
        vec!["Please enter some code first!"; 3]
    );
}

#[tokio::test]
async fn refresh_keeps_server_order_and_duplicates() {
    let harness = Harness::new();
    let session = session(&harness, RefreshPolicy::default());
    let served = vec![
        clip("2025-02-07T17:00:30.435Z", "third", "a"),
        clip("2025-02-05T09:00:00.000Z", "first", "b"),
        clip("2025-02-05T09:00:00.000Z", "first", "b"),
    ];
    harness.backend.push_list(Ok(served.clone()));

    let count = session.refresh().await.unwrap();

    assert_eq!(count, 3);
    assert_eq!(session.feed().snapshot(), served);
}

#[tokio::test]
async fn failed_refresh_leaves_feed_untouched() {
    let harness = Harness::new();
    let session = session(&harness, RefreshPolicy::default());
    let before = vec![clip("2025-02-07T17:00:30.435Z", "kept", "a")];
    harness.backend.push_list(Ok(before.clone()));
    session.refresh().await.unwrap();
    let renders = harness.view.documents.lock().unwrap().len();

    harness.backend.push_list(Err(server_error()));
    let err = session.refresh().await.unwrap_err();

    assert!(matches!(err, SyncError::Backend(_)));
    assert_eq!(session.feed().snapshot(), before);
    assert_eq!(harness.view.documents.lock().unwrap().len(), renders);
}

#[tokio::test]
async fn submitted_markup_is_rendered_as_text() {
    let harness = Harness::new();
    let session = session(&harness, RefreshPolicy::default());
    harness.editor.set_text("hello <script>");

    let submitted = session.send().await.unwrap();
    assert_eq!(submitted.text, "hello <script>");
    assert_eq!(submitted.name, "BraveFalcon");
    assert_eq!(submitted.id.inner(), "2025-02-07T17:00:30.435Z");
    assert_eq!(harness.editor.text(), "");

    harness.backend.push_list(Ok(vec![submitted.clone()]));
    session.refresh().await.unwrap();
    let first = harness.view.last_document().unwrap();

    assert!(first.contains("hello &lt;script&gt;"));
    assert!(!first.contains("<script>"));
    assert!(first.contains("bg-blue-50"));

    session.sync().render().await;
    let second = harness.view.last_document().unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn failed_submit_keeps_the_buffer() {
    let harness = Harness::new();
    let session = session(&harness, RefreshPolicy::default());
    *harness.backend.fail_add.lock().unwrap() = Some(server_error());
    harness.editor.set_text("keep me");

    assert!(session.send().await.is_err());

    assert_eq!(harness.editor.text(), "keep me");
    assert_eq!(harness.backend.list_calls(), 0);
    assert_eq!(
        harness.notifier.messages(),
        vec!["Failed to submit clip: 500 Internal Server Error"]
    );
}

#[tokio::test]
async fn successful_submit_reconciles_the_feed() {
    let harness = Harness::new();
    let session = session(&harness, RefreshPolicy::default());
    let served = vec![clip("2025-02-07T17:00:30.435Z", "fn main() {}", "BraveFalcon")];
    harness.backend.push_list(Ok(served.clone()));
    harness.editor.set_text("fn main() {}");

    session.send().await.unwrap();

    assert_eq!(harness.backend.add_calls(), 1);
    assert_eq!(harness.backend.list_calls(), 1);
    assert_eq!(session.feed().snapshot(), served);
    assert_eq!(harness.notifier.messages(), vec!["Code shared successfully!"]);
}

#[tokio::test]
async fn submit_succeeds_even_when_reconciliation_fails() {
    let harness = Harness::new();
    let session = session(&harness, RefreshPolicy::default());
    harness.backend.push_list(Err(server_error()));
    harness.editor.set_text("posted");

    assert!(session.send().await.is_ok());
    assert_eq!(harness.editor.text(), "");
    assert!(session.feed().is_empty());
}

async fn wait_for_list_calls(harness: &Harness, expected: usize) {
    while harness.backend.list_calls() < expected {
        tokio::task::yield_now().await;
    }
}

/// Refresh A is issued first, refresh B second; B's answer lands first.
async fn run_race(policy: RefreshPolicy) -> Vec<String> {
    let harness = Harness::new();
    let session = Arc::new(session(&harness, policy));
    let answer_a = harness.backend.push_gated();
    let answer_b = harness.backend.push_gated();

    let engine = session.sync().clone();
    let refresh_a = tokio::spawn(async move { engine.refresh().await });
    wait_for_list_calls(&harness, 1).await;

    let engine = session.sync().clone();
    let refresh_b = tokio::spawn(async move { engine.refresh().await });
    wait_for_list_calls(&harness, 2).await;

    answer_b
        .send(Ok(vec![clip("2025-02-07T17:00:31.000Z", "from B", "b")]))
        .unwrap();
    refresh_b.await.unwrap().unwrap();

    answer_a
        .send(Ok(vec![clip("2025-02-07T17:00:30.000Z", "from A", "a")]))
        .unwrap();
    refresh_a.await.unwrap().unwrap();

    session
        .feed()
        .snapshot()
        .into_iter()
        .map(|c| c.text)
        .collect()
}

#[tokio::test]
async fn overlapping_refreshes_apply_the_last_response() {
    assert_eq!(run_race(RefreshPolicy::LastResponseWins).await, vec!["from A"]);
}

#[tokio::test]
async fn overlapping_refreshes_can_discard_stale_responses() {
    assert_eq!(run_race(RefreshPolicy::DiscardStale).await, vec!["from B"]);
}
