//! Session-level flows: startup, flush gating, copy and layout.

mod common;

use clip_app::{AppSession, RefreshPolicy, SyncError};
use clip_core::ports::EditorSurfacePort;
use clip_core::PanelState;
use common::{clip, server_error, Harness};

fn session(harness: &Harness) -> AppSession {
    AppSession::new(harness.deps("CalmOtter"), RefreshPolicy::default())
}

async fn privileged_session(harness: &Harness) -> AppSession {
    *harness.backend.privileged.lock().unwrap() = Ok(true);
    let session = session(harness);
    session.start().await;
    session
}

#[tokio::test]
async fn start_pulls_the_feed_and_records_privilege() {
    let harness = Harness::new();
    harness
        .backend
        .push_list(Ok(vec![clip("2025-02-07T17:00:30.435Z", "hi", "other")]));
    *harness.backend.privileged.lock().unwrap() = Ok(true);
    let session = session(&harness);

    session.start().await;

    assert!(session.is_privileged());
    assert_eq!(session.feed().len(), 1);
    assert_eq!(session.username(), "CalmOtter");
    let document = harness.view.last_document().unwrap();
    assert!(document.contains("bg-gray-100"));
}

#[tokio::test]
async fn start_shows_empty_state_when_backend_is_down() {
    let harness = Harness::new();
    harness.backend.push_list(Err(server_error()));
    *harness.backend.privileged.lock().unwrap() = Err(server_error());
    let session = session(&harness);

    session.start().await;

    assert!(!session.is_privileged());
    assert!(session.feed().is_empty());
    assert!(harness
        .view
        .last_document()
        .unwrap()
        .contains("Welcome to Clipify!"));
}

#[tokio::test]
async fn flush_is_refused_without_privilege() {
    let harness = Harness::new();
    let session = session(&harness);
    session.start().await;

    let err = session.flush_all().await.unwrap_err();

    assert!(matches!(err, SyncError::Unprivileged));
    assert_eq!(harness.backend.flush_calls(), 0);
}

#[tokio::test]
async fn successful_flush_clears_feed_and_buffer() {
    let harness = Harness::new();
    harness
        .backend
        .push_list(Ok(vec![clip("2025-02-07T17:00:30.435Z", "x", "y")]));
    let session = privileged_session(&harness).await;
    harness.editor.set_text("draft");

    session.flush_all().await.unwrap();

    assert!(session.feed().is_empty());
    assert_eq!(harness.editor.text(), "");
    assert!(harness.notifier.messages().contains(&"Clipify cleared!".to_string()));
}

#[tokio::test]
async fn failed_flush_changes_nothing_locally() {
    let harness = Harness::new();
    let served = vec![clip("2025-02-07T17:00:30.435Z", "x", "y")];
    harness.backend.push_list(Ok(served.clone()));
    let session = privileged_session(&harness).await;
    *harness.backend.fail_flush.lock().unwrap() = Some(server_error());
    harness.editor.set_text("draft");

    assert!(session.flush_all().await.is_err());

    assert_eq!(session.feed().snapshot(), served);
    assert_eq!(harness.editor.text(), "draft");
    assert_eq!(
        harness.notifier.messages().last().map(String::as_str),
        Some("Internal Server Error")
    );
}

#[tokio::test]
async fn requested_refresh_failure_is_toasted() {
    let harness = Harness::new();
    let session = session(&harness);
    harness.backend.push_list(Err(server_error()));

    assert!(session.refresh().await.is_err());

    assert_eq!(
        harness.notifier.messages(),
        vec!["Failed to refresh clips: 500 Internal Server Error"]
    );
}

#[tokio::test]
async fn background_refresh_failure_stays_quiet() {
    let harness = Harness::new();
    let session = session(&harness);
    harness.backend.push_list(Err(server_error()));

    assert!(session.sync().refresh().await.is_err());

    assert!(harness.notifier.messages().is_empty());
}

#[tokio::test]
async fn copy_writes_the_indexed_clip() {
    let harness = Harness::new();
    harness.backend.push_list(Ok(vec![
        clip("2025-02-07T17:00:30.435Z", "first", "a"),
        clip("2025-02-07T17:00:31.435Z", "<b>second</b>", "b"),
    ]));
    let session = session(&harness);
    session.start().await;

    session.copy(1).unwrap();
    assert!(matches!(session.copy(7), Err(SyncError::ClipNotFound(7))));

    assert_eq!(
        *harness.clipboard.writes.lock().unwrap(),
        vec!["<b>second</b>".to_string()]
    );
}

#[tokio::test]
async fn panel_minimizes_on_scroll_and_returns_on_typing() {
    let harness = Harness::new();
    let session = session(&harness);

    let minimized = session.layout().on_feed_scrolled(120);
    assert_eq!(session.layout().state(), PanelState::Minimized);
    assert_eq!((minimized.editor_vh, minimized.feed_vh), (5, 80));

    let expanded = session.edit("let x = 1;");
    assert_eq!(session.layout().state(), PanelState::Expanded);
    assert_eq!((expanded.editor_vh, expanded.feed_vh), (17, 70));
}

#[tokio::test]
async fn change_language_keeps_the_draft() {
    let harness = Harness::new();
    let session = session(&harness);
    session.edit("print('hi')");

    let language = session.change_language("Python");

    assert_eq!(language.as_str(), "python");
    assert_eq!(harness.editor.text(), "print('hi')");
    assert_eq!(harness.editor.language().as_str(), "python");
}
