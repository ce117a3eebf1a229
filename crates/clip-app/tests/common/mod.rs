//! Shared fakes for clip-app integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use clip_app::AppDeps;
use clip_core::markup::{render_document, MessageBlock};
use clip_core::ports::{
    BackendError, ClipBackendPort, ClipboardError, ClipboardWriterPort, ClockPort,
    EditorSurfacePort, FeedViewPort, IdentityStoreError, IdentityStorePort, NotifierPort, Toast,
};
use clip_core::{Clip, ClientInfo, ClipId, Language};
use tokio::sync::oneshot;

pub fn clip(id: &str, text: &str, name: &str) -> Clip {
    Clip::new(ClipId::from_str(id), text, Language::plaintext(), name)
}

/// Backend whose `list_clips` answers are scripted.
///
/// Each call pops the next scripted answer; gated answers wait until the
/// test releases them.
pub struct FakeBackend {
    lists: Mutex<VecDeque<ListAnswer>>,
    pub added: Mutex<Vec<Clip>>,
    pub fail_add: Mutex<Option<BackendError>>,
    pub fail_flush: Mutex<Option<BackendError>>,
    pub privileged: Mutex<Result<bool, BackendError>>,
    pub list_calls: AtomicUsize,
    pub add_calls: AtomicUsize,
    pub flush_calls: AtomicUsize,
}

pub enum ListAnswer {
    Ready(Result<Vec<Clip>, BackendError>),
    Gated(oneshot::Receiver<Result<Vec<Clip>, BackendError>>),
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            lists: Mutex::new(VecDeque::new()),
            added: Mutex::new(Vec::new()),
            fail_add: Mutex::new(None),
            fail_flush: Mutex::new(None),
            privileged: Mutex::new(Ok(false)),
            list_calls: AtomicUsize::new(0),
            add_calls: AtomicUsize::new(0),
            flush_calls: AtomicUsize::new(0),
        }
    }

    pub fn push_list(&self, answer: Result<Vec<Clip>, BackendError>) {
        self.lists.lock().unwrap().push_back(ListAnswer::Ready(answer));
    }

    /// Queue an answer that is delivered through the returned sender.
    pub fn push_gated(&self) -> oneshot::Sender<Result<Vec<Clip>, BackendError>> {
        let (tx, rx) = oneshot::channel();
        self.lists.lock().unwrap().push_back(ListAnswer::Gated(rx));
        tx
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn add_calls(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst)
    }

    pub fn flush_calls(&self) -> usize {
        self.flush_calls.load(Ordering::SeqCst)
    }
}

pub fn server_error() -> BackendError {
    BackendError::Status {
        status: 500,
        reason: "Internal Server Error".to_string(),
    }
}

#[async_trait]
impl ClipBackendPort for FakeBackend {
    async fn list_clips(&self) -> Result<Vec<Clip>, BackendError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let answer = self.lists.lock().unwrap().pop_front();
        match answer {
            Some(ListAnswer::Ready(result)) => result,
            Some(ListAnswer::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(BackendError::Transport("gate dropped".to_string()))),
            None => Ok(Vec::new()),
        }
    }

    async fn add_clip(&self, clip: &Clip) -> Result<(), BackendError> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.fail_add.lock().unwrap().clone() {
            return Err(err);
        }
        self.added.lock().unwrap().push(clip.clone());
        Ok(())
    }

    async fn flush(&self) -> Result<(), BackendError> {
        self.flush_calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_flush.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn validate_user(&self) -> Result<bool, BackendError> {
        self.privileged.lock().unwrap().clone()
    }
}

#[derive(Default)]
pub struct MemoryIdentityStore {
    value: Mutex<Option<String>>,
}

impl MemoryIdentityStore {
    pub fn with_name(name: &str) -> Self {
        Self {
            value: Mutex::new(Some(name.to_string())),
        }
    }
}

impl IdentityStorePort for MemoryIdentityStore {
    fn load_username(&self) -> Result<Option<String>, IdentityStoreError> {
        Ok(self.value.lock().unwrap().clone())
    }

    fn store_username(&self, username: &str) -> Result<(), IdentityStoreError> {
        *self.value.lock().unwrap() = Some(username.to_string());
        Ok(())
    }
}

/// Records every document the engine renders.
#[derive(Default)]
pub struct RecordingView {
    pub documents: Mutex<Vec<String>>,
    pub blocks: Mutex<Vec<Vec<MessageBlock>>>,
    pub empty_renders: AtomicUsize,
}

impl RecordingView {
    pub fn last_document(&self) -> Option<String> {
        self.documents.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl FeedViewPort for RecordingView {
    async fn render_feed(&self, blocks: &[MessageBlock]) -> anyhow::Result<()> {
        self.documents.lock().unwrap().push(render_document(blocks));
        self.blocks.lock().unwrap().push(blocks.to_vec());
        Ok(())
    }

    async fn render_empty(&self) -> anyhow::Result<()> {
        self.empty_renders.fetch_add(1, Ordering::SeqCst);
        self.documents.lock().unwrap().push(render_document(&[]));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.toasts
            .lock()
            .unwrap()
            .iter()
            .map(|t| t.message.clone())
            .collect()
    }
}

impl NotifierPort for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: Mutex<Vec<String>>,
}

impl ClipboardWriterPort for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

/// Authoring buffer; dispose drops the text like a real mode switch.
#[derive(Default)]
pub struct FakeEditor {
    text: Mutex<String>,
    language: Mutex<Language>,
    pub disposals: AtomicUsize,
}

impl FakeEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disposals(&self) -> usize {
        self.disposals.load(Ordering::SeqCst)
    }
}

impl EditorSurfacePort for FakeEditor {
    fn text(&self) -> String {
        self.text.lock().unwrap().clone()
    }

    fn set_text(&self, text: &str) {
        *self.text.lock().unwrap() = text.to_string();
    }

    fn language(&self) -> Language {
        self.language.lock().unwrap().clone()
    }

    fn set_language(&self, language: &Language) {
        *self.language.lock().unwrap() = language.clone();
    }

    fn dispose(&self) {
        self.text.lock().unwrap().clear();
        self.disposals.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct Harness {
    pub backend: Arc<FakeBackend>,
    pub view: Arc<RecordingView>,
    pub notifier: Arc<RecordingNotifier>,
    pub clipboard: Arc<RecordingClipboard>,
    pub editor: Arc<FakeEditor>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            backend: Arc::new(FakeBackend::new()),
            view: Arc::new(RecordingView::default()),
            notifier: Arc::new(RecordingNotifier::default()),
            clipboard: Arc::new(RecordingClipboard::default()),
            editor: Arc::new(FakeEditor::new()),
        }
    }

    pub fn deps(&self, username: &str) -> AppDeps {
        AppDeps {
            backend: self.backend.clone(),
            identity_store: Arc::new(MemoryIdentityStore::with_name(username)),
            editor: self.editor.clone(),
            view: self.view.clone(),
            notifier: self.notifier.clone(),
            clipboard: self.clipboard.clone(),
            clock: Arc::new(FixedClock(1_738_947_630_435)),
            client: ClientInfo::new("Linux", "clipify"),
        }
    }
}
