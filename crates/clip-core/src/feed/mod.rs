//! Client-local view of the shared clip list.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::clip::Clip;

/// Ticket handed out when a refresh is issued.
///
/// Only consulted when stale responses are to be discarded; the default
/// policy applies whatever response arrives last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
struct FeedState {
    clips: Vec<Clip>,
    applied: u64,
}

/// Ordered snapshot of the clips last received from the backend.
///
/// The sequence is only ever replaced as a whole, never patched in place.
/// Order is exactly the order the backend returned.
#[derive(Debug, Default)]
pub struct FeedStore {
    state: RwLock<FeedState>,
    issued: AtomicU64,
}

impl FeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Clip> {
        self.read(|state| state.clips.clone())
    }

    /// Clip at `index`, used to resolve copy actions back to the raw text.
    pub fn get(&self, index: usize) -> Option<Clip> {
        self.read(|state| state.clips.get(index).cloned())
    }

    pub fn len(&self) -> usize {
        self.read(|state| state.clips.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn replace(&self, clips: Vec<Clip>) {
        self.write(|state| state.clips = clips);
    }

    pub fn clear(&self) {
        self.replace(Vec::new());
    }

    /// Issue a ticket for a refresh that is about to start.
    pub fn issue_ticket(&self) -> RefreshTicket {
        RefreshTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Replace only if no newer refresh has been applied already.
    ///
    /// Returns `false` when the response is stale and was dropped.
    pub fn replace_if_newer(&self, ticket: RefreshTicket, clips: Vec<Clip>) -> bool {
        self.write(|state| {
            if ticket.0 < state.applied {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    ticket = ticket.0,
                    applied = state.applied,
                    "dropping stale feed response"
                );
                return false;
            }
            state.applied = ticket.0;
            state.clips = clips;
            true
        })
    }

    fn read<T>(&self, f: impl FnOnce(&FeedState) -> T) -> T {
        let guard = self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&guard)
    }

    fn write<T>(&self, f: impl FnOnce(&mut FeedState) -> T) -> T {
        let mut guard = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}
