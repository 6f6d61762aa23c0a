//! Shared feed state and its transitions.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::api::Video;

/// Derived view of the loader's position in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a trigger; more pages presumed available.
    Idle,
    /// A page fetch is in flight.
    Fetching,
    /// The terminator was seen; no trigger causes further fetches.
    Exhausted,
}

/// Caller-visible snapshot of the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSnapshot {
    pub items: Vec<Video>,
    pub current_page: u32,
    pub has_more: bool,
    pub is_loading: bool,
}

struct FeedState {
    /// Append-only; insertion order is fetch order.
    items: Vec<Video>,
    current_page: u32,
    has_more: bool,
    is_loading: bool,
    /// Re-entrancy guard: true from `begin_fetch` to `end_fetch`.
    fetching: bool,
}

impl FeedState {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            has_more: true,
            is_loading: false,
            fetching: false,
        }
    }
}

/// Cloneable handle over the shared feed state.
///
/// Readers (the rendering side) take snapshots; writes happen only through
/// the transition methods, keeping a single path for each state change.
#[derive(Clone)]
pub struct FeedHandle {
    inner: Arc<RwLock<FeedState>>,
}

impl FeedHandle {
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(FeedState::new())),
        }
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        let state = self.inner.read();
        FeedSnapshot {
            items: state.items.clone(),
            current_page: state.current_page,
            has_more: state.has_more,
            is_loading: state.is_loading,
        }
    }

    pub fn items(&self) -> Vec<Video> {
        self.inner.read().items.clone()
    }

    pub fn has_more(&self) -> bool {
        self.inner.read().has_more
    }

    pub fn is_loading(&self) -> bool {
        self.inner.read().is_loading
    }

    /// The next page the loader will request. Starts at 1.
    pub fn current_page(&self) -> u32 {
        self.inner.read().current_page
    }

    pub fn phase(&self) -> Phase {
        let state = self.inner.read();
        if !state.has_more {
            Phase::Exhausted
        } else if state.fetching {
            Phase::Fetching
        } else {
            Phase::Idle
        }
    }

    /// Cheap pre-check used by trigger wiring before spawning a fetch task.
    pub(crate) fn can_fetch(&self) -> bool {
        let state = self.inner.read();
        state.has_more && !state.fetching
    }

    /// Enter the fetching state if allowed.
    ///
    /// Returns false, changing nothing, when the feed is exhausted or a
    /// fetch is already in flight. The check and the flag set share one
    /// critical section, so two racing callers cannot both pass.
    pub(crate) fn begin_fetch(&self) -> bool {
        let mut state = self.inner.write();
        if !state.has_more || state.fetching {
            return false;
        }
        state.fetching = true;
        state.is_loading = true;
        true
    }

    /// Leave the fetching state. Must run on every exit path of a fetch.
    pub(crate) fn end_fetch(&self) {
        let mut state = self.inner.write();
        state.fetching = false;
        state.is_loading = false;
    }

    /// Append a fetched page in response order and advance the cursor.
    pub(crate) fn append_page(&self, videos: Vec<Video>) {
        let mut state = self.inner.write();
        state.items.extend(videos);
        state.current_page += 1;
    }

    /// Latch the end of the feed. One-way: nothing ever resets this.
    pub(crate) fn exhaust(&self) {
        self.inner.write().has_more = false;
    }
}
