//! The incremental list loader: one guarded fetch operation over shared
//! feed state.

mod state;

pub use state::{FeedHandle, FeedSnapshot, Phase};

use std::sync::Arc;

use scopeguard::guard;

use crate::api::{FeedClient, Page};
use crate::config::FeedConfig;

/// Fetches sequential pages of a listing and appends them to shared state.
///
/// Cloneable: clones share the same state and re-entrancy guard, so any
/// number of trigger sources can hold one and concurrent calls still issue
/// at most one request.
#[derive(Clone)]
pub struct FeedLoader {
    client: Arc<FeedClient>,
    state: FeedHandle,
}

impl FeedLoader {
    pub fn new(config: &FeedConfig) -> Self {
        Self {
            client: Arc::new(FeedClient::new(config)),
            state: FeedHandle::new(),
        }
    }

    /// Handle for observing items, `has_more`, and `is_loading`.
    pub fn state(&self) -> FeedHandle {
        self.state.clone()
    }

    /// Attempt to fetch the next page.
    ///
    /// No-op while a fetch is already in flight or after the feed is
    /// exhausted. Failures other than the end-of-feed terminator are logged
    /// and swallowed; the cursor stays put, so the next trigger retries the
    /// same page. There is no internal retry or backoff.
    pub async fn load_next_page(&self) {
        if !self.state.begin_fetch() {
            return;
        }
        // Reset the in-flight and loading flags on every exit path.
        let state = guard(self.state.clone(), |s| s.end_fetch());
        let page = state.current_page();

        match self.client.fetch_page(page).await {
            Ok(Page::Records(videos)) => {
                tracing::debug!(page, count = videos.len(), "page loaded");
                state.append_page(videos);
            }
            Ok(Page::End) => {
                tracing::debug!(page, "end of feed");
                state.exhaust();
            }
            Err(err) if err.is_end_of_feed() => {
                tracing::debug!(page, "end of feed (HTTP status)");
                state.exhaust();
            }
            Err(err) => {
                tracing::warn!(page, error = %err, "page fetch failed");
            }
        }
    }
}
