//! Event-driven trigger wiring around the loader.
//!
//! The embedder forwards its environment's scroll and sentinel-visibility
//! events through signal handles; a single drive task drains them
//! and funnels every qualifying trigger into the same guarded fetch. All
//! three activation sources (initial load, scroll proximity, sentinel
//! visibility) are idempotent no-ops while a fetch is in flight or after
//! the feed is exhausted.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::config::FeedConfig;
use crate::loader::{FeedHandle, FeedLoader};
use crate::observe::{near_bottom, SentinelWatcher, Viewport};

/// Activation events accepted by the drive task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedEvent {
    /// The embedder's scroll position changed.
    Scrolled,
    /// The sentinel element's visible fraction changed.
    SentinelVisible { ratio: f64 },
    /// A sentinel element is now rendered and observed.
    SentinelAttached,
    /// The observed sentinel element was removed.
    SentinelDetached,
}

/// Handle the embedder calls from its scroll listener.
#[derive(Clone)]
pub struct ScrollSignal {
    tx: mpsc::UnboundedSender<FeedEvent>,
}

impl ScrollSignal {
    /// Report a scroll event. Cheap; safe to call on every scroll tick.
    /// After the runtime stops, reports are dropped.
    pub fn scrolled(&self) {
        let _ = self.tx.send(FeedEvent::Scrolled);
    }
}

/// Opaque handle for the last rendered element.
///
/// Create one via [`FeedRuntime::sentinel`] when the element mounts, report
/// visibility ratios as they change, and drop the handle when the element
/// unmounts; dropping disarms the watcher for this element.
pub struct SentinelRef {
    tx: mpsc::UnboundedSender<FeedEvent>,
}

impl SentinelRef {
    /// Report the fraction of the sentinel currently visible, in `0.0..=1.0`.
    pub fn report_visibility(&self, ratio: f64) {
        let _ = self.tx.send(FeedEvent::SentinelVisible { ratio });
    }
}

impl Drop for SentinelRef {
    fn drop(&mut self) {
        let _ = self.tx.send(FeedEvent::SentinelDetached);
    }
}

/// Owns the trigger channel and the drive task.
///
/// The embedding context calls [`start`](Self::start) when the list mounts
/// and [`stop`](Self::stop) when it unmounts; in between it feeds events
/// through [`ScrollSignal`] and [`SentinelRef`] handles.
pub struct FeedRuntime {
    loader: FeedLoader,
    viewport: Arc<dyn Viewport>,
    sentinel_threshold: f64,
    tx: mpsc::UnboundedSender<FeedEvent>,
    rx: Option<mpsc::UnboundedReceiver<FeedEvent>>,
    stop_tx: Option<watch::Sender<bool>>,
    task: Option<JoinHandle<()>>,
}

impl FeedRuntime {
    pub fn new(config: FeedConfig, viewport: Arc<dyn Viewport>) -> Self {
        let loader = FeedLoader::new(&config);
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            loader,
            viewport,
            sentinel_threshold: config.sentinel_threshold,
            tx,
            rx: Some(rx),
            stop_tx: None,
            task: None,
        }
    }

    /// Handle for observing feed state.
    pub fn state(&self) -> FeedHandle {
        self.loader.state()
    }

    /// Signal handle for the embedder's scroll listener.
    pub fn scroll_signal(&self) -> ScrollSignal {
        ScrollSignal {
            tx: self.tx.clone(),
        }
    }

    /// Create a sentinel handle and arm the visibility watcher for it.
    pub fn sentinel(&self) -> SentinelRef {
        let _ = self.tx.send(FeedEvent::SentinelAttached);
        SentinelRef {
            tx: self.tx.clone(),
        }
    }

    /// Start the drive task.
    ///
    /// Performs the initial activation (an unconditional attempt at page 1)
    /// and then consumes trigger events until [`stop`](Self::stop). Calling
    /// `start` again is a no-op.
    pub fn start(&mut self) {
        let Some(rx) = self.rx.take() else {
            return;
        };
        let (stop_tx, stop_rx) = watch::channel(false);
        self.stop_tx = Some(stop_tx);

        let loader = self.loader.clone();
        let viewport = Arc::clone(&self.viewport);
        let watcher = SentinelWatcher::new(self.sentinel_threshold);
        self.task = Some(tokio::spawn(drive(loader, viewport, watcher, rx, stop_rx)));
    }

    /// Stop the drive task and release the event subscription.
    ///
    /// Signals sent after this point are dropped. An in-flight fetch is not
    /// cancelled; it completes against the shared state on its own.
    pub async fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(true);
        }
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

async fn drive(
    loader: FeedLoader,
    viewport: Arc<dyn Viewport>,
    mut watcher: SentinelWatcher,
    mut rx: mpsc::UnboundedReceiver<FeedEvent>,
    mut stop_rx: watch::Receiver<bool>,
) {
    let state = loader.state();

    // Initial activation fires exactly once, before any trigger event.
    spawn_fetch(&loader);

    loop {
        let event = tokio::select! {
            _ = stop_rx.changed() => break,
            event = rx.recv() => match event {
                Some(event) => event,
                None => break,
            },
        };

        match event {
            FeedEvent::Scrolled => {
                if state.can_fetch() && near_bottom(viewport.as_ref()) {
                    spawn_fetch(&loader);
                }
            }
            FeedEvent::SentinelVisible { ratio } => {
                if watcher.should_fire(ratio, state.has_more()) && state.can_fetch() {
                    spawn_fetch(&loader);
                }
            }
            FeedEvent::SentinelAttached => watcher.attach(),
            FeedEvent::SentinelDetached => watcher.detach(),
        }
    }

    tracing::debug!("feed runtime stopped");
}

/// Run the fetch on its own task so the event loop keeps draining while a
/// page is in flight; the loader's guard drops overlapping attempts instead
/// of queuing them.
fn spawn_fetch(loader: &FeedLoader) {
    let loader = loader.clone();
    tokio::spawn(async move {
        loader.load_next_page().await;
    });
}
