//! Headless infinite-scroll engine for paginated video feeds.
//!
//! `scrollfeed` owns a growing, append-only list of videos fetched page by
//! page from a remote listing API, and funnels its three activation
//! sources (initial load, scroll proximity, sentinel visibility) into a
//! single guarded fetch operation. Rendering and the real browser stay
//! outside: the embedder injects a [`Viewport`] for scroll geometry and
//! forwards its environment's events through signal handles.
//!
//! # Architecture
//!
//! ```text
//! ScrollSignal ──┐
//! SentinelRef ───┼──→ FeedRuntime ──→ FeedLoader ──→ FeedClient ──→ HTTP
//! start()/stop() ┘          │              │
//!                           └──── FeedHandle (items, has_more, is_loading)
//! ```
//!
//! - [`FeedLoader::load_next_page`] is the only operation that mutates feed
//!   state. It is a no-op while a fetch is in flight or after the backend
//!   signals end-of-data.
//! - [`FeedRuntime`] wires the triggers: `start()` performs the initial
//!   page-1 activation and begins draining trigger events, `stop()` tears
//!   the subscription down.
//! - [`FeedHandle`] gives the rendering side snapshot access to the items
//!   and the loading/exhaustion flags.

pub mod api;
pub mod config;
pub mod loader;
pub mod observe;
pub mod runtime;

pub use api::{FeedClient, FetchError, Page, Video};
pub use config::FeedConfig;
pub use loader::{FeedHandle, FeedLoader, FeedSnapshot, Phase};
pub use observe::{near_bottom, SentinelWatcher, Viewport, DEFAULT_SENTINEL_THRESHOLD};
pub use runtime::{FeedEvent, FeedRuntime, ScrollSignal, SentinelRef};
