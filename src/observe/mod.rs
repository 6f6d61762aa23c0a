//! Browser-style observation, abstracted away from any real browser.
//!
//! Scroll geometry comes in through the injected [`Viewport`] capability;
//! sentinel visibility comes in as reported ratios checked against a
//! [`SentinelWatcher`]. Neither side touches a real `window` or `document`,
//! which keeps the trigger logic testable in-process.

mod sentinel;
mod viewport;

pub use sentinel::{SentinelWatcher, DEFAULT_SENTINEL_THRESHOLD};
pub use viewport::{near_bottom, Viewport};
