//! Visibility watcher for the end-of-list sentinel element.

/// Fraction of the sentinel that must enter the viewport before the
/// visibility trigger fires.
pub const DEFAULT_SENTINEL_THRESHOLD: f64 = 0.1;

/// Decides whether a reported sentinel visibility ratio should trigger a
/// fetch.
///
/// The watcher is armed while at least one sentinel element is attached.
/// Attach/detach are counted rather than toggled so that replacing the
/// sentinel in either order (attach-then-detach or detach-then-attach)
/// leaves the watcher armed.
#[derive(Debug)]
pub struct SentinelWatcher {
    threshold: f64,
    attached: u32,
}

impl SentinelWatcher {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            attached: 0,
        }
    }

    /// A sentinel element is now observed.
    pub fn attach(&mut self) {
        self.attached += 1;
    }

    /// An observed sentinel element went away.
    pub fn detach(&mut self) {
        self.attached = self.attached.saturating_sub(1);
    }

    pub fn is_armed(&self) -> bool {
        self.attached > 0
    }

    /// Whether a reported visibility ratio should fire the trigger.
    ///
    /// Ratios below the threshold, reports while no sentinel is attached,
    /// and reports after the feed is exhausted are all ignored.
    pub fn should_fire(&self, ratio: f64, has_more: bool) -> bool {
        self.is_armed() && has_more && ratio >= self.threshold
    }
}

impl Default for SentinelWatcher {
    fn default() -> Self {
        Self::new(DEFAULT_SENTINEL_THRESHOLD)
    }
}
