//! Loader configuration.

use crate::observe::DEFAULT_SENTINEL_THRESHOLD;

/// Configuration for one feed loader.
///
/// Supplied at creation and immutable for the loader's lifetime.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Base path of the paginated listing endpoint.
    pub api_endpoint: String,
    /// Category filter forwarded on every request.
    pub category_id: u32,
    /// Fraction of the sentinel element that must be visible before the
    /// visibility trigger fires.
    pub sentinel_threshold: f64,
}

impl FeedConfig {
    pub fn new(api_endpoint: impl Into<String>, category_id: u32) -> Self {
        Self {
            api_endpoint: api_endpoint.into(),
            category_id,
            sentinel_threshold: DEFAULT_SENTINEL_THRESHOLD,
        }
    }

    pub fn with_sentinel_threshold(mut self, threshold: f64) -> Self {
        self.sentinel_threshold = threshold;
        self
    }
}
