//! Injected scroll-geometry capability and the proximity predicate.

/// Access to the embedder's scroll geometry.
///
/// Implementations wrap whatever environment hosts the list (a browser
/// bridge, a TUI viewport, a test fixture). All values are in the same
/// length unit; the loader only compares them.
pub trait Viewport: Send + Sync {
    /// Vertical scroll offset from the top of the document.
    fn scroll_offset(&self) -> f64;
    /// Height of the visible viewport.
    fn viewport_height(&self) -> f64;
    /// Total scrollable height of the document.
    fn document_height(&self) -> f64;
}

/// Scroll-proximity trigger: fires when the remaining scrollable distance
/// is at most one viewport height.
pub fn near_bottom(viewport: &dyn Viewport) -> bool {
    viewport.document_height() - viewport.scroll_offset() <= viewport.viewport_height()
}
