use crate::types::{Bitmap, FlipDirection, Rect};

/// How the viewer presents its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerLayout {
    /// Rasterized pages of fixed size, centered in the content area.
    FixedPage,
    /// A scrollable viewport that fills the content area.
    Scrollable,
}

/// Capability the flip engine needs from the live viewer.
///
/// Implementations render content; the engine only ever asks for snapshots,
/// the content area, and a single-unit position change once a flip commits.
pub trait PageSource {
    fn layout(&self) -> ViewerLayout;

    /// Snapshot of what is on screen right now.
    fn current_bitmap(&self) -> Option<Bitmap>;

    /// Snapshot one page or viewport away, or `None` at a document boundary.
    fn adjacent_bitmap(&self, direction: FlipDirection) -> Option<Bitmap>;

    /// Visible content area in overlay coordinates (origin at 0,0).
    fn content_area(&self) -> Rect;

    /// Move the real reading position by exactly one unit.
    fn advance_position(&mut self, direction: FlipDirection);
}
