use crate::geometry::FlipGeometry;
use crate::types::{Bitmap, FlipDirection, Rect};
use image::Rgba;

/// Action that makes a completed flip's destination the real position.
pub type CommitCallback<V> = Box<dyn FnOnce(&mut V)>;

/// One flip transaction: two snapshots, a fixed direction and a progress value.
pub struct FlipSession<V> {
    pub(crate) current: Option<Bitmap>,
    pub(crate) next: Option<Bitmap>,
    direction: FlipDirection,
    pub(crate) page_rect: Rect,
    pub(crate) background: Rgba<u8>,
    progress: f32,
    commit: Option<CommitCallback<V>>,
}

impl<V> FlipSession<V> {
    pub fn new(
        current: Option<Bitmap>,
        next: Option<Bitmap>,
        direction: FlipDirection,
        page_rect: Rect,
        background: Rgba<u8>,
        commit: Option<CommitCallback<V>>,
    ) -> Self {
        Self {
            current,
            next,
            direction,
            page_rect,
            background,
            progress: 0.0,
            commit,
        }
    }

    pub fn from_geometry(
        geometry: FlipGeometry,
        next: Bitmap,
        direction: FlipDirection,
        commit: Option<CommitCallback<V>>,
    ) -> Self {
        Self::new(
            Some(geometry.current),
            Some(next),
            direction,
            geometry.page_rect,
            geometry.background,
            commit,
        )
    }

    pub fn direction(&self) -> FlipDirection {
        self.direction
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn page_rect(&self) -> Rect {
        self.page_rect
    }

    pub fn background(&self) -> Rgba<u8> {
        self.background
    }

    pub fn current_bitmap(&self) -> Option<&Bitmap> {
        self.current.as_ref()
    }

    pub fn next_bitmap(&self) -> Option<&Bitmap> {
        self.next.as_ref()
    }

    pub fn has_commit(&self) -> bool {
        self.commit.is_some()
    }

    pub(crate) fn set_progress(&mut self, value: f32) {
        self.progress = clamp_progress(value);
    }

    pub(crate) fn clear_commit(&mut self) {
        self.commit = None;
    }

    pub(crate) fn take_commit(&mut self) -> Option<CommitCallback<V>> {
        self.commit.take()
    }
}

impl<V> std::fmt::Debug for FlipSession<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlipSession")
            .field("direction", &self.direction)
            .field("page_rect", &self.page_rect)
            .field("progress", &self.progress)
            .field("has_current", &self.current.is_some())
            .field("has_next", &self.next.is_some())
            .field("has_commit", &self.commit.is_some())
            .finish()
    }
}

/// Clamp into [0,1]; anything non-finite collapses to 0.
pub fn clamp_progress(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
