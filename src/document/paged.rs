use super::{clamp_zoom, scale};
use folio_core::{Bitmap, FlipDirection, PageSource, Rect, ViewerLayout};
use std::path::{Path, PathBuf};
use tracing::warn;

fn decode(path: &Path) -> Option<Bitmap> {
    match image::open(path) {
        Ok(image) => Some(image.to_rgba8()),
        Err(err) => {
            warn!(path = %path.display(), "Failed to decode page: {err}");
            None
        }
    }
}

/// Fixed-size pages shown one at a time, centered in the viewport.
pub struct PagedDocument {
    pages: Vec<PathBuf>,
    index: usize,
    zoom: f32,
    viewport: (u32, u32),
}

impl PagedDocument {
    /// Pages decoded lazily from disk whenever a snapshot is taken.
    pub fn from_files(pages: Vec<PathBuf>) -> Self {
        Self {
            pages,
            index: 0,
            zoom: 1.0,
            viewport: (0, 0),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) -> f32 {
        self.zoom = clamp_zoom(zoom);
        self.zoom
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    pub fn go_to(&mut self, index: usize) {
        self.index = index.min(self.pages.len().saturating_sub(1));
    }

    pub fn can_advance(&self, direction: FlipDirection) -> bool {
        self.target(direction).is_some()
    }

    pub fn footer_label(&self) -> String {
        format!("Page {} / {}", self.index + 1, self.page_count())
    }

    /// Page rasterized at the current zoom.
    pub fn render_page(&self, index: usize) -> Option<Bitmap> {
        let bitmap = decode(self.pages.get(index)?)?;
        Some(scale(&bitmap, self.zoom))
    }

    fn target(&self, direction: FlipDirection) -> Option<usize> {
        let target = self.index as i64 + direction.step();
        if target < 0 || target >= self.pages.len() as i64 {
            None
        } else {
            Some(target as usize)
        }
    }
}

impl PageSource for PagedDocument {
    fn layout(&self) -> ViewerLayout {
        ViewerLayout::FixedPage
    }

    fn current_bitmap(&self) -> Option<Bitmap> {
        self.render_page(self.index)
    }

    fn adjacent_bitmap(&self, direction: FlipDirection) -> Option<Bitmap> {
        self.render_page(self.target(direction)?)
    }

    fn content_area(&self) -> Rect {
        Rect::from_size(self.viewport.0, self.viewport.1)
    }

    fn advance_position(&mut self, direction: FlipDirection) {
        if let Some(target) = self.target(direction) {
            self.index = target;
        }
    }
}
