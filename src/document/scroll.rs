use super::{clamp_zoom, scale};
use folio_core::{Bitmap, FlipDirection, PageSource, Rect, SCROLL_PAGE_BACKGROUND, ViewerLayout};
use image::RgbaImage;
use image::imageops;

/// A single tall strip read through a scrolling viewport.
pub struct ScrollDocument {
    original: Bitmap,
    strip: Bitmap,
    zoom: f32,
    offset: u32,
    viewport: (u32, u32),
}

impl ScrollDocument {
    pub fn new(strip: Bitmap) -> Self {
        Self {
            strip: strip.clone(),
            original: strip,
            zoom: 1.0,
            offset: 0,
            viewport: (0, 0),
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Rescale the strip, keeping the same relative reading position.
    pub fn set_zoom(&mut self, zoom: f32) -> f32 {
        let zoom = clamp_zoom(zoom);
        if (zoom - self.zoom).abs() < f32::EPSILON {
            return self.zoom;
        }
        let fraction = self.read_fraction();
        self.zoom = zoom;
        self.strip = scale(&self.original, zoom);
        self.offset = (fraction * self.max_offset() as f32).round() as u32;
        self.zoom
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.offset = self.offset.min(self.max_offset());
    }

    /// Largest offset at which the viewport still lies inside the strip.
    pub fn max_offset(&self) -> u32 {
        self.strip.height().saturating_sub(self.viewport.1)
    }

    pub fn scroll_to(&mut self, offset: u32) {
        self.offset = offset.min(self.max_offset());
    }

    /// Returns `true` when the offset changed.
    pub fn scroll_by(&mut self, delta: f32) -> bool {
        if !delta.is_finite() {
            return false;
        }
        let target = (self.offset as f32 + delta).round().max(0.0) as u32;
        let before = self.offset;
        self.scroll_to(target);
        self.offset != before
    }

    pub fn can_advance(&self, direction: FlipDirection) -> bool {
        self.target(direction).is_some()
    }

    pub fn footer_label(&self) -> String {
        if self.max_offset() == 0 {
            return "Page 1".to_string();
        }
        format!("Read {}%", (self.read_fraction() * 100.0).round() as u32)
    }

    fn read_fraction(&self) -> f32 {
        let max = self.max_offset();
        if max == 0 {
            0.0
        } else {
            self.offset as f32 / max as f32
        }
    }

    /// Offset one viewport away, or `None` when it would leave the strip.
    fn target(&self, direction: FlipDirection) -> Option<u32> {
        let step = i64::from(self.viewport.1);
        if step == 0 {
            return None;
        }
        let target = i64::from(self.offset) + direction.step() * step;
        if target < 0 || target > i64::from(self.max_offset()) {
            None
        } else {
            Some(target as u32)
        }
    }

    /// Viewport-sized capture at `offset`, the strip centered horizontally on white.
    fn capture(&self, offset: u32) -> Option<Bitmap> {
        let (width, height) = self.viewport;
        if width == 0 || height == 0 {
            return None;
        }
        let mut frame = RgbaImage::from_pixel(width, height, SCROLL_PAGE_BACKGROUND);
        let x = (i64::from(width) - i64::from(self.strip.width())) / 2;
        imageops::overlay(&mut frame, &self.strip, x, -i64::from(offset));
        Some(frame)
    }
}

impl PageSource for ScrollDocument {
    fn layout(&self) -> ViewerLayout {
        ViewerLayout::Scrollable
    }

    fn current_bitmap(&self) -> Option<Bitmap> {
        self.capture(self.offset)
    }

    fn adjacent_bitmap(&self, direction: FlipDirection) -> Option<Bitmap> {
        self.capture(self.target(direction)?)
    }

    fn content_area(&self) -> Rect {
        Rect::from_size(self.viewport.0, self.viewport.1)
    }

    fn advance_position(&mut self, direction: FlipDirection) {
        if let Some(target) = self.target(direction) {
            self.offset = target;
        }
    }
}
