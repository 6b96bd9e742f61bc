//! Readable documents and their page sources.
//!
//! A directory of page images opens as a fixed-page document; a single tall
//! image opens as a scroll strip. Both hand snapshots to the flip engine
//! through [`PageSource`].

mod paged;
mod scroll;

pub use paged::PagedDocument;
pub use scroll::ScrollDocument;

use anyhow::{Context, Result, anyhow};
use folio_core::{Bitmap, FlipDirection, PageSource, Rect, ViewerLayout};
use image::imageops::{self, FilterType};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

pub fn clamp_zoom(zoom: f32) -> f32 {
    if zoom.is_finite() {
        zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    } else {
        1.0
    }
}

pub enum Document {
    Paged(PagedDocument),
    Scroll(ScrollDocument),
}

impl Document {
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        match self {
            Document::Paged(doc) => doc.set_viewport(width, height),
            Document::Scroll(doc) => doc.set_viewport(width, height),
        }
    }

    pub fn zoom(&self) -> f32 {
        match self {
            Document::Paged(doc) => doc.zoom(),
            Document::Scroll(doc) => doc.zoom(),
        }
    }

    /// Returns the zoom actually applied after clamping.
    pub fn set_zoom(&mut self, zoom: f32) -> f32 {
        match self {
            Document::Paged(doc) => doc.set_zoom(zoom),
            Document::Scroll(doc) => doc.set_zoom(zoom),
        }
    }

    /// Page index or scroll offset, depending on the layout.
    pub fn position(&self) -> usize {
        match self {
            Document::Paged(doc) => doc.index(),
            Document::Scroll(doc) => doc.offset() as usize,
        }
    }

    pub fn set_position(&mut self, position: usize) {
        match self {
            Document::Paged(doc) => doc.go_to(position),
            Document::Scroll(doc) => doc.scroll_to(u32::try_from(position).unwrap_or(u32::MAX)),
        }
    }

    pub fn can_advance(&self, direction: FlipDirection) -> bool {
        match self {
            Document::Paged(doc) => doc.can_advance(direction),
            Document::Scroll(doc) => doc.can_advance(direction),
        }
    }

    /// Scroll strips move by `delta` pixels; fixed pages ignore wheel input.
    pub fn scroll_by(&mut self, delta: f32) -> bool {
        match self {
            Document::Paged(_) => false,
            Document::Scroll(doc) => doc.scroll_by(delta),
        }
    }

    pub fn footer_label(&self) -> String {
        match self {
            Document::Paged(doc) => doc.footer_label(),
            Document::Scroll(doc) => doc.footer_label(),
        }
    }
}

impl PageSource for Document {
    fn layout(&self) -> ViewerLayout {
        match self {
            Document::Paged(doc) => doc.layout(),
            Document::Scroll(doc) => doc.layout(),
        }
    }

    fn current_bitmap(&self) -> Option<Bitmap> {
        match self {
            Document::Paged(doc) => doc.current_bitmap(),
            Document::Scroll(doc) => doc.current_bitmap(),
        }
    }

    fn adjacent_bitmap(&self, direction: FlipDirection) -> Option<Bitmap> {
        match self {
            Document::Paged(doc) => doc.adjacent_bitmap(direction),
            Document::Scroll(doc) => doc.adjacent_bitmap(direction),
        }
    }

    fn content_area(&self) -> Rect {
        match self {
            Document::Paged(doc) => doc.content_area(),
            Document::Scroll(doc) => doc.content_area(),
        }
    }

    fn advance_position(&mut self, direction: FlipDirection) {
        match self {
            Document::Paged(doc) => doc.advance_position(direction),
            Document::Scroll(doc) => doc.advance_position(direction),
        }
    }
}

/// Open `path` as a document sized for a `width × height` viewport.
pub fn load_document(path: &Path, width: u32, height: u32, zoom: f32) -> Result<Document> {
    let mut document = if path.is_dir() {
        let pages = collect_page_files(path)?;
        info!(path = %path.display(), pages = pages.len(), "Opening page directory");
        Document::Paged(PagedDocument::from_files(pages))
    } else {
        let strip = image::open(path)
            .with_context(|| format!("Failed to decode image {}", path.display()))?
            .to_rgba8();
        info!(
            path = %path.display(),
            width = strip.width(),
            height = strip.height(),
            "Opening scroll strip"
        );
        Document::Scroll(ScrollDocument::new(strip))
    };
    document.set_viewport(width, height);
    document.set_zoom(zoom);
    Ok(document)
}

fn collect_page_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;
    let mut pages = Vec::new();
    for entry in entries {
        let path = entry.context("Failed to read directory entry")?.path();
        if is_page_image(&path) {
            pages.push(path);
        }
    }
    if pages.is_empty() {
        return Err(anyhow!("No page images found in {}", dir.display()));
    }
    pages.sort();
    debug!(count = pages.len(), "Collected page images");
    Ok(pages)
}

fn is_page_image(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false)
}

/// Resample `bitmap` by `zoom`, keeping at least one pixel per side.
pub(crate) fn scale(bitmap: &Bitmap, zoom: f32) -> Bitmap {
    if (zoom - 1.0).abs() < f32::EPSILON {
        return bitmap.clone();
    }
    let width = ((bitmap.width() as f32 * zoom).round() as u32).max(1);
    let height = ((bitmap.height() as f32 * zoom).round() as u32).max(1);
    imageops::resize(bitmap, width, height, FilterType::Triangle)
}

/// Page-image directory whose page `i` is a solid color with red channel `i`.
#[cfg(test)]
pub(crate) fn shaded_pages(name: &str, pages: u8, width: u32, height: u32) -> PagedDocument {
    use image::{Rgba, RgbaImage};
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT: AtomicUsize = AtomicUsize::new(0);
    let dir = std::env::temp_dir().join(format!(
        "folio-pages-{name}-{}-{}",
        std::process::id(),
        NEXT.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create page dir");
    let paths = (0..pages)
        .map(|shade| {
            let path = dir.join(format!("{shade:03}.png"));
            RgbaImage::from_pixel(width, height, Rgba([shade, 0, 0, 255]))
                .save(&path)
                .expect("write page");
            path
        })
        .collect();
    PagedDocument::from_files(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("folio-doc-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn zoom_is_clamped_to_supported_range() {
        assert_eq!(clamp_zoom(0.1), MIN_ZOOM);
        assert_eq!(clamp_zoom(1.25), 1.25);
        assert_eq!(clamp_zoom(12.0), MAX_ZOOM);
        assert_eq!(clamp_zoom(f32::NAN), 1.0);
    }

    #[test]
    fn scale_resamples_both_axes() {
        let bitmap = RgbaImage::from_pixel(100, 40, Rgba([1, 2, 3, 255]));
        assert_eq!(scale(&bitmap, 1.5).dimensions(), (150, 60));
        assert_eq!(scale(&bitmap, 1.0).dimensions(), (100, 40));
    }

    #[test]
    fn directory_opens_as_sorted_pages() {
        let dir = scratch_dir("pages");
        for (name, shade) in [("002.png", 20u8), ("001.png", 10), ("notes.txt", 0)] {
            let path = dir.join(name);
            if name.ends_with(".png") {
                RgbaImage::from_pixel(4, 6, Rgba([shade, shade, shade, 255]))
                    .save(&path)
                    .expect("write page");
            } else {
                fs::write(&path, "skip me").expect("write note");
            }
        }

        let document = load_document(&dir, 100, 100, 1.0).expect("load pages");
        assert_eq!(document.layout(), ViewerLayout::FixedPage);
        assert_eq!(document.footer_label(), "Page 1 / 2");
        let first = document.current_bitmap().expect("first page");
        assert_eq!(first.get_pixel(0, 0)[0], 10);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = scratch_dir("empty");
        assert!(load_document(&dir, 100, 100, 1.0).is_err());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn single_image_opens_as_scroll_strip() {
        let dir = scratch_dir("strip");
        let path = dir.join("strip.png");
        RgbaImage::from_pixel(50, 500, Rgba([0, 0, 0, 255]))
            .save(&path)
            .expect("write strip");
        let document = load_document(&path, 50, 100, 1.0).expect("load strip");
        assert_eq!(document.layout(), ViewerLayout::Scrollable);
        assert_eq!(document.content_area(), Rect::from_size(50, 100));
        let _ = fs::remove_dir_all(&dir);
    }
}
